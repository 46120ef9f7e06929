//! Session-owned records: decoded replies, exchanges, and captured errors

use std::fmt;

use nad_api::{ApiError, WireReply};
use nad_codec::{Command, Value};

/// A reply decoded from the wire
///
/// The variable name is kept exactly as the device reported it; it becomes
/// the Device State key regardless of what the request asked for.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub variable: String,
    pub value: Value,
}

impl From<WireReply> for Reply {
    fn from(wire: WireReply) -> Self {
        Self {
            variable: wire.variable,
            value: Value::from_wire(&wire.value),
        }
    }
}

impl fmt::Display for Reply {
    /// The device's echo form; replies carry no operator on the wire
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Main.{}={}", self.variable, self.value.to_wire())
    }
}

/// The last request/reply pair, kept for console rendering only
///
/// Replaced wholesale on every successful write exchange; never consulted
/// for state truth.
#[derive(Debug, Clone, PartialEq)]
pub struct Exchange {
    pub request: Command,
    pub reply: Reply,
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sent:     {}\nreceived: {}", self.request, self.reply)
    }
}

/// The most recent transport or server failure
///
/// `status` is the HTTP status for bridge-reported failures and `None` for
/// transport failures that never produced a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub status: Option<u16>,
    pub message: String,
}

impl From<ApiError> for ErrorRecord {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, message } => Self {
                status: Some(status),
                message,
            },
            other => Self {
                status: None,
                message: other.to_string(),
            },
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "{} ({})", self.message, status),
            None => f.write_str(&self.message),
        }
    }
}
