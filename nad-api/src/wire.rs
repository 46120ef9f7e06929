//! JSON wire types for the control bridge
//!
//! The bridge speaks PascalCase JSON for commands and replies, and a
//! lowercase `{status, message}` body for errors. Values are always
//! strings on the wire; decoding them into semantic form is the codec's
//! job, one layer up.

use serde::{Deserialize, Serialize};

/// Wire form of a control command, as POSTed to the bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireCommand {
    pub variable: String,
    pub operator: String,
    /// Omitted entirely (not null) for `+`, `-` and `?` commands
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Reply payload for both state reads and command writes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireReply {
    pub variable: String,
    pub value: String,
}

/// JSON error body the bridge returns alongside a non-2xx status
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct WireError {
    #[allow(dead_code)]
    pub status: u16,
    pub message: String,
}
