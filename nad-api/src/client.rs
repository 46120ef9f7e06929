//! HTTP client for the control bridge

use std::time::Duration;

use crate::wire::{WireCommand, WireError, WireReply};
use crate::{ApiError, Result};

/// A client for the amplifier control bridge
///
/// The bridge exposes a read route per variable and a single write route
/// for commands. Both answer with a `{Variable, Value}` JSON body; the
/// reply names the variable it reports on, which is not necessarily the
/// one that was asked about.
#[derive(Debug, Clone)]
pub struct NadClient {
    agent: ureq::Agent,
    base_url: String,
}

impl NadClient {
    /// Create a client for the bridge at `base_url`
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(10))
                .build(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Read the current value of a single variable
    pub fn read_state(&self, variable: &str) -> Result<WireReply> {
        let url = format!("{}/api/v1/nad/state/{}", self.base_url, variable);
        let response = self.agent.get(&url).call().map_err(into_api_error)?;
        response
            .into_json()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }

    /// Send a command and return the device's reply
    pub fn send(&self, command: &WireCommand) -> Result<WireReply> {
        let url = format!("{}/api/v1/nad", self.base_url);
        let response = self
            .agent
            .post(&url)
            .send_json(command)
            .map_err(into_api_error)?;
        response
            .into_json()
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

/// Map a transport or status failure into the client error taxonomy
///
/// The bridge reports failures as a JSON `{status, message}` body; when the
/// body is something else the raw text stands in, and an empty body falls
/// back to the bare status code.
fn into_api_error(err: ureq::Error) -> ApiError {
    match err {
        ureq::Error::Status(status, response) => {
            let body = response.into_string().unwrap_or_default();
            let message = serde_json::from_str::<WireError>(&body)
                .map(|e| e.message)
                .unwrap_or_else(|_| {
                    if body.is_empty() {
                        format!("HTTP {status}")
                    } else {
                        body
                    }
                });
            ApiError::Status { status, message }
        }
        other => ApiError::Network(other.to_string()),
    }
}
