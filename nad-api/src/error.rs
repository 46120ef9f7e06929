//! Error types for the control bridge client

use thiserror::Error;

/// Errors that can occur while talking to the control bridge
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection-level failure, no HTTP response was received
    #[error("network error: {0}")]
    Network(String),

    /// The response body was not the expected JSON shape
    #[error("parse error: {0}")]
    Parse(String),

    /// The bridge answered with a non-2xx status
    #[error("{message} ({status})")]
    Status { status: u16, message: String },
}

/// Type alias for results that can return an `ApiError`
pub type Result<T> = std::result::Result<T, ApiError>;
