//! Client Error Types

use thiserror::Error;

/// Errors that can occur when talking to the housing API
///
/// The dashboard treats every variant the same way; the distinction only
/// matters for logs.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Malformed response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("Backend unavailable: {0}")]
    Unavailable(String),
}

impl ClientError {
    /// Short machine-readable tag for structured logs
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Request(e) if e.is_timeout() => "timeout",
            ClientError::Request(e) if e.is_connect() => "connect",
            ClientError::Request(_) => "request",
            ClientError::Status { .. } => "status",
            ClientError::Decode { .. } => "decode",
            ClientError::Unavailable(_) => "unavailable",
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
