use std::io;
use thiserror::Error;

/// Error type for check_redfish
#[derive(Error, Debug)]
pub enum CheckError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {status} returned for {url}")]
    Status { status: u16, url: String },

    #[error("Invalid JSON from management board: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("{0}")]
    InvalidArgument(String),

    /// Telemetry is missing a field the check depends on. The message is
    /// rendered verbatim as the plugin output.
    #[error("{0}")]
    Data(String),
}

/// Result type alias for check_redfish
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a data-shape error
    pub fn data<S: Into<String>>(msg: S) -> Self {
        CheckError::Data(msg.into())
    }

    pub fn auth<S: Into<String>>(msg: S) -> Self {
        CheckError::Auth(msg.into())
    }

    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        CheckError::InvalidArgument(msg.into())
    }
}
