//! Error type for backend API operations.

use reqwest::StatusCode;

/// Error type for backend API operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Parse(#[from] serde_json::Error),

    /// Local file could not be read for upload.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),
}
