//! Error types for calls to the climate API
use thiserror::Error;

/// Failure of a single API call. None of these are retried.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Connection refused, DNS failure, or any other transport error
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// No response within the request timeout
    #[error("Request timed out after {0:?}")]
    Timeout(std::time::Duration),

    /// The backend answered with a non-2xx status
    #[error("Unexpected HTTP status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected shape
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The configured base path does not form a valid URL
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, ApiError::Timeout(_))
    }
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
