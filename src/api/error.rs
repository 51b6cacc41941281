//! Backend Error Types
//!
//! Every variant collapses into one user-facing string at the call site;
//! the variant itself only shows up in logs.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection refused, DNS failure, CORS rejection and the like
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    /// Non-2xx response
    #[error("Backend returned HTTP {status}")]
    Status { status: u16 },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    Decode(String),
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            ApiError::Timeout
        } else if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else if let Some(status) = e.status() {
            ApiError::Status {
                status: status.as_u16(),
            }
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
