//! Error types for portal API calls.

use thiserror::Error;

/// Errors that can occur while talking to the portal backend.
///
/// A failed lookup shows the user one generic notice regardless of cause;
/// the variants exist for logging and for code that wants to branch.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    /// Network-level failure (connection refused, timeout, TLS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("unexpected status {status} from {endpoint}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Endpoint path that produced the response.
        endpoint: String,
    },

    /// The response body did not match the expected shape.
    #[error("payload decode error: {0}")]
    Payload(String),
}

impl ApiError {
    /// Returns a user-friendly message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Network(_) => "Could not reach the server.",
            Self::Status { .. } | Self::Payload(_) => "The server sent an unexpected response.",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Payload(err.to_string())
    }
}

/// Result type alias for portal API operations.
pub type Result<T> = std::result::Result<T, ApiError>;
