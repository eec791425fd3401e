//! Error Types

use thiserror::Error;

/// Result type alias for landing operations
pub type Result<T> = std::result::Result<T, LandingError>;

/// Landing error types
#[derive(Error, Debug)]
pub enum LandingError {
    /// Request never produced a response (DNS, refused connection, CORS...)
    #[error("Network error: {0}")]
    Network(String),

    /// Backend answered with a non-success status
    #[error("Unexpected status: {code}")]
    Status { code: u16 },

    /// Response body did not match the plans contract
    #[error("Decode error: {0}")]
    Decode(String),

    /// Key/value storage unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LandingError {
    /// Check if error is transient.
    ///
    /// Nothing retries today; the flag is reported alongside logged failures.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Status { code } => *code >= 500,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(LandingError::Network("refused".into()).is_retryable());
        assert!(LandingError::Status { code: 503 }.is_retryable());
        assert!(!LandingError::Status { code: 404 }.is_retryable());
        assert!(!LandingError::Decode("missing plans".into()).is_retryable());
    }
}
