//! Custom error types for DeepL node operations

use thiserror::Error;

/// Errors raised while translating pipeline items
#[derive(Error, Debug)]
pub enum DeeplError {
    /// The API answered but returned no translation candidate
    #[error("No translation returned by the API")]
    EmptyTranslation,

    /// API request failed with a non-success status
    #[error("API error: {status} - {message}")]
    ApiError {
        status: u16,
        message: String,
    },

    /// API key rejected
    #[error("Authorization failed. Please check your DeepL API key")]
    AuthError,

    /// Rate limit exceeded
    #[error("Rate limit exceeded. Retry after {retry_after:?} seconds")]
    RateLimitError {
        retry_after: Option<u64>,
    },

    /// Character quota exceeded
    #[error("Character quota exceeded for this billing period")]
    QuotaExceededError,

    /// Network error
    #[error("Network error: {message}")]
    NetworkError {
        message: String,
    },

    /// Request timeout
    #[error("Request timeout")]
    TimeoutError,

    /// Invalid response from API
    #[error("Invalid response: {message}")]
    InvalidResponseError {
        message: String,
    },

    /// Missing required field
    #[error("Missing required field: {field}")]
    MissingField {
        field: String,
    },

    /// Resource/operation pair this node does not implement
    #[error("The operation \"{operation}\" is not supported for resource \"{resource}\"")]
    UnsupportedOperation {
        resource: String,
        operation: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
    },

    /// Reqwest error
    #[error("HTTP client error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Configuration source error
    #[error("Config source error: {0}")]
    ConfigSourceError(#[from] config::ConfigError),
}

impl DeeplError {
    /// Whether the error came from the remote request rather than local input
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            DeeplError::ApiError { .. }
                | DeeplError::AuthError
                | DeeplError::RateLimitError { .. }
                | DeeplError::QuotaExceededError
                | DeeplError::NetworkError { .. }
                | DeeplError::TimeoutError
                | DeeplError::InvalidResponseError { .. }
                | DeeplError::HttpError(_)
        )
    }
}

/// Result type for DeepL node operations
pub type Result<T> = std::result::Result<T, DeeplError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_classification() {
        assert!(DeeplError::QuotaExceededError.is_remote());
        assert!(DeeplError::ApiError {
            status: 400,
            message: "bad".to_string()
        }
        .is_remote());
        assert!(!DeeplError::EmptyTranslation.is_remote());
        assert!(!DeeplError::MissingField {
            field: "text".to_string()
        }
        .is_remote());
    }

    #[test]
    fn test_error_messages() {
        let err = DeeplError::UnsupportedOperation {
            resource: "language".to_string(),
            operation: "detect".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "The operation \"detect\" is not supported for resource \"language\""
        );
    }
}
