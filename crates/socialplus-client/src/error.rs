//! Error types for SocialPlus client operations.

use socialplus_core::{MappingError, ValidationError};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors returned by SocialPlus client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    /// API request failed with a non-success HTTP status.
    #[error("SocialPlus API request failed with status {status}: {method} {url}")]
    ApiRequestFailed {
        /// HTTP status code
        status: u16,
        /// HTTP method of the request
        method: &'static str,
        /// The URL that was requested
        url: String,
    },

    /// A request or response body did not match its schema.
    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from SocialPlus API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The client configuration is unusable.
    #[error("Invalid client configuration: {message}")]
    Configuration {
        /// Description of the problem
        message: String,
    },
}

impl ClientError {
    /// The schema violation behind this error, if it is one.
    pub const fn validation(&self) -> Option<&ValidationError> {
        match self {
            Self::Mapping(err) => err.validation(),
            _ => None,
        }
    }

    /// HTTP status of a failed request.
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ApiRequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<ValidationError> for ClientError {
    fn from(err: ValidationError) -> Self {
        Self::Mapping(MappingError::Validation(err))
    }
}
