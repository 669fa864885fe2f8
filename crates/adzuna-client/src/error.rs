//! # Client Error Types
//!
//! Unified error handling for Adzuna API dispatch and configuration.

use thiserror::Error;

/// Client operation result type
pub type ClientResult<T> = Result<T, ClientError>;

/// Error types for client operations
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("JSON serialization/deserialization failed: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("API Error {status}: {message}")]
    ApiError { status: u16, message: String },

    #[error("Timeout waiting for operation: {operation}")]
    Timeout { operation: String },

    #[error("Invalid URL: {0}")]
    UrlError(#[from] url::ParseError),
}

impl ClientError {
    /// Create an API error from HTTP response
    pub fn api_error(status: u16, message: impl Into<String>) -> Self {
        Self::ApiError {
            status,
            message: message.into(),
        }
    }

    /// Create a configuration error
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError(message.into())
    }

    /// Map a transport failure, splitting timeouts out of generic HTTP errors.
    pub(crate) fn from_transport(operation: &str, error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout {
                operation: operation.to_string(),
            }
        } else {
            Self::HttpError(error)
        }
    }

    /// Upstream HTTP status, present only for [`ClientError::ApiError`].
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when the upstream API answered with a non-2xx status.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        matches!(self, ClientError::ApiError { .. })
    }

    /// True when no response was obtained (connection failure or timeout).
    #[must_use]
    pub fn is_transport_error(&self) -> bool {
        matches!(self, ClientError::HttpError(_) | ClientError::Timeout { .. })
    }
}
