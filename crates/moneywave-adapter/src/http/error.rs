/*
[INPUT]:  Error sources (validation, auth, transport, serialization)
[OUTPUT]: Structured error types with retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Failure raised by an `HttpTransport` before a reply was received
#[derive(Error, Debug)]
pub enum TransportError {
    /// reqwest could not complete the round trip
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure reported by a custom transport implementation
    #[error("transport failure: {0}")]
    Other(String),
}

/// Main error type for the Moneywave adapter
///
/// Only failures that prevent an operation from being attempted end up
/// here. Errors reported by the API itself are carried by
/// [`MoneywaveResponse`](crate::MoneywaveResponse).
#[derive(Error, Debug)]
pub enum MoneywaveError {
    /// A required field is missing or the payload is otherwise unusable
    #[error("{0}")]
    Validation(String),

    /// No access token could be obtained
    #[error("Authentication failed: {message}")]
    Authentication { message: String },

    /// Network or transport failure
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl MoneywaveError {
    /// Shorthand for a validation failure
    pub fn validation(message: impl Into<String>) -> Self {
        MoneywaveError::Validation(message.into())
    }

    /// Shorthand for an authentication failure
    pub fn authentication(message: impl Into<String>) -> Self {
        MoneywaveError::Authentication {
            message: message.into(),
        }
    }

    /// Check if the same call may simply be repeated
    pub fn is_retryable(&self) -> bool {
        matches!(self, MoneywaveError::Transport(_))
    }

    /// Check if error indicates authentication failure
    pub fn is_auth_error(&self) -> bool {
        matches!(self, MoneywaveError::Authentication { .. })
    }

    /// Check if error was raised by pre-flight validation
    pub fn is_validation_error(&self) -> bool {
        matches!(self, MoneywaveError::Validation(_))
    }
}

/// Result type alias for Moneywave operations
pub type Result<T> = std::result::Result<T, MoneywaveError>;
