//! Error types for the pptwizard library.

use std::io;
use thiserror::Error;

/// Result type alias for pptwizard operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while driving the presentation wizard.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Transport-level failure (connection refused, DNS, TLS, ...).
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// A request or response body could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service answered with a non-success status.
    #[error("Request failed with status {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body or reason phrase
        message: String,
    },

    /// The service rejected the bearer token. The stored token has been cleared.
    #[error("Not authorized: please log in again")]
    Unauthorized,

    /// The login response carried no access token.
    #[error("No access token received")]
    MissingToken,

    /// Input rejected before any request was made.
    #[error("{0}")]
    Validation(String),

    /// A request is already outstanding for the current step.
    #[error("Another request is still in progress")]
    Busy,

    /// The action does not belong to the current wizard step.
    #[error("Action not available on step {0}")]
    InvalidStep(u8),

    /// A string did not name a known enumerated option.
    #[error("Invalid value '{value}' for {field}")]
    InvalidValue {
        /// Name of the option being parsed
        field: &'static str,
        /// Offending input
        value: String,
    },

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Build an `InvalidValue` error.
    pub fn invalid_value(field: &'static str, value: impl Into<String>) -> Self {
        Error::InvalidValue {
            field,
            value: value.into(),
        }
    }

    /// Whether this error means the credentials are no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}
