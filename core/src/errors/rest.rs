//! The structured error handed to the HTTP layer.

use thiserror::Error;

use krest_shared::errors::ErrorResponse;

/// Service-visible error: an HTTP-like status, a fine-grained gateway error
/// code, and a human-readable message.
///
/// The failure that caused it, when one is retained, is reachable through
/// [`std::error::Error::source`] so diagnostics lose nothing across the
/// translation.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct RestError {
    /// HTTP status the response should carry
    pub status: u16,

    /// Gateway error code, finer grained than the status
    pub code: u16,

    /// Human-readable message
    pub message: String,

    /// The original failure, if it was retained as context
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl RestError {
    /// Create a structured error with no retained cause
    pub fn new(status: u16, code: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Attach the failure that caused this error
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl From<&RestError> for ErrorResponse {
    fn from(error: &RestError) -> Self {
        ErrorResponse::new(error.code, error.message.clone())
    }
}
