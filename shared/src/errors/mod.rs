//! Shared error response structure

use serde::{Deserialize, Serialize};

/// Error body returned by every failed API request.
///
/// The wire shape is the gateway's contract with retry-aware clients: the
/// `error_code` is finer grained than the HTTP status line (for example,
/// retriable and non-retriable broker failures share a 500 status but carry
/// distinct codes).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Gateway error code for client identification
    pub error_code: u16,

    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error_code: u16, message: impl Into<String>) -> Self {
        Self {
            error_code,
            message: message.into(),
        }
    }
}
