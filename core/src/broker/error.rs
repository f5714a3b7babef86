//! Failure types raised by the broker client.
//!
//! The gateway only distinguishes the failure kinds that change how a request
//! is answered; every client implementation collapses its own error surface
//! into this taxonomy before the failure crosses into the service.

use thiserror::Error;

/// A failure raised by a produce, fetch, or metadata operation.
///
/// The payload of every variant is the client-supplied human-readable
/// message; `Display` renders it unchanged so the message survives wrapping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KafkaError {
    /// SASL/SSL handshake or credential failure.
    #[error("{0}")]
    Authentication(String),

    /// The authenticated principal lacks access to the topic, group, or
    /// cluster resource.
    #[error("{0}")]
    Authorization(String),

    /// Transient failure the client may safely retry, such as metadata that
    /// is not yet available or a leader election in progress.
    #[error("{0}")]
    Retriable(String),

    /// Any other failure raised by the broker client itself.
    #[error("{0}")]
    Broker(String),

    /// A failure that did not originate in the broker client's own taxonomy
    /// (for example a panic payload or an I/O error leaking through).
    #[error("{0}")]
    Unexpected(String),
}

impl KafkaError {
    /// The client-supplied message, regardless of kind.
    pub fn message(&self) -> &str {
        match self {
            KafkaError::Authentication(message)
            | KafkaError::Authorization(message)
            | KafkaError::Retriable(message)
            | KafkaError::Broker(message)
            | KafkaError::Unexpected(message) => message,
        }
    }
}

/// A failure raised by an administrative operation.
///
/// Admin calls execute on the client's background task and surface their
/// result through a future, so the broker failure (when there is one) arrives
/// wrapped one level deep in `Execution`. The remaining variants cover calls
/// that never produced a broker result at all.
#[derive(Debug, Clone, Error)]
pub enum AdminError {
    /// The admin future completed with a failure raised inside the client
    /// task. The cause is absent when the task died without reporting one.
    #[error("admin operation failed")]
    Execution { source: Option<KafkaError> },

    /// The result future was dropped before the task produced a value.
    #[error("admin operation canceled before completion")]
    Canceled,

    /// No result arrived within the client's request deadline.
    #[error("admin operation timed out after {0} ms")]
    Timeout(u64),
}

impl AdminError {
    /// Wraps a broker failure the way the client's result future reports it.
    pub fn execution(cause: KafkaError) -> Self {
        Self::Execution {
            source: Some(cause),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_kafka_error_display_is_message() {
        let error = KafkaError::Authorization("Not authorized to access topics: [events]".to_string());
        assert_eq!(
            error.to_string(),
            "Not authorized to access topics: [events]"
        );
        assert_eq!(error.message(), "Not authorized to access topics: [events]");
    }

    #[test]
    fn test_admin_execution_exposes_cause_as_source() {
        let error = AdminError::execution(KafkaError::Broker("Topic 'events' already exists.".to_string()));
        let source = error.source().unwrap();
        assert_eq!(source.to_string(), "Topic 'events' already exists.");
    }

    #[test]
    fn test_admin_execution_without_cause_has_no_source() {
        let error = AdminError::Execution { source: None };
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "admin operation failed");
    }

    #[test]
    fn test_admin_timeout_display() {
        let error = AdminError::Timeout(30_000);
        assert_eq!(error.to_string(), "admin operation timed out after 30000 ms");
        assert!(error.source().is_none());
    }
}
