//! Gateway error codes and the factories that build structured errors.
//!
//! Codes follow the gateway numbering convention: HTTP status class times one
//! hundred plus an ordinal, with bare status values serving as their own
//! default codes. Only the codes the classifier needs live here; the registry
//! is not an exhaustive catalogue of broker conditions.

use crate::errors::rest::RestError;

/// Default code for server errors that carry no finer classification.
pub const DEFAULT_ERROR_CODE: u16 = 500;

/// Broker rejected the client's credentials.
pub const KAFKA_AUTHENTICATION_ERROR_CODE: u16 = 40101;

/// Principal is not authorized for the requested resource.
pub const KAFKA_AUTHORIZATION_ERROR_CODE: u16 = 40301;

/// Request addressed a partition that does not exist.
pub const PARTITION_NOT_FOUND_ERROR_CODE: u16 = 40402;

/// Non-retriable broker failure.
pub const KAFKA_ERROR_ERROR_CODE: u16 = 50002;

/// Retriable broker failure; clients may repeat the request.
pub const KAFKA_RETRIABLE_ERROR_ERROR_CODE: u16 = 50003;

/// Structured error for a broker authentication failure. The message is the
/// client-reported one, unchanged.
pub fn authentication_error(message: impl Into<String>) -> RestError {
    RestError::new(401, KAFKA_AUTHENTICATION_ERROR_CODE, message)
}

/// Structured error for a broker authorization failure. The message is the
/// client-reported one, unchanged.
pub fn authorization_error(message: impl Into<String>) -> RestError {
    RestError::new(403, KAFKA_AUTHORIZATION_ERROR_CODE, message)
}

/// Fixed structured error for requests that addressed a missing partition.
pub fn partition_not_found() -> RestError {
    RestError::new(404, PARTITION_NOT_FOUND_ERROR_CODE, "Partition not found.")
}

/// Generic structured error for any other broker failure. The original
/// failure is retained as the error source and quoted in the message.
pub fn kafka_error(source: impl std::error::Error + Send + Sync + 'static) -> RestError {
    let message = format!("Kafka error: {source}");
    RestError::new(500, KAFKA_ERROR_ERROR_CODE, message).with_source(source)
}
