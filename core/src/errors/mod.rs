//! Gateway error types and failure classification.

mod classify;
mod registry;
mod rest;

#[cfg(test)]
mod tests;

// Re-export all error types and utilities
pub use classify::{
    convert_admin_error, convert_consume_error, convert_produce_error, produce_error_code,
    ConsumeError, UNEXPECTED_PRODUCER_ERROR,
};
pub use registry::{
    authentication_error, authorization_error, kafka_error, partition_not_found,
    DEFAULT_ERROR_CODE, KAFKA_AUTHENTICATION_ERROR_CODE, KAFKA_AUTHORIZATION_ERROR_CODE,
    KAFKA_ERROR_ERROR_CODE, KAFKA_RETRIABLE_ERROR_ERROR_CODE, PARTITION_NOT_FOUND_ERROR_CODE,
};
pub use rest::RestError;
