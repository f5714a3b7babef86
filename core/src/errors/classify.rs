//! Classification of broker failures into the gateway error vocabulary.
//!
//! Free functions, one per call pattern of the REST surface: the produce path
//! needs a per-record error code and a request-level structured error, the
//! consume path translates lazily (its input may already be structured), and
//! the admin path unwraps the async-result wrapper before dispatching on the
//! cause. Every function is a pure mapping over the failure's kind; the one
//! exception is the "Invalid partition" sniff, kept in an isolated predicate
//! because the producer client reports that condition only as message text.

use thiserror::Error;

use crate::broker::{AdminError, KafkaError};
use crate::errors::registry::{
    authentication_error, authorization_error, kafka_error, partition_not_found,
    DEFAULT_ERROR_CODE, KAFKA_ERROR_ERROR_CODE, KAFKA_RETRIABLE_ERROR_ERROR_CODE,
};
use crate::errors::rest::RestError;

/// Diagnostic carried by the server error raised when a produce failure falls
/// outside the broker taxonomy and the whole request is failed rather than
/// attributed to one record.
pub const UNEXPECTED_PRODUCER_ERROR: &str =
    "Unexpected non-Kafka-like exception returned by broker client";

/// Failure slot of the consume path: either a raw client failure or an error
/// already structured elsewhere in the service (for example the
/// partition-existence pre-check).
#[derive(Debug, Error)]
pub enum ConsumeError {
    #[error(transparent)]
    Kafka(#[from] KafkaError),

    #[error(transparent)]
    Rest(#[from] RestError),
}

/// Per-record error code for a failed produce.
///
/// Authentication and authorization failures collapse to the bare 403 status;
/// retriable and non-retriable broker failures map to their dedicated gateway
/// codes so retry-aware clients can tell them apart in the record slots.
///
/// A failure outside the broker taxonomy cannot be attributed to a single
/// record of a partially written batch, so it is not given a code at all: the
/// returned `Err` carries status 500, [`DEFAULT_ERROR_CODE`], the fixed
/// [`UNEXPECTED_PRODUCER_ERROR`] diagnostic, and the original failure as
/// source, and the caller must fail the whole request with it.
pub fn produce_error_code(error: &KafkaError) -> Result<u16, RestError> {
    match error {
        KafkaError::Authentication(_) | KafkaError::Authorization(_) => Ok(403),
        KafkaError::Retriable(_) => Ok(KAFKA_RETRIABLE_ERROR_ERROR_CODE),
        KafkaError::Broker(_) => Ok(KAFKA_ERROR_ERROR_CODE),
        _ => Err(
            RestError::new(500, DEFAULT_ERROR_CODE, UNEXPECTED_PRODUCER_ERROR)
                .with_source(error.clone()),
        ),
    }
}

/// Request-level structured error for a failed produce.
///
/// The partition sniff runs before any kind dispatch; a matching message wins
/// even over authentication kinds. Rejections the surrounding request must not
/// treat as a record outcome come back on the `Err` arm, translations on `Ok`.
/// Unlike [`produce_error_code`] there is no retriable branch here: retriable
/// failures fall through to the generic broker error with the rest.
pub fn convert_produce_error(error: &KafkaError) -> Result<RestError, RestError> {
    if is_invalid_partition(error.message()) {
        return Err(partition_not_found());
    }

    match error {
        KafkaError::Authentication(message) => Ok(authentication_error(message.clone())),
        KafkaError::Authorization(message) => Ok(authorization_error(message.clone())),
        _ => Ok(kafka_error(error.clone())),
    }
}

/// Structured error for a failed consume, if the input needs translating.
///
/// Safe to call speculatively: an absent failure stays absent and an already
/// structured error passes through unchanged, so callers can feed it whatever
/// their completion handed them.
pub fn convert_consume_error(error: Option<ConsumeError>) -> Option<RestError> {
    match error? {
        ConsumeError::Rest(error) => Some(error),
        ConsumeError::Kafka(KafkaError::Authentication(message)) => {
            Some(authentication_error(message))
        }
        ConsumeError::Kafka(KafkaError::Authorization(message)) => {
            Some(authorization_error(message))
        }
        ConsumeError::Kafka(error) => Some(kafka_error(error)),
    }
}

/// Structured error for a failed administrative operation.
///
/// Auth failures are only recognized one level deep, as the cause of an
/// [`AdminError::Execution`] wrapper, and surface with the cause's own
/// message. Everything else wraps the outer failure, keeping the
/// asynchronous-call context on the error chain instead of re-deriving a
/// message from the cause.
pub fn convert_admin_error(error: AdminError) -> RestError {
    if let AdminError::Execution {
        source: Some(cause),
    } = &error
    {
        match cause {
            KafkaError::Authentication(message) => return authentication_error(message.clone()),
            KafkaError::Authorization(message) => return authorization_error(message.clone()),
            _ => {}
        }
    }

    kafka_error(error)
}

/// Case-insensitive prefix match for the producer's partition-validation
/// message. The client has no dedicated failure kind for this condition, so
/// the message text is the only signal there is.
fn is_invalid_partition(message: &str) -> bool {
    const PREFIX: &str = "Invalid partition";
    message
        .get(..PREFIX.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(PREFIX))
}
