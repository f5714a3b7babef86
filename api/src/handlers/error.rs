use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use krest_core::errors::RestError;
use krest_shared::errors::ErrorResponse;

use crate::dto::error::ErrorResponseExt;

/// Carrier that moves a [`RestError`] across actix's error boundary.
///
/// Handlers return `Result<HttpResponse, ApiError>`; actix calls back into
/// [`ResponseError`] to render the failure, which is the one place a failed
/// request is logged.
#[derive(Debug)]
pub struct ApiError(pub RestError);

impl From<RestError> for ApiError {
    fn from(error: RestError) -> Self {
        Self(error)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.0.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn error_response(&self) -> HttpResponse {
        // {:?} walks the retained source chain, so the original broker
        // failure lands in the log even though the body only carries the
        // translated code and message.
        log::error!("Request failed with error code {}: {:?}", self.0.code, self.0);

        ErrorResponse::from(&self.0).to_response(self.status_code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use krest_core::broker::KafkaError;
    use krest_core::errors::kafka_error;

    #[test]
    fn test_status_line_comes_from_the_rest_error() {
        let error = ApiError::from(RestError::new(404, 40402, "Partition not found."));
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_out_of_range_status_falls_back_to_500() {
        let error = ApiError::from(RestError::new(42, 42, "bogus status"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[actix_web::test]
    async fn test_response_body_is_the_shared_error_shape() {
        let error = ApiError::from(kafka_error(KafkaError::Broker(
            "Record batch too large".to_string(),
        )));

        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error_code"], 50002);
        assert_eq!(body["message"], "Kafka error: Record batch too large");
    }
}
