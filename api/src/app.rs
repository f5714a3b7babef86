//! Application wiring
//!
//! The route table and the JSON body guard are assembled here, generically
//! over the broker client, so the binary and the integration tests configure
//! the identical application.

use actix_web::http::StatusCode;
use actix_web::{error::InternalError, web, HttpResponse};

use krest_core::broker::BrokerClient;
use krest_shared::errors::ErrorResponse;

use crate::dto::error::ErrorResponseExt;
use crate::routes::{consume, health, produce, topics};

/// Register every route on `cfg`.
///
/// Callers add their [`crate::routes::AppState`] separately, which is what
/// lets the tests substitute scripted broker clients for the real one.
pub fn configure<C>(cfg: &mut web::ServiceConfig)
where
    C: BrokerClient + 'static,
{
    cfg.app_data(json_config())
        // Health check endpoint
        .route("/health", web::get().to(health::health_check))
        // Produce, consume, and topic administration
        .service(
            web::scope("/topics")
                .route("", web::post().to(topics::create_topic::<C>))
                .route("/{topic}", web::delete().to(topics::delete_topic::<C>))
                .route(
                    "/{topic}/partitions/{partition}",
                    web::post().to(produce::produce::<C>),
                )
                .route(
                    "/{topic}/partitions/{partition}/messages",
                    web::get().to(consume::consume::<C>),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found));
}

/// Malformed request bodies surface as a 422 with the shared error body,
/// status-as-code like the other unclassified failures.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|error, _req| {
        let body = ErrorResponse::new(
            StatusCode::UNPROCESSABLE_ENTITY.as_u16(),
            error.to_string(),
        );
        InternalError::from_response(error, body.to_response(StatusCode::UNPROCESSABLE_ENTITY))
            .into()
    })
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    ErrorResponse::new(
        StatusCode::NOT_FOUND.as_u16(),
        "The requested resource was not found",
    )
    .to_response(StatusCode::NOT_FOUND)
}
