//! Topic administration endpoints.

use actix_web::{web, HttpResponse};

use krest_core::broker::BrokerClient;
use krest_core::domain::NewTopic;
use krest_core::errors::convert_admin_error;

use crate::dto::topic::CreateTopicRequest;
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for `POST /topics`.
pub async fn create_topic<C>(
    state: web::Data<AppState<C>>,
    body: web::Json<CreateTopicRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: BrokerClient + 'static,
{
    let spec = NewTopic::from(body.into_inner());
    log::info!(
        "Creating topic '{}' with {} partitions",
        spec.name,
        spec.partitions
    );

    match state.broker.create_topic(spec.clone()).await {
        Ok(()) => Ok(HttpResponse::Created().json(spec)),
        Err(failure) => Err(ApiError::from(convert_admin_error(failure))),
    }
}

/// Handler for `DELETE /topics/{topic}`.
pub async fn delete_topic<C>(
    state: web::Data<AppState<C>>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError>
where
    C: BrokerClient + 'static,
{
    let name = path.into_inner();
    log::info!("Deleting topic '{}'", name);

    match state.broker.delete_topic(&name).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(failure) => Err(ApiError::from(convert_admin_error(failure))),
    }
}
