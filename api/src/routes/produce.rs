//! Produce endpoint.

use actix_web::{web, HttpResponse};

use krest_core::broker::BrokerClient;
use krest_core::errors::{convert_produce_error, produce_error_code};

use crate::dto::produce::{PartitionOffset, ProduceRequest, ProduceResponse};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for `POST /topics/{topic}/partitions/{partition}`.
///
/// The batch targets a single partition, so a request-level send failure
/// terminates the request whichever way its conversion comes back. Once the
/// batch reached dispatch the response stays 200 and each failed record
/// carries its own error code slot; the exception is a failure the code
/// lookup refuses to classify, which aborts the whole request because a
/// partially written batch cannot be attributed record by record.
pub async fn produce<C>(
    path: web::Path<(String, i32)>,
    state: web::Data<AppState<C>>,
    body: web::Json<ProduceRequest>,
) -> Result<HttpResponse, ApiError>
where
    C: BrokerClient + 'static,
{
    let (topic, partition) = path.into_inner();
    let records = body.into_inner().records;

    log::info!(
        "Producing {} records to {}-{}",
        records.len(),
        topic,
        partition
    );

    let outcomes = match state.broker.produce(&topic, partition, records).await {
        Ok(outcomes) => outcomes,
        Err(failure) => {
            let error = match convert_produce_error(&failure) {
                Ok(error) | Err(error) => error,
            };
            return Err(ApiError::from(error));
        }
    };

    let mut offsets = Vec::with_capacity(outcomes.len());
    for outcome in outcomes {
        match outcome {
            Ok(offset) => offsets.push(PartitionOffset::written(partition, offset)),
            Err(failure) => {
                let error_code = produce_error_code(&failure).map_err(ApiError::from)?;
                offsets.push(PartitionOffset::failed(error_code, failure.message()));
            }
        }
    }

    Ok(HttpResponse::Ok().json(ProduceResponse { offsets }))
}
