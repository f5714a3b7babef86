//! Simple-consume endpoint.

use actix_web::{web, HttpResponse};

use krest_core::broker::BrokerClient;
use krest_core::domain::FetchedRecord;
use krest_core::errors::{convert_consume_error, partition_not_found, ConsumeError};

use crate::dto::consume::{ConsumeQuery, ConsumedRecord};
use crate::handlers::ApiError;
use crate::routes::AppState;

/// Handler for `GET /topics/{topic}/partitions/{partition}/messages`.
///
/// The read completes with records and an optional failure slot, which may
/// hold a raw client failure or the pre-check's already-structured error.
/// Both shapes go through the same speculative conversion; on success the
/// slot is empty and the conversion returns nothing.
pub async fn consume<C>(
    path: web::Path<(String, i32)>,
    query: web::Query<ConsumeQuery>,
    state: web::Data<AppState<C>>,
) -> Result<HttpResponse, ApiError>
where
    C: BrokerClient + 'static,
{
    let (topic, partition) = path.into_inner();
    log::debug!(
        "Consuming up to {} records from {}-{} at offset {}",
        query.count,
        topic,
        partition,
        query.offset
    );

    let (records, failure) = read(state.broker.as_ref(), &topic, partition, &query).await;

    if let Some(error) = convert_consume_error(failure) {
        return Err(ApiError::from(error));
    }

    let body: Vec<ConsumedRecord> = records
        .into_iter()
        .map(|fetched| ConsumedRecord::from_fetched(partition, fetched))
        .collect();
    Ok(HttpResponse::Ok().json(body))
}

/// Runs the partition pre-check and the fetch, collapsing either failure
/// into the slot the conversion above inspects.
async fn read<C: BrokerClient>(
    broker: &C,
    topic: &str,
    partition: i32,
    query: &ConsumeQuery,
) -> (Vec<FetchedRecord>, Option<ConsumeError>) {
    match broker.partition_exists(topic, partition).await {
        Ok(true) => {}
        Ok(false) => return (Vec::new(), Some(partition_not_found().into())),
        Err(failure) => return (Vec::new(), Some(failure.into())),
    }

    match broker.fetch(topic, partition, query.offset, query.count).await {
        Ok(records) => (records, None),
        Err(failure) => (Vec::new(), Some(failure.into())),
    }
}
