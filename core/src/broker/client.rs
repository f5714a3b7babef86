//! Broker client trait defining the interface the gateway's routes use.
//!
//! Implementations own connection lifecycles, batching, and timeouts; the
//! gateway only sees the operations below and the failure taxonomy in
//! [`crate::broker::error`]. The in-process implementation lives in the
//! infrastructure crate, and tests substitute scripted stand-ins.

use async_trait::async_trait;

use crate::broker::error::{AdminError, KafkaError};
use crate::domain::record::{FetchedRecord, Record};
use crate::domain::topic::NewTopic;

/// Client interface for produce, fetch, and administrative operations
/// against a Kafka-compatible broker.
#[async_trait]
pub trait BrokerClient: Send + Sync {
    /// Append a batch of records to one partition of a topic.
    ///
    /// A request-level failure (the batch never reached dispatch, for example
    /// unavailable metadata or an out-of-range partition) is the outer error.
    /// Once dispatch happens, each record succeeds or fails on its own and the
    /// outcomes come back in input order as the inner results.
    async fn produce(
        &self,
        topic: &str,
        partition: i32,
        records: Vec<Record>,
    ) -> Result<Vec<Result<i64, KafkaError>>, KafkaError>;

    /// Read up to `max_records` records from a partition starting at `offset`.
    async fn fetch(
        &self,
        topic: &str,
        partition: i32,
        offset: i64,
        max_records: usize,
    ) -> Result<Vec<FetchedRecord>, KafkaError>;

    /// Whether the partition currently exists in the cluster metadata.
    async fn partition_exists(&self, topic: &str, partition: i32) -> Result<bool, KafkaError>;

    /// Create a topic.
    async fn create_topic(&self, spec: NewTopic) -> Result<(), AdminError>;

    /// Delete a topic.
    async fn delete_topic(&self, name: &str) -> Result<(), AdminError>;
}
