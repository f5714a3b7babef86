//! Shared test support: a broker client answering with pre-scripted outcomes.

use async_trait::async_trait;

use krest_core::broker::{AdminError, BrokerClient, KafkaError};
use krest_core::domain::{FetchedRecord, NewTopic, Record};

/// Broker client that ignores its arguments and answers every operation with
/// a clone of the scripted outcome. Build with `Default` (everything
/// succeeds, nothing is returned) and override the operations under test.
pub struct ScriptedBroker {
    pub produce_outcome: Result<Vec<Result<i64, KafkaError>>, KafkaError>,
    pub fetch_outcome: Result<Vec<FetchedRecord>, KafkaError>,
    pub partition_check: Result<bool, KafkaError>,
    pub admin_outcome: Result<(), AdminError>,
}

impl Default for ScriptedBroker {
    fn default() -> Self {
        Self {
            produce_outcome: Ok(Vec::new()),
            fetch_outcome: Ok(Vec::new()),
            partition_check: Ok(true),
            admin_outcome: Ok(()),
        }
    }
}

#[async_trait]
impl BrokerClient for ScriptedBroker {
    async fn produce(
        &self,
        _topic: &str,
        _partition: i32,
        _records: Vec<Record>,
    ) -> Result<Vec<Result<i64, KafkaError>>, KafkaError> {
        self.produce_outcome.clone()
    }

    async fn fetch(
        &self,
        _topic: &str,
        _partition: i32,
        _offset: i64,
        _max_records: usize,
    ) -> Result<Vec<FetchedRecord>, KafkaError> {
        self.fetch_outcome.clone()
    }

    async fn partition_exists(&self, _topic: &str, _partition: i32) -> Result<bool, KafkaError> {
        self.partition_check.clone()
    }

    async fn create_topic(&self, _spec: NewTopic) -> Result<(), AdminError> {
        self.admin_outcome.clone()
    }

    async fn delete_topic(&self, _name: &str) -> Result<(), AdminError> {
        self.admin_outcome.clone()
    }
}
