//! In-process broker backed by an in-memory topic table.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use krest_core::broker::{AdminError, BrokerClient, KafkaError};
use krest_core::domain::{FetchedRecord, NewTopic, Record};

/// Metadata wait a networked producer would spend before giving up on an
/// unknown topic. Quoted in the failure message only; nothing here waits.
const METADATA_MAX_AGE_MS: u64 = 60_000;

/// Broker stand-in for local runs and integration tests.
///
/// Failure behavior mirrors what the REST layer depends on from a real
/// client: producing to a partition outside the topic's range fails with the
/// "Invalid partition given with record" message, producing to an unknown
/// topic fails retriably (metadata never becomes available), and admin
/// failures arrive wrapped in [`AdminError::Execution`]. Once a batch reaches
/// dispatch every record is appended, so per-record failures never occur
/// in-process.
pub struct MemoryBroker {
    /// Topic name to per-partition logs.
    topics: RwLock<HashMap<String, Vec<Vec<Record>>>>,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self {
            topics: RwLock::new(HashMap::new()),
        }
    }

    /// Broker pre-seeded with one topic, as test and demo setup.
    pub async fn with_topic(name: &str, partitions: i32) -> Self {
        let broker = Self::new();
        broker
            .create_topic(NewTopic::new(name, partitions))
            .await
            .expect("seed topic is valid and unique");
        broker
    }
}

impl Default for MemoryBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BrokerClient for MemoryBroker {
    async fn produce(
        &self,
        topic: &str,
        partition: i32,
        records: Vec<Record>,
    ) -> Result<Vec<Result<i64, KafkaError>>, KafkaError> {
        let mut topics = self.topics.write().await;
        let partitions = topics.get_mut(topic).ok_or_else(|| {
            warn!("Produce to unknown topic '{}'", topic);
            KafkaError::Retriable(format!(
                "Topic {topic} not present in metadata after {METADATA_MAX_AGE_MS} ms."
            ))
        })?;

        let partition_count = partitions.len();
        let log = usize::try_from(partition)
            .ok()
            .and_then(|index| partitions.get_mut(index))
            .ok_or_else(|| {
                KafkaError::Broker(format!(
                    "Invalid partition given with record: {partition} is not in the \
                     range [0...{partition_count})."
                ))
            })?;

        let base_offset = log.len() as i64;
        let count = records.len();
        let outcomes = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| {
                log.push(record);
                Ok(base_offset + index as i64)
            })
            .collect();
        debug!(
            "Appended {} records to {}-{} starting at offset {}",
            count, topic, partition, base_offset
        );
        Ok(outcomes)
    }

    async fn fetch(
        &self,
        topic: &str,
        partition: i32,
        offset: i64,
        max_records: usize,
    ) -> Result<Vec<FetchedRecord>, KafkaError> {
        let topics = self.topics.read().await;
        let log = topics
            .get(topic)
            .and_then(|partitions| {
                usize::try_from(partition)
                    .ok()
                    .and_then(|index| partitions.get(index))
            })
            .ok_or_else(|| {
                KafkaError::Retriable("This server does not host this topic-partition.".to_string())
            })?;

        let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
        let start = start.min(log.len());
        Ok(log[start..]
            .iter()
            .take(max_records)
            .enumerate()
            .map(|(index, record)| FetchedRecord::new((start + index) as i64, record.clone()))
            .collect())
    }

    async fn partition_exists(&self, topic: &str, partition: i32) -> Result<bool, KafkaError> {
        let topics = self.topics.read().await;
        Ok(topics.get(topic).is_some_and(|partitions| {
            usize::try_from(partition).is_ok_and(|index| index < partitions.len())
        }))
    }

    async fn create_topic(&self, spec: NewTopic) -> Result<(), AdminError> {
        if spec.partitions < 1 {
            return Err(AdminError::execution(KafkaError::Broker(
                "Number of partitions must be larger than 0.".to_string(),
            )));
        }

        let mut topics = self.topics.write().await;
        if topics.contains_key(&spec.name) {
            warn!("Rejected create for existing topic '{}'", spec.name);
            return Err(AdminError::execution(KafkaError::Broker(format!(
                "Topic '{}' already exists.",
                spec.name
            ))));
        }

        info!(
            "Creating topic '{}' with {} partitions (replication factor {})",
            spec.name, spec.partitions, spec.replication_factor
        );
        topics.insert(spec.name, vec![Vec::new(); spec.partitions as usize]);
        Ok(())
    }

    async fn delete_topic(&self, name: &str) -> Result<(), AdminError> {
        let mut topics = self.topics.write().await;
        if topics.remove(name).is_none() {
            return Err(AdminError::execution(KafkaError::Broker(
                "This server does not host this topic-partition.".to_string(),
            )));
        }
        info!("Deleted topic '{}'", name);
        Ok(())
    }
}
