use serde::{Deserialize, Serialize};

use krest_core::domain::FetchedRecord;

fn default_count() -> usize {
    1
}

/// Query parameters of
/// `GET /topics/{topic}/partitions/{partition}/messages`.
#[derive(Debug, Clone, Deserialize)]
pub struct ConsumeQuery {
    /// Log offset to start reading from.
    pub offset: i64,

    /// Maximum number of records to return.
    #[serde(default = "default_count")]
    pub count: usize,
}

/// One consumed record as it appears in the response array.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsumedRecord {
    pub key: Option<serde_json::Value>,
    pub value: serde_json::Value,
    pub partition: i32,
    pub offset: i64,
}

impl ConsumedRecord {
    pub fn from_fetched(partition: i32, fetched: FetchedRecord) -> Self {
        Self {
            key: fetched.record.key,
            value: fetched.record.value,
            partition,
            offset: fetched.offset,
        }
    }
}
