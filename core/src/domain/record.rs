//! Record values exchanged with the broker.

use serde::{Deserialize, Serialize};

/// A single record handed to the broker on produce, or back from it on fetch.
///
/// Payloads are embedded JSON; the gateway does not interpret them beyond
/// carrying them between the wire and the broker client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Optional record key, used by the broker for partition affinity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<serde_json::Value>,

    /// Record value
    pub value: serde_json::Value,
}

impl Record {
    /// Creates a record with no key
    pub fn new(value: serde_json::Value) -> Self {
        Self { key: None, value }
    }

    /// Creates a keyed record
    pub fn with_key(key: serde_json::Value, value: serde_json::Value) -> Self {
        Self {
            key: Some(key),
            value,
        }
    }
}

/// A record read back from a partition together with its log offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchedRecord {
    /// Offset of the record within its partition
    pub offset: i64,

    /// The record itself
    pub record: Record,
}

impl FetchedRecord {
    pub fn new(offset: i64, record: Record) -> Self {
        Self { offset, record }
    }
}
