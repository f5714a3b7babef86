use serde::{Deserialize, Serialize};

use krest_core::domain::Record;

/// Body of `POST /topics/{topic}/partitions/{partition}`.
///
/// Records are already wire-shaped in the core crate, so the batch embeds
/// them directly instead of mapping through a second record type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduceRequest {
    pub records: Vec<Record>,
}

/// Produce response: one offset slot per record, in request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduceResponse {
    pub offsets: Vec<PartitionOffset>,
}

/// Outcome slot for one record of a produce batch.
///
/// A written record carries its partition and assigned offset; a failed one
/// carries the gateway error code and the client's message instead. The
/// unused pair stays `null` on the wire so slot positions line up with the
/// request regardless of outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartitionOffset {
    pub partition: Option<i32>,
    pub offset: Option<i64>,
    pub error_code: Option<u16>,
    pub error: Option<String>,
}

impl PartitionOffset {
    /// Slot for a record the broker accepted.
    pub fn written(partition: i32, offset: i64) -> Self {
        Self {
            partition: Some(partition),
            offset: Some(offset),
            error_code: None,
            error: None,
        }
    }

    /// Slot for a record whose failure classified to `error_code`.
    pub fn failed(error_code: u16, error: impl Into<String>) -> Self {
        Self {
            partition: None,
            offset: None,
            error_code: Some(error_code),
            error: Some(error.into()),
        }
    }
}
