//! Topic specification for administrative operations.

use serde::{Deserialize, Serialize};

/// Specification for a topic to be created on the broker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTopic {
    /// Topic name
    pub name: String,

    /// Number of partitions
    pub partitions: i32,

    /// Replication factor; the in-process broker treats this as metadata only
    pub replication_factor: i16,
}

impl NewTopic {
    /// Creates a topic spec with the given partition count and a replication
    /// factor of one.
    pub fn new(name: impl Into<String>, partitions: i32) -> Self {
        Self {
            name: name.into(),
            partitions,
            replication_factor: 1,
        }
    }
}
