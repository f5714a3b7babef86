use serde::{Deserialize, Serialize};

use krest_core::domain::NewTopic;

/// Body of `POST /topics`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTopicRequest {
    pub name: String,
    pub partitions: i32,

    /// Defaults to 1; the in-process broker records it as metadata only.
    #[serde(default = "default_replication_factor")]
    pub replication_factor: i16,
}

fn default_replication_factor() -> i16 {
    1
}

impl From<CreateTopicRequest> for NewTopic {
    fn from(request: CreateTopicRequest) -> Self {
        Self {
            name: request.name,
            partitions: request.partitions,
            replication_factor: request.replication_factor,
        }
    }
}
