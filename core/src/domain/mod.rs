//! Domain layer containing the record and topic values exchanged with the broker.

pub mod record;
pub mod topic;

// Re-export commonly used domain types
pub use record::{FetchedRecord, Record};
pub use topic::NewTopic;
