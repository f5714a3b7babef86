//! Broker-client boundary: the failure vocabulary raised by broker operations
//! and the client interface the gateway's routes are written against.

pub mod client;
pub mod error;

// Re-export commonly used types
pub use client::BrokerClient;
pub use error::{AdminError, KafkaError};
