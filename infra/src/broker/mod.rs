//! Broker client implementations.
//!
//! Everything here implements [`krest_core::broker::BrokerClient`] and
//! collapses its own failure surface into the core taxonomy before a failure
//! crosses into the service.

pub mod memory;

#[cfg(test)]
mod tests;

pub use memory::MemoryBroker;
