//! # Infrastructure Layer
//!
//! Broker-client implementations for the Krest gateway. This crate owns
//! everything behind the [`krest_core::broker::BrokerClient`] seam; today that
//! is the in-process broker the binary and the integration tests run against.
//! A networked client for a real cluster plugs in here without the core or
//! API layers changing.

/// Broker module - client implementations
pub mod broker;

pub use broker::MemoryBroker;
