//! # Krest Core
//!
//! Core domain layer for the Krest gateway. This crate contains the broker
//! failure taxonomy, the broker-client interface, the gateway error registry,
//! and the failure classifier that maps broker-operation failures to the
//! service's error vocabulary.

pub mod broker;
pub mod domain;
pub mod errors;

// Re-export commonly used types for convenience
pub use broker::*;
pub use domain::*;
pub use errors::*;
