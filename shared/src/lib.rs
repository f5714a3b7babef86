//! Shared wire types for the Krest gateway
//!
//! This crate holds the types every server crate agrees on: today that is the
//! JSON error body returned for every failed request. Keeping it in its own
//! crate lets the domain layer build error bodies without depending on the
//! HTTP layer and vice versa.

pub mod errors;

// Re-export commonly used items at crate root
pub use errors::ErrorResponse;
