//! Route handlers for the gateway's REST surface.
//!
//! Each module maps one endpoint family onto the broker client and runs every
//! failure through the classifier before it reaches the response builder:
//! produce uses the per-record code lookup plus the request-level conversion,
//! consume the speculative conversion, and topic administration the
//! wrapper-aware admin conversion.

pub mod consume;
pub mod health;
pub mod produce;
pub mod topics;

use std::sync::Arc;

use krest_core::broker::BrokerClient;

/// Application state shared by every route: the broker client behind its
/// trait, so the binary and the tests wire different implementations through
/// the same handlers.
pub struct AppState<C: BrokerClient> {
    pub broker: Arc<C>,
}

impl<C: BrokerClient> AppState<C> {
    pub fn new(broker: C) -> Self {
        Self {
            broker: Arc::new(broker),
        }
    }
}
