//! Tests for broker-failure classification.
