//! Tests for broker client implementations.
