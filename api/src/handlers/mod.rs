//! The boundary where structured errors become HTTP responses.

pub mod error;

pub use error::ApiError;
