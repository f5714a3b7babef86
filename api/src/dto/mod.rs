//! Request and response bodies of the REST surface.

pub mod consume;
pub mod error;
pub mod produce;
pub mod topic;
