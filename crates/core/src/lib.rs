//! Shared primitives for the flavors service.

pub mod timestamp;
pub mod types;
