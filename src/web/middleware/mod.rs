//! Web middleware.

pub mod tracing;
