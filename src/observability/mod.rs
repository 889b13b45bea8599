//! # Observability
//!
//! Structured JSON logging for catalogd.

pub mod logger;

pub use logger::{Logger, Severity};
