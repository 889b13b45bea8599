//! # API Key Authentication
//!
//! The gate protecting mutating operations behind a single shared static
//! credential.

pub mod errors;
pub mod gate;

pub use errors::{AuthError, AuthResult};
pub use gate::ApiKeyGate;
