//! # API Key Gate
//!
//! Validates the caller-supplied credential before a mutation is allowed.
//! The check is pure and stateless beyond reading the configured secret.
//!
//! ## Invariants
//! - Constant-time comparison for the secret
//! - Missing and wrong credentials fail identically

use subtle::ConstantTimeEq;

use super::errors::{AuthError, AuthResult};

/// Gate comparing a caller-supplied key against the process-wide secret.
#[derive(Debug, Clone)]
pub struct ApiKeyGate {
    key: String,
}

impl ApiKeyGate {
    /// Create a gate with the expected secret, fixed for the process
    /// lifetime.
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Authorize a mutation given the credential extracted from the
    /// request, if any.
    pub fn authorize(&self, provided: Option<&str>) -> AuthResult<()> {
        let provided = provided.ok_or(AuthError::InvalidApiKey)?;
        if constant_time_str_eq(provided, &self.key) {
            Ok(())
        } else {
            Err(AuthError::InvalidApiKey)
        }
    }
}

/// Constant-time comparison of two strings
fn constant_time_str_eq(a: &str, b: &str) -> bool {
    a.as_bytes().ct_eq(b.as_bytes()).into()
}
