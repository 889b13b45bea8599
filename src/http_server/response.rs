//! # Response Formatting
//!
//! Fixed-message response bodies. The list and stats views serialize
//! directly from the catalog module.

use serde::Serialize;

/// Fixed-message acknowledgment
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Acknowledgment for a successful delete
    pub fn deleted() -> Self {
        Self {
            message: "Product deleted successfully".to_string(),
        }
    }
}
