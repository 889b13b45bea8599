//! # Catalog Errors
//!
//! Error types for the catalog module.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog domain errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Id does not resolve to a record
    #[error("Product not found")]
    NotFound,

    /// Create payload failed presence checks
    #[error("Validation Error: name and price are required")]
    Validation,

    /// Unexpected internal fault (e.g. poisoned lock)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CatalogError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::NotFound => 404,
            CatalogError::Validation => 400,
            CatalogError::Internal(_) => 500,
        }
    }

    /// Returns whether this error should be logged at warn level
    pub fn is_client_error(&self) -> bool {
        self.status_code() < 500
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(CatalogError::NotFound.status_code(), 404);
        assert_eq!(CatalogError::Validation.status_code(), 400);
        assert_eq!(CatalogError::Internal("x".to_string()).status_code(), 500);
    }

    #[test]
    fn test_error_messages_are_fixed() {
        assert_eq!(CatalogError::NotFound.to_string(), "Product not found");
        assert_eq!(
            CatalogError::Validation.to_string(),
            "Validation Error: name and price are required"
        );
    }
}
