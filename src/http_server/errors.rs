//! # API Errors
//!
//! Boundary error type mapping every domain failure to a structured JSON
//! response with a fixed message. Internal faults surface a generic 500
//! without leaking detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::auth::AuthError;
use crate::catalog::CatalogError;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API boundary errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Rejected credential on a mutating call
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Catalog domain error (not found, validation, internal)
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        let code = match self {
            ApiError::Auth(err) => err.status_code(),
            ApiError::Catalog(err) => err.status_code(),
        };
        StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = if status.is_server_error() {
            "Internal Server Error".to_string()
        } else {
            self.to_string()
        };
        (status, Json(ErrorBody { message })).into_response()
    }
}
