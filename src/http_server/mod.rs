//! # HTTP Server
//!
//! Axum-based HTTP surface for the product catalog.

pub mod config;
pub mod errors;
pub mod product_routes;
pub mod response;
pub mod server;

pub use config::ServerConfig;
pub use errors::{ApiError, ApiResult};
pub use product_routes::{product_routes, CatalogState, API_KEY_HEADER};
pub use server::HttpServer;
