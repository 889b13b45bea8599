//! # Product Catalog Core
//!
//! The in-memory product store with its query/filter/pagination engine,
//! category statistics, and payload validation.

pub mod errors;
pub mod product;
pub mod query;
pub mod stats;
pub mod store;
pub mod validate;

pub use errors::{CatalogError, CatalogResult};
pub use product::{CreateProduct, Product, ProductPatch};
pub use query::{ListQuery, ListView};
pub use stats::CatalogStats;
pub use store::ProductStore;
