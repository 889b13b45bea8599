//! Product HTTP Routes
//!
//! Endpoints for product CRUD, list queries, and category statistics.
//! Mutating endpoints pass through the API-key gate first; reads and stats
//! bypass it entirely.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::auth::ApiKeyGate;
use crate::catalog::{
    stats, CatalogError, CatalogStats, CreateProduct, ListQuery, ListView, Product, ProductPatch,
    ProductStore,
};
use crate::observability::Logger;

use super::errors::{ApiError, ApiResult};
use super::response::MessageResponse;

/// Header carrying the shared-secret API key
pub const API_KEY_HEADER: &str = "x-api-key";

// ==================
// Shared State
// ==================

/// Catalog state shared across handlers
pub struct CatalogState {
    pub store: ProductStore,
    pub gate: ApiKeyGate,
}

impl CatalogState {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            store: ProductStore::new(),
            gate: ApiKeyGate::new(api_key),
        }
    }
}

/// Build the product router
pub fn product_routes(state: Arc<CatalogState>) -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route("/stats/all", get(product_stats))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

/// List products with optional category filter, name search, and
/// pagination
async fn list_products(
    State(state): State<Arc<CatalogState>>,
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<ListView>> {
    let query = ListQuery::parse(&params);
    let records = state.store.list()?;
    Ok(Json(query.apply(records)))
}

/// Get a single product by id
async fn get_product(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<Product>> {
    let id = parse_id(&id)?;
    let product = state.store.get_by_id(id)?;
    Ok(Json(product))
}

/// Create a product (gated)
async fn create_product(
    State(state): State<Arc<CatalogState>>,
    headers: HeaderMap,
    Json(payload): Json<CreateProduct>,
) -> ApiResult<(StatusCode, Json<Product>)> {
    authorize(&state, &headers, "create")?;
    let product = state.store.create(payload)?;
    Ok((StatusCode::CREATED, Json(product)))
}

/// Update a product with a partial payload (gated)
async fn update_product(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(patch): Json<ProductPatch>,
) -> ApiResult<Json<Product>> {
    authorize(&state, &headers, "update")?;
    let id = parse_id(&id)?;
    let product = state.store.update(id, patch)?;
    Ok(Json(product))
}

/// Delete a product (gated)
async fn delete_product(
    State(state): State<Arc<CatalogState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> ApiResult<Json<MessageResponse>> {
    authorize(&state, &headers, "delete")?;
    let id = parse_id(&id)?;
    state.store.delete(id)?;
    Ok(Json(MessageResponse::deleted()))
}

/// Category-count statistics over the current catalog
async fn product_stats(State(state): State<Arc<CatalogState>>) -> ApiResult<Json<CatalogStats>> {
    let records = state.store.list()?;
    Ok(Json(stats::aggregate(&records)))
}

// ==================
// Helpers
// ==================

/// Run the API-key gate for a mutating operation
fn authorize(state: &CatalogState, headers: &HeaderMap, operation: &str) -> ApiResult<()> {
    let provided = headers
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok());

    state.gate.authorize(provided).map_err(|err| {
        Logger::warn("MUTATION_DENIED", &[("operation", operation)]);
        ApiError::from(err)
    })
}

/// A malformed id cannot address any record, so it reports NotFound
/// rather than a parse error
fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| CatalogError::NotFound.into())
}
