//! # Payload Validation
//!
//! Minimal presence rules checked before a payload reaches the store.
//!
//! Create requires a non-empty `name` and a present `price` (zero and
//! negative prices are accepted; the contract is intentionally permissive).
//! Updates carry no required fields: an empty patch is a legal no-op merge.

use super::errors::{CatalogError, CatalogResult};
use super::product::CreateProduct;

/// Check a create payload for required fields.
///
/// Pure check; short-circuits before the store is touched.
pub fn validate_create(payload: &CreateProduct) -> CatalogResult<()> {
    let name_present = payload
        .name
        .as_deref()
        .is_some_and(|name| !name.is_empty());

    if !name_present || payload.price.is_none() {
        return Err(CatalogError::Validation);
    }

    Ok(())
}
