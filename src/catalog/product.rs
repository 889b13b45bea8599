//! # Product Records
//!
//! The catalog's sole entity plus the payload shapes accepted at the
//! boundary (create and partial update).

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One product record stored by the catalog.
///
/// The id is assigned by the store at creation time and is immutable for
/// the lifetime of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "inStock", skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

/// Raw create payload, before validation.
///
/// Every field is optional so that a missing `name` or `price` surfaces as
/// a domain validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    #[serde(rename = "inStock")]
    pub in_stock: Option<bool>,
}

/// Partial update applied as a shallow merge.
///
/// Absent fields retain their prior values. For the optional record fields
/// an explicit `null` clears the value, which is why those are doubly
/// optional. The record id is deliberately not patchable: the type has no
/// id field, and unknown keys in the payload are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "nullable_field")]
    pub description: Option<Option<String>>,
    pub price: Option<f64>,
    #[serde(default, deserialize_with = "nullable_field")]
    pub category: Option<Option<String>>,
    #[serde(rename = "inStock", default, deserialize_with = "nullable_field")]
    pub in_stock: Option<Option<bool>>,
}

/// Distinguishes an explicit `null` (Some(None)) from an absent field
/// (None, via the serde default).
fn nullable_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
