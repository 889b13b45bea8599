//! # Category Statistics
//!
//! Aggregate category-count summary over the current catalog contents.

use std::collections::BTreeMap;

use serde::Serialize;

use super::product::Product;

/// Category-count summary.
///
/// A BTreeMap keeps serialization deterministic for the same input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total: usize,
    #[serde(rename = "byCategory")]
    pub by_category: BTreeMap<String, usize>,
}

/// Count records per category.
///
/// Records without a category are counted under the empty-string bucket;
/// there is no special "uncategorized" label.
pub fn aggregate(records: &[Product]) -> CatalogStats {
    let mut by_category: BTreeMap<String, usize> = BTreeMap::new();
    for record in records {
        let key = record.category.clone().unwrap_or_default();
        *by_category.entry(key).or_insert(0) += 1;
    }

    CatalogStats {
        total: records.len(),
        by_category,
    }
}
