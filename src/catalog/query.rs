//! # Query Engine
//!
//! Derives a filtered, searched, paginated view from a snapshot of the
//! store's contents. Purely a read-time derivation; never mutates the
//! underlying sequence.

use std::collections::HashMap;

use serde::Serialize;

use super::product::Product;

/// Parsed list-query parameters.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// Case-insensitive substring match on the product name
    pub search: Option<String>,
    /// 1-based page number; defaults to 1
    pub page: Option<usize>,
    /// Page size; defaults to the filtered result size (no limit)
    pub limit: Option<usize>,
}

impl ListQuery {
    /// Parse raw query parameters.
    ///
    /// `page` and `limit` must be positive integers; anything else
    /// (absent, non-numeric, zero, negative) falls back to the documented
    /// default. Unknown parameters are ignored.
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            category: params.get("category").cloned(),
            search: params.get("search").cloned(),
            page: params.get("page").and_then(|v| parse_positive(v)),
            limit: params.get("limit").and_then(|v| parse_positive(v)),
        }
    }

    /// Derive the view for this query.
    ///
    /// Filters compose conjunctively and are applied in sequence, category
    /// first, then search. Pagination slices the filtered sequence to
    /// `[(page-1)*limit, (page-1)*limit + limit)` clamped to valid bounds,
    /// so out-of-range pages yield an empty slice, never an error.
    pub fn apply(&self, records: Vec<Product>) -> ListView {
        let filtered: Vec<Product> = records
            .into_iter()
            .filter(|record| matches_category(record, self.category.as_deref()))
            .filter(|record| matches_search(record, self.search.as_deref()))
            .collect();

        let total = filtered.len();
        let page = self.page.unwrap_or(1);
        let limit = self.limit.unwrap_or(total);

        let start = page.saturating_sub(1).saturating_mul(limit).min(total);
        let end = start.saturating_add(limit).min(total);
        let data = filtered[start..end].to_vec();

        ListView {
            total,
            page,
            limit,
            data,
        }
    }
}

/// A filtered, paginated view over the product sequence.
///
/// `total` is the match count before pagination; `page` and `limit` echo
/// the values actually used.
#[derive(Debug, Clone, Serialize)]
pub struct ListView {
    pub total: usize,
    pub page: usize,
    pub limit: usize,
    pub data: Vec<Product>,
}

fn parse_positive(value: &str) -> Option<usize> {
    value.parse::<usize>().ok().filter(|n| *n > 0)
}

fn matches_category(record: &Product, category: Option<&str>) -> bool {
    match category {
        None => true,
        // Records without a category never match a category filter
        Some(wanted) => record
            .category
            .as_deref()
            .is_some_and(|held| held.to_lowercase() == wanted.to_lowercase()),
    }
}

fn matches_search(record: &Product, term: Option<&str>) -> bool {
    match term {
        None => true,
        Some(term) => record.name.to_lowercase().contains(&term.to_lowercase()),
    }
}
