//! Catalog invariant tests
//!
//! Exercises the store, query engine, validator, and stats aggregator
//! together, covering the observable properties of the catalog core.

use std::collections::HashSet;

use catalogd::catalog::{
    stats, CatalogError, CreateProduct, ListQuery, ProductPatch, ProductStore,
};
use uuid::Uuid;

fn payload(name: &str, price: f64, category: Option<&str>) -> CreateProduct {
    CreateProduct {
        name: Some(name.to_string()),
        price: Some(price),
        category: category.map(str::to_string),
        ..Default::default()
    }
}

#[test]
fn created_ids_are_pairwise_distinct() {
    let store = ProductStore::new();
    let mut ids = HashSet::new();
    for i in 0..100 {
        let product = store.create(payload(&format!("p{}", i), 1.0, None)).unwrap();
        assert!(ids.insert(product.id));
    }
}

#[test]
fn invalid_create_never_appends() {
    let store = ProductStore::new();

    let missing_name = CreateProduct {
        price: Some(1.0),
        ..Default::default()
    };
    assert!(matches!(
        store.create(missing_name),
        Err(CatalogError::Validation)
    ));

    let missing_price = CreateProduct {
        name: Some("Pen".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        store.create(missing_price),
        Err(CatalogError::Validation)
    ));

    assert!(store.list().unwrap().is_empty());
}

#[test]
fn update_on_missing_id_reports_not_found_without_mutating() {
    let store = ProductStore::new();
    store.create(payload("Pen", 1.0, None)).unwrap();
    let before = store.list().unwrap();

    let patch = ProductPatch {
        name: Some("Changed".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        store.update(Uuid::new_v4(), patch),
        Err(CatalogError::NotFound)
    ));
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn partial_patch_changes_only_the_supplied_field() {
    let store = ProductStore::new();
    let created = store.create(payload("Pen", 1.0, Some("Office"))).unwrap();

    let patch = ProductPatch {
        price: Some(9.0),
        ..Default::default()
    };
    let updated = store.update(created.id, patch).unwrap();

    assert_eq!(updated.price, 9.0);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.category, created.category);
    assert_eq!(updated.in_stock, created.in_stock);
    assert_eq!(updated.id, created.id);
}

#[test]
fn delete_is_idempotent_failing() {
    let store = ProductStore::new();
    let created = store.create(payload("Pen", 1.0, None)).unwrap();

    assert!(store.delete(created.id).is_ok());
    assert!(matches!(
        store.delete(created.id),
        Err(CatalogError::NotFound)
    ));
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn unfiltered_list_returns_every_record_once_in_order() {
    let store = ProductStore::new();
    for i in 0..5 {
        store.create(payload(&format!("p{}", i), 1.0, None)).unwrap();
    }

    let view = ListQuery::default().apply(store.list().unwrap());
    assert_eq!(view.total, 5);
    let names: Vec<&str> = view.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["p0", "p1", "p2", "p3", "p4"]);
}

#[test]
fn category_filter_matches_case_insensitively() {
    let store = ProductStore::new();
    store.create(payload("a", 1.0, Some("Books"))).unwrap();
    store.create(payload("b", 1.0, Some("books"))).unwrap();
    store.create(payload("c", 1.0, Some("Toys"))).unwrap();
    store.create(payload("d", 1.0, None)).unwrap();

    let query = ListQuery {
        category: Some("BOOKS".to_string()),
        ..Default::default()
    };
    let view = query.apply(store.list().unwrap());

    assert_eq!(view.total, 2);
    assert!(view
        .data
        .iter()
        .all(|p| p.category.as_deref().unwrap().eq_ignore_ascii_case("Books")));
}

#[test]
fn pagination_over_ten_records() {
    let store = ProductStore::new();
    for i in 0..10 {
        store.create(payload(&format!("p{}", i), 1.0, None)).unwrap();
    }

    let query = ListQuery {
        page: Some(2),
        limit: Some(3),
        ..Default::default()
    };
    let view = query.apply(store.list().unwrap());

    assert_eq!(view.total, 10);
    let names: Vec<&str> = view.data.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["p3", "p4", "p5"]);
}

#[test]
fn stats_counts_by_category() {
    let store = ProductStore::new();
    store.create(payload("x", 1.0, Some("A"))).unwrap();
    store.create(payload("y", 1.0, Some("A"))).unwrap();
    store.create(payload("z", 1.0, Some("B"))).unwrap();

    let summary = stats::aggregate(&store.list().unwrap());
    assert_eq!(summary.total, 3);
    assert_eq!(summary.by_category.get("A"), Some(&2));
    assert_eq!(summary.by_category.get("B"), Some(&1));
}

#[test]
fn stats_reflect_deletions() {
    let store = ProductStore::new();
    let kept = store.create(payload("x", 1.0, Some("A"))).unwrap();
    let dropped = store.create(payload("y", 1.0, Some("A"))).unwrap();

    store.delete(dropped.id).unwrap();

    let summary = stats::aggregate(&store.list().unwrap());
    assert_eq!(summary.total, 1);
    assert_eq!(summary.by_category.get("A"), Some(&1));
    assert_eq!(store.list().unwrap()[0].id, kept.id);
}

#[test]
fn query_view_never_mutates_the_store() {
    let store = ProductStore::new();
    for i in 0..4 {
        store
            .create(payload(&format!("p{}", i), 1.0, Some("A")))
            .unwrap();
    }
    let before = store.list().unwrap();

    let query = ListQuery {
        category: Some("A".to_string()),
        search: Some("p1".to_string()),
        page: Some(1),
        limit: Some(2),
    };
    let _ = query.apply(store.list().unwrap());

    assert_eq!(store.list().unwrap(), before);
}
