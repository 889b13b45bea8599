//! # Product Store
//!
//! Owns the authoritative in-memory product sequence behind a lock.
//! Insertion order is preserved and is the default list order. Ids are
//! pairwise distinct for the process lifetime and never reused.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use uuid::Uuid;

use super::errors::{CatalogError, CatalogResult};
use super::product::{CreateProduct, Product, ProductPatch};
use super::validate;

/// The single in-process product collection.
///
/// The raw sequence is never exposed for external mutation; readers get
/// snapshots, writers go through the explicit operations below. The write
/// lock is held for the whole read-modify-write of update/delete so a
/// concurrent mutation can never observe a partially-applied change.
pub struct ProductStore {
    records: RwLock<Vec<Product>>,
}

impl ProductStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Validate the payload, assign a fresh id, and append the record.
    pub fn create(&self, payload: CreateProduct) -> CatalogResult<Product> {
        validate::validate_create(&payload)?;

        // Validation guarantees name and price are present
        let product = Product {
            id: Uuid::new_v4(),
            name: payload.name.unwrap_or_default(),
            description: payload.description,
            price: payload.price.unwrap_or_default(),
            category: payload.category,
            in_stock: payload.in_stock,
        };

        let mut records = self.write_lock()?;
        records.push(product.clone());
        Ok(product)
    }

    /// Linear scan for the first record with a matching id.
    pub fn get_by_id(&self, id: Uuid) -> CatalogResult<Product> {
        let records = self.read_lock()?;
        records
            .iter()
            .find(|record| record.id == id)
            .cloned()
            .ok_or(CatalogError::NotFound)
    }

    /// Snapshot of the full sequence, in insertion order.
    pub fn list(&self) -> CatalogResult<Vec<Product>> {
        let records = self.read_lock()?;
        Ok(records.clone())
    }

    /// Shallow merge: fields present in the patch overwrite, all others
    /// retain prior values. The id is never altered.
    pub fn update(&self, id: Uuid, patch: ProductPatch) -> CatalogResult<Product> {
        let mut records = self.write_lock()?;
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(CatalogError::NotFound)?;

        if let Some(name) = patch.name {
            record.name = name;
        }
        if let Some(price) = patch.price {
            record.price = price;
        }
        if let Some(description) = patch.description {
            record.description = description;
        }
        if let Some(category) = patch.category {
            record.category = category;
        }
        if let Some(in_stock) = patch.in_stock {
            record.in_stock = in_stock;
        }

        Ok(record.clone())
    }

    /// Remove the record with the given id, preserving the relative order
    /// of the remaining records.
    pub fn delete(&self, id: Uuid) -> CatalogResult<()> {
        let mut records = self.write_lock()?;
        let index = records
            .iter()
            .position(|record| record.id == id)
            .ok_or(CatalogError::NotFound)?;

        records.remove(index);
        Ok(())
    }

    fn read_lock(&self) -> CatalogResult<RwLockReadGuard<'_, Vec<Product>>> {
        self.records
            .read()
            .map_err(|_| CatalogError::Internal("Lock poisoned".to_string()))
    }

    fn write_lock(&self) -> CatalogResult<RwLockWriteGuard<'_, Vec<Product>>> {
        self.records
            .write()
            .map_err(|_| CatalogError::Internal("Lock poisoned".to_string()))
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new()
    }
}
