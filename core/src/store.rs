//! In-memory resource store.
//!
//! # Design
//! The item map and the id counter live in one struct behind one `RwLock`.
//! `create` and `delete` hold the write guard for their whole body, so the
//! counter advance and the insert are seen together or not at all. `list` and
//! `get` share the read guard. Nothing inside the lock blocks or awaits.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;

use crate::error::StoreError;
use crate::types::{Item, ItemId};
use crate::validate::ValidatedItem;

#[derive(Debug, Default)]
struct Inner {
    items: HashMap<ItemId, Item>,
    last_id: ItemId,
}

/// Thread-safe owner of every stored item.
#[derive(Debug, Default)]
pub struct ItemStore {
    inner: RwLock<Inner>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // No operation can panic halfway through a mutation, so a poisoned lock
    // still guards consistent state.
    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all items, ordered by id.
    pub fn list(&self) -> Vec<Item> {
        let mut items: Vec<Item> = self.read().items.values().cloned().collect();
        items.sort_by_key(|item| item.id);
        items
    }

    pub fn get(&self, id: ItemId) -> Result<Item, StoreError> {
        self.read()
            .items
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Allocate the next id, stamp the creation time and insert.
    pub fn create(&self, input: ValidatedItem) -> Item {
        let (name, is_active) = input.into_parts();
        let mut inner = self.write();
        inner.last_id += 1;
        let item = Item {
            id: inner.last_id,
            name,
            created_at: Utc::now(),
            is_active,
        };
        inner.items.insert(item.id, item.clone());
        item
    }

    /// Remove and return the item. Absent ids keep returning `NotFound`.
    pub fn delete(&self, id: ItemId) -> Result<Item, StoreError> {
        self.write()
            .items
            .remove(&id)
            .ok_or(StoreError::NotFound(id))
    }

    pub fn len(&self) -> usize {
        self.read().items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
