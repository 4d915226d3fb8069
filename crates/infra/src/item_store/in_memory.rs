use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use itemstore_core::{DomainError, DomainResult, Entity, ItemId};
use itemstore_items::{Item, ItemFilter, ItemUpdate};

use super::r#trait::ItemStore;

/// In-memory item store.
///
/// Reads share the lock; every check-then-mutate sequence runs under one
/// write guard. Listing order is by id, so it is stable for a given snapshot.
#[derive(Debug, Default)]
pub struct InMemoryItemStore {
    items: RwLock<BTreeMap<ItemId, Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Mutations never panic while holding the guard, so a poisoned map is
    // still consistent.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<ItemId, Item>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<ItemId, Item>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ItemStore for InMemoryItemStore {
    fn list(&self) -> Vec<Item> {
        self.read().values().cloned().collect()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        self.read().get(&id).cloned().ok_or(DomainError::NotFound)
    }

    fn search(&self, filter: &ItemFilter) -> Vec<Item> {
        self.read()
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect()
    }

    fn create(&self, item: Item) -> DomainResult<Item> {
        let mut items = self.write();
        match items.entry(item.id()) {
            Entry::Occupied(_) => {
                tracing::debug!(item_id = %item.id, "create rejected: id already exists");
                Err(DomainError::conflict("Item with this ID already exists"))
            }
            Entry::Vacant(slot) => {
                tracing::debug!(item_id = %item.id, "item created");
                Ok(slot.insert(item).clone())
            }
        }
    }

    fn replace(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        if !item.is_keyed_by(id) {
            tracing::debug!(item_id = %id, body_id = %item.id, "replace rejected: id mismatch");
            return Err(DomainError::bad_request("Path ID does not match item ID"));
        }

        let mut items = self.write();
        let slot = items.get_mut(&id).ok_or(DomainError::NotFound)?;
        *slot = item;
        tracing::debug!(item_id = %id, "item replaced");
        Ok(slot.clone())
    }

    fn patch(&self, id: ItemId, update: ItemUpdate) -> DomainResult<Item> {
        let mut items = self.write();
        let slot = items.get_mut(&id).ok_or(DomainError::NotFound)?;
        if update.is_empty() {
            tracing::debug!(item_id = %id, "empty patch, item unchanged");
            return Ok(slot.clone());
        }
        slot.apply_update(update);
        tracing::debug!(item_id = %id, "item patched");
        Ok(slot.clone())
    }

    fn delete(&self, id: ItemId) -> DomainResult<()> {
        self.write().remove(&id).ok_or(DomainError::NotFound)?;
        tracing::debug!(item_id = %id, "item deleted");
        Ok(())
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}
