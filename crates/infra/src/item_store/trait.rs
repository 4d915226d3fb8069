use std::sync::Arc;

use itemstore_core::{DomainResult, ItemId};
use itemstore_items::{Item, ItemFilter, ItemUpdate};

/// Item store abstraction.
pub trait ItemStore: Send + Sync {
    /// All stored items, ordered by id.
    fn list(&self) -> Vec<Item>;

    /// Fetch a single item. `NotFound` if absent.
    fn get(&self, id: ItemId) -> DomainResult<Item>;

    /// Items matching every constraint of `filter`.
    fn search(&self, filter: &ItemFilter) -> Vec<Item> {
        self.list()
            .into_iter()
            .filter(|item| filter.matches(item))
            .collect()
    }

    /// Insert a new item. `Conflict` if the id is taken.
    fn create(&self, item: Item) -> DomainResult<Item>;

    /// Overwrite an existing item.
    ///
    /// `BadRequest` if `id` differs from `item.id`, `NotFound` if absent.
    fn replace(&self, id: ItemId, item: Item) -> DomainResult<Item>;

    /// Merge a sparse update into an existing item. `NotFound` if absent.
    fn patch(&self, id: ItemId, update: ItemUpdate) -> DomainResult<Item>;

    /// Remove an item. `NotFound` if absent.
    fn delete(&self, id: ItemId) -> DomainResult<()>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<S> ItemStore for Arc<S>
where
    S: ItemStore + ?Sized,
{
    fn list(&self) -> Vec<Item> {
        (**self).list()
    }

    fn get(&self, id: ItemId) -> DomainResult<Item> {
        (**self).get(id)
    }

    fn search(&self, filter: &ItemFilter) -> Vec<Item> {
        (**self).search(filter)
    }

    fn create(&self, item: Item) -> DomainResult<Item> {
        (**self).create(item)
    }

    fn replace(&self, id: ItemId, item: Item) -> DomainResult<Item> {
        (**self).replace(id, item)
    }

    fn patch(&self, id: ItemId, update: ItemUpdate) -> DomainResult<Item> {
        (**self).patch(id, update)
    }

    fn delete(&self, id: ItemId) -> DomainResult<()> {
        (**self).delete(id)
    }

    fn len(&self) -> usize {
        (**self).len()
    }
}
