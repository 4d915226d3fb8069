//! Infrastructure layer: item storage.

pub mod item_store;

pub use item_store::{InMemoryItemStore, ItemStore};
