//! Item storage boundary.
//!
//! The store owns the whole service state: one `id -> Item` map. Every
//! operation is atomic with respect to that map.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemStore;
pub use r#trait::ItemStore;
