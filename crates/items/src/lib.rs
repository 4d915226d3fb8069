//! Item domain module.
//!
//! This crate contains the rules for the item resource (patch merge, search
//! filtering), implemented purely as deterministic domain logic (no IO, no
//! HTTP, no storage).

pub mod filter;
pub mod item;

pub use filter::ItemFilter;
pub use item::{Item, ItemUpdate};
