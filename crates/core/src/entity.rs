//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Copy + Eq + Ord + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> Self::Id;

    /// True when the entity is stored under `key` (identity matches the map key).
    fn is_keyed_by(&self, key: Self::Id) -> bool {
        self.id() == key
    }
}
