//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of an item.
///
/// Client-assigned integer; it is the store key and never changes for the
/// lifetime of the record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|e| DomainError::validation(format!("ItemId: {e}")))?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parses_plain_integers() {
        assert_eq!("42".parse::<ItemId>().unwrap(), ItemId::new(42));
        assert_eq!("-7".parse::<ItemId>().unwrap(), ItemId::new(-7));
    }

    #[test]
    fn rejects_non_integers() {
        let err = "abc".parse::<ItemId>().unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!("1.5".parse::<ItemId>().is_err());
    }

    #[test]
    fn serializes_as_bare_integer() {
        let json = serde_json::to_string(&ItemId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ItemId = serde_json::from_str("3").unwrap();
        assert_eq!(back, ItemId::new(3));
    }

    proptest! {
        #[test]
        fn display_then_parse_is_identity(v in any::<i64>()) {
            let id = ItemId::new(v);
            prop_assert_eq!(id.to_string().parse::<ItemId>().unwrap(), id);
        }
    }
}
