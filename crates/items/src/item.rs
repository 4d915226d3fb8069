use serde::{Deserialize, Deserializer, Serialize};

use itemstore_core::{Entity, ItemId};

/// The managed resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub is_active: bool,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: f64, is_active: bool) -> Self {
        Self {
            id,
            name: name.into(),
            description: None,
            price,
            is_active,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Merge a sparse patch into this item, field by field.
    ///
    /// Fields absent from `update` keep their current value. The id is not
    /// part of a patch and is never touched.
    pub fn apply_update(&mut self, update: ItemUpdate) {
        let ItemUpdate {
            name,
            description,
            price,
            is_active,
        } = update;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(price) = price {
            self.price = price;
        }
        if let Some(is_active) = is_active {
            self.is_active = is_active;
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> ItemId {
        self.id
    }
}

/// Sparse patch for an [`Item`].
///
/// `None` means "leave unchanged". `description` distinguishes an absent key
/// (`None`) from an explicit `null` (`Some(None)`), which clears it, unlike a
/// merge that drops null values first. For the required fields an explicit
/// `null` is treated the same as absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ItemUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub is_active: Option<bool>,
}

impl ItemUpdate {
    /// True when applying this patch would change nothing.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.price.is_none()
            && self.is_active.is_none()
    }
}

// Only called when the key is present, so `null` becomes `Some(None)`.
fn present_or_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn widget() -> Item {
        Item::new(ItemId::new(1), "Widget", 9.99, true)
    }

    #[test]
    fn item_json_shape_includes_null_description() {
        let value = serde_json::to_value(widget()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": 1,
                "name": "Widget",
                "description": null,
                "price": 9.99,
                "is_active": true,
            })
        );
    }

    #[test]
    fn item_description_defaults_to_none_when_omitted() {
        let item: Item =
            serde_json::from_value(json!({"id": 1, "name": "Widget", "price": 9.99, "is_active": true}))
                .unwrap();
        assert_eq!(item, widget());
    }

    #[test]
    fn item_requires_name_price_and_is_active() {
        assert!(serde_json::from_value::<Item>(json!({"id": 1, "price": 1.0, "is_active": true})).is_err());
        assert!(serde_json::from_value::<Item>(json!({"id": 1, "name": "x", "is_active": true})).is_err());
        assert!(serde_json::from_value::<Item>(json!({"id": 1, "name": "x", "price": 1.0})).is_err());
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut item = widget().with_description("small");
        let update: ItemUpdate = serde_json::from_value(json!({"price": 12.5})).unwrap();
        item.apply_update(update);

        assert_eq!(item.price, 12.5);
        assert_eq!(item.name, "Widget");
        assert_eq!(item.description.as_deref(), Some("small"));
        assert!(item.is_active);
        assert_eq!(item.id, ItemId::new(1));
    }

    #[test]
    fn patch_with_explicit_null_description_clears_it() {
        let mut item = widget().with_description("small");
        let update: ItemUpdate = serde_json::from_value(json!({"description": null})).unwrap();
        assert_eq!(update.description, Some(None));
        item.apply_update(update);
        assert_eq!(item.description, None);
    }

    #[test]
    fn patch_with_null_required_field_is_ignored() {
        let mut item = widget();
        let update: ItemUpdate =
            serde_json::from_value(json!({"name": null, "price": null, "is_active": null})).unwrap();
        assert!(update.is_empty());
        item.apply_update(update);
        assert_eq!(item, widget());
    }

    #[test]
    fn patch_never_changes_id() {
        let mut item = widget();
        let update: ItemUpdate = serde_json::from_value(json!({"id": 99, "name": "Gadget"})).unwrap();
        item.apply_update(update);
        assert_eq!(item.id, ItemId::new(1));
        assert_eq!(item.name, "Gadget");
    }

    #[test]
    fn empty_patch_is_a_no_op() {
        let mut item = widget();
        item.apply_update(ItemUpdate::default());
        assert_eq!(item, widget());
    }

    #[test]
    fn keyed_by_own_id() {
        assert!(widget().is_keyed_by(ItemId::new(1)));
        assert!(!widget().is_keyed_by(ItemId::new(2)));
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every field is either the patched value or the original one.
        #[test]
        fn patch_preserves_absent_fields(
            name in proptest::option::of("[A-Za-z ]{0,20}"),
            description in proptest::option::of(proptest::option::of("[a-z]{0,20}")),
            price in proptest::option::of(0.0f64..10_000.0),
            is_active in proptest::option::of(any::<bool>()),
        ) {
            let original = widget().with_description("original");
            let update = ItemUpdate {
                name: name.clone(),
                description: description.clone(),
                price,
                is_active,
            };

            let mut merged = original.clone();
            merged.apply_update(update);

            prop_assert_eq!(merged.id, original.id);
            prop_assert_eq!(merged.name, name.unwrap_or(original.name));
            prop_assert_eq!(merged.description, description.unwrap_or(original.description));
            prop_assert_eq!(merged.price, price.unwrap_or(original.price));
            prop_assert_eq!(merged.is_active, is_active.unwrap_or(original.is_active));
        }
    }
}
