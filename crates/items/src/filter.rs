//! Search filter over items.

use crate::item::Item;

/// Conjunction of optional constraints.
///
/// An unset constraint matches everything. The name needle is stored
/// lowercased; an empty needle is the same as no name constraint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    name: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    is_active: Option<bool>,
}

impl ItemFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, needle: Option<impl AsRef<str>>) -> Self {
        self.name = needle
            .map(|n| n.as_ref().to_lowercase())
            .filter(|n| !n.is_empty());
        self
    }

    pub fn min_price(mut self, min: Option<f64>) -> Self {
        self.min_price = min;
        self
    }

    pub fn max_price(mut self, max: Option<f64>) -> Self {
        self.max_price = max;
        self
    }

    pub fn is_active(mut self, is_active: Option<bool>) -> Self {
        self.is_active = is_active;
        self
    }

    pub fn is_unconstrained(&self) -> bool {
        self.name.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.is_active.is_none()
    }

    pub fn matches(&self, item: &Item) -> bool {
        if let Some(needle) = &self.name {
            if !item.name.to_lowercase().contains(needle.as_str()) {
                return false;
            }
        }
        if self.min_price.is_some_and(|min| item.price < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| item.price > max) {
            return false;
        }
        if self.is_active.is_some_and(|active| item.is_active != active) {
            return false;
        }
        true
    }
}
