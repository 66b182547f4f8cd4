//! Read-only view over the external food catalog.
//!
//! The catalog is owned elsewhere (managed and edited outside this crate);
//! the core only ever looks items up by id and must tolerate lookups that
//! fail, since diary entries can outlive the foods they reference.

use std::collections::HashMap;

use crate::models::FoodItem;

/// An id-indexed snapshot of the food catalog.
#[derive(Debug, Clone, Default)]
pub struct FoodCatalog {
    items: HashMap<String, FoodItem>,
}

impl FoodCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of items. Later duplicates of an id
    /// replace earlier ones.
    pub fn from_items(items: impl IntoIterator<Item = FoodItem>) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| (item.id.clone(), item))
                .collect(),
        }
    }

    /// Look a food up by id. `None` is an expected outcome, not an error.
    pub fn lookup(&self, food_id: &str) -> Option<&FoodItem> {
        self.items.get(food_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FoodItem> {
        self.items.values()
    }
}
