//! Immutable in-memory catalog.
//!
//! The store owns the source collection for the whole session and derives
//! the facet lists (categories, brands) once at construction. Facets come
//! from the full collection, never from a filtered view, so a filter option
//! never disappears just because the current selection hides its items.

use std::collections::HashSet;
use std::sync::Arc;

use super::item::{Item, ItemId};

/// Read-only item collection plus its derived facets.
///
/// Cloning is cheap: all clones share the same storage.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    inner: Arc<CatalogInner>,
}

#[derive(Debug)]
struct CatalogInner {
    items: Vec<Item>,
    categories: Vec<String>,
    brands: Vec<String>,
}

impl CatalogStore {
    /// Build a store from a well-formed item collection.
    pub fn new(items: Vec<Item>) -> Self {
        let categories = distinct_in_order(items.iter().map(|item| item.category.as_str()));
        let brands = distinct_in_order(items.iter().map(|item| item.brand.as_str()));

        Self {
            inner: Arc::new(CatalogInner {
                items,
                categories,
                brands,
            }),
        }
    }

    /// The full collection in source order.
    pub fn all_items(&self) -> &[Item] {
        &self.inner.items
    }

    /// Distinct categories in first-occurrence order.
    pub fn categories(&self) -> &[String] {
        &self.inner.categories
    }

    /// Distinct brands in first-occurrence order.
    pub fn brands(&self) -> &[String] {
        &self.inner.brands
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.inner.items.iter().find(|item| item.id == id)
    }

    pub fn contains_id(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn contains_brand(&self, brand: &str) -> bool {
        self.inner.brands.iter().any(|b| b == brand)
    }

    pub fn contains_category(&self, category: &str) -> bool {
        self.inner.categories.iter().any(|c| c == category)
    }

    pub fn len(&self) -> usize {
        self.inner.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.items.is_empty()
    }
}

fn distinct_in_order<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|value| seen.insert(*value))
        .map(str::to_string)
        .collect()
}
