//! Shared test fixtures.

#![allow(dead_code, unused_imports)]

use catalog_browser::catalog::{CatalogStore, Item, ItemId};
use catalog_browser::query::QueryEngine;

/// Build an item with the fields tests usually care about.
pub fn item(id: u64, name: &str, category: &str, brand: &str, price: f64, rating: f64) -> Item {
    Item {
        id: ItemId(id),
        name: name.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
        price,
        rating,
        description: String::new(),
        image: String::new(),
    }
}

/// Items priced at the given amounts, named by their price.
pub fn priced(prices: &[f64]) -> CatalogStore {
    CatalogStore::new(
        prices
            .iter()
            .enumerate()
            .map(|(i, &price)| item(i as u64 + 1, &format!("Item {price}"), "Misc", "Acme", price, 3.0))
            .collect(),
    )
}

/// Engine over the built-in demo catalog.
pub fn sample_engine() -> QueryEngine {
    QueryEngine::new(CatalogStore::sample())
}

pub fn names(engine: &QueryEngine) -> Vec<String> {
    engine
        .visible_items()
        .iter()
        .map(|item| item.name.clone())
        .collect()
}

pub fn ids(engine: &QueryEngine) -> Vec<u64> {
    engine.visible_items().iter().map(|item| item.id.0).collect()
}
