//! Built-in demo catalog used when no catalog file is configured.

use super::item::{Item, ItemId};
use super::store::CatalogStore;

const SAMPLE: &[(u64, &str, &str, &str, f64, f64, &str, &str)] = &[
    (1, "MacBook Pro 16", "Electronics", "Apple", 2499.0, 4.8, "💻", "Powerful laptop for professionals"),
    (2, "AirPods Pro", "Electronics", "Apple", 249.0, 4.7, "🎧", "Wireless noise-canceling earbuds"),
    (3, "Galaxy S24", "Electronics", "Samsung", 999.0, 4.6, "📱", "Latest flagship smartphone"),
    (4, "Nike Air Max", "Fashion", "Nike", 150.0, 4.5, "👟", "Comfortable running shoes"),
    (5, "Levi's 501 Jeans", "Fashion", "Levi's", 80.0, 4.4, "👖", "Classic straight-fit jeans"),
    (6, "Instant Pot", "Home", "Instant Pot", 129.0, 4.9, "🍲", "Multi-use pressure cooker"),
    (7, "Dyson V15", "Home", "Dyson", 749.0, 4.7, "🧹", "Cordless vacuum cleaner"),
    (8, "iPad Air", "Electronics", "Apple", 599.0, 4.8, "📱", "Versatile tablet for work and play"),
    (9, "Adidas Ultraboost", "Fashion", "Adidas", 180.0, 4.6, "👟", "Premium running shoes"),
    (10, "KitchenAid Mixer", "Home", "KitchenAid", 379.0, 4.8, "🥧", "Stand mixer for baking"),
    (11, "Sony WH-1000XM5", "Electronics", "Sony", 399.0, 4.7, "🎧", "Premium noise-canceling headphones"),
    (12, "Patagonia Jacket", "Fashion", "Patagonia", 199.0, 4.5, "🧥", "Outdoor winter jacket"),
];

/// The twelve demo products.
pub fn sample_items() -> Vec<Item> {
    SAMPLE
        .iter()
        .map(
            |&(id, name, category, brand, price, rating, image, description)| Item {
                id: ItemId(id),
                name: name.to_string(),
                category: category.to_string(),
                brand: brand.to_string(),
                price,
                rating,
                description: description.to_string(),
                image: image.to_string(),
            },
        )
        .collect()
}

impl CatalogStore {
    /// Store backed by the built-in demo catalog.
    pub fn sample() -> Self {
        Self::new(sample_items())
    }
}
