use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ItemId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// One catalog entry. Never mutated after the catalog is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    /// Display name.
    pub name: String,
    pub category: String,
    pub brand: String,
    /// Non-negative price in whole currency units.
    pub price: f64,
    /// Rating in `[0, 5]`.
    pub rating: f64,
    /// Free text, searched alongside the name.
    #[serde(default)]
    pub description: String,
    /// Presentation token (an emoji glyph in the demo catalog).
    #[serde(default)]
    pub image: String,
}

impl Item {
    /// Number of filled stars out of five.
    pub fn star_count(&self) -> usize {
        self.rating.clamp(0.0, 5.0).floor() as usize
    }
}
