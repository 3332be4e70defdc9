use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::ItemId;
use crate::mvi::UiState;

/// Ordering applied to the filtered items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name")]
    Name,
    #[serde(rename = "price-low", alias = "price-ascending")]
    PriceAscending,
    #[serde(rename = "price-high", alias = "price-descending")]
    PriceDescending,
    #[serde(rename = "rating", alias = "rating-descending")]
    RatingDescending,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Name,
        SortKey::PriceAscending,
        SortKey::PriceDescending,
        SortKey::RatingDescending,
    ];

    /// Wire name, as used in config files and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceAscending => "price-low",
            SortKey::PriceDescending => "price-high",
            SortKey::RatingDescending => "rating",
        }
    }

    /// Label shown in a sort picker.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Name (A-Z)",
            SortKey::PriceAscending => "Price: Low to High",
            SortKey::PriceDescending => "Price: High to Low",
            SortKey::RatingDescending => "Highest Rated",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortKey::Name),
            "price-low" | "price-ascending" => Ok(SortKey::PriceAscending),
            "price-high" | "price-descending" => Ok(SortKey::PriceDescending),
            "rating" | "rating-descending" => Ok(SortKey::RatingDescending),
            _ => Err(ParseSelectionError::SortKey(s.to_string())),
        }
    }
}

/// Display arrangement. Pure presentation; filtering ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = ParseSelectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            _ => Err(ParseSelectionError::ViewMode(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseSelectionError {
    #[error("unknown sort key '{0}' (expected name, price-low, price-high or rating)")]
    SortKey(String),
    #[error("unknown view mode '{0}' (expected grid or list)")]
    ViewMode(String),
}

/// Parses raw price-bound input.
///
/// Blank, non-numeric and non-finite input all mean "no bound".
pub fn parse_price_bound(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Every user selection for one browsing session.
///
/// `favorites` and `view_mode` are preferences and survive a reset; the
/// remaining fields are filters and go back to their defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionState {
    /// Case-insensitive substring matched against name and description.
    pub search_term: String,
    /// `None` shows every category.
    pub category: Option<String>,
    /// Empty shows every brand.
    pub brands: BTreeSet<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort_key: SortKey,
    pub view_mode: ViewMode,
    pub favorites: BTreeSet<ItemId>,
}

impl UiState for SelectionState {}

impl SelectionState {
    /// State after a reset: defaults, keeping view mode and favorites.
    pub fn reset(self) -> Self {
        Self {
            view_mode: self.view_mode,
            favorites: self.favorites,
            ..Self::default()
        }
    }

    /// True when at least one filter narrows the catalog.
    pub fn has_active_filters(&self) -> bool {
        !self.search_term.is_empty()
            || self.category.is_some()
            || !self.brands.is_empty()
            || self.price_min.is_some()
            || self.price_max.is_some()
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(&id)
    }
}
