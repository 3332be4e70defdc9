use crate::catalog::ItemId;
use crate::mvi::Intent;

use super::state::{parse_price_bound, SortKey, ViewMode};

/// One user action on the filter, sort or view controls.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryIntent {
    SetSearchTerm(String),
    /// `None` (or an empty string) selects every category.
    SetCategory(Option<String>),
    /// Adds the brand when absent, removes it when present.
    ToggleBrand(String),
    SetPriceMin(Option<f64>),
    SetPriceMax(Option<f64>),
    SetSortKey(SortKey),
    SetViewMode(ViewMode),
    ToggleFavorite(ItemId),
    /// Clears every filter and the sort key. View mode and favorites stay.
    Reset,
}

impl Intent for QueryIntent {}

impl QueryIntent {
    /// Lower bound from raw text input; unparsable text clears the bound.
    pub fn price_min_input(input: &str) -> Self {
        QueryIntent::SetPriceMin(parse_price_bound(input))
    }

    /// Upper bound from raw text input; unparsable text clears the bound.
    pub fn price_max_input(input: &str) -> Self {
        QueryIntent::SetPriceMax(parse_price_bound(input))
    }
}
