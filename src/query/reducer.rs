//! Reducer for selection state.

use crate::mvi::Reducer;

use super::intent::QueryIntent;
use super::state::SelectionState;

/// Pure state transitions for [`SelectionState`].
///
/// Catalog membership checks for toggles live in the engine; the reducer
/// only knows about the state it is handed.
pub struct QueryReducer;

impl Reducer for QueryReducer {
    type State = SelectionState;
    type Intent = QueryIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            QueryIntent::SetSearchTerm(search_term) => SelectionState {
                search_term,
                ..state
            },

            QueryIntent::SetCategory(category) => SelectionState {
                category: category.filter(|c| !c.is_empty()),
                ..state
            },

            QueryIntent::ToggleBrand(brand) => {
                let mut brands = state.brands;
                if !brands.remove(&brand) {
                    brands.insert(brand);
                }
                SelectionState { brands, ..state }
            }

            QueryIntent::SetPriceMin(bound) => SelectionState {
                price_min: bound.filter(|v| v.is_finite()),
                ..state
            },

            QueryIntent::SetPriceMax(bound) => SelectionState {
                price_max: bound.filter(|v| v.is_finite()),
                ..state
            },

            QueryIntent::SetSortKey(sort_key) => SelectionState { sort_key, ..state },

            QueryIntent::SetViewMode(view_mode) => SelectionState { view_mode, ..state },

            QueryIntent::ToggleFavorite(id) => {
                let mut favorites = state.favorites;
                if !favorites.remove(&id) {
                    favorites.insert(id);
                }
                SelectionState { favorites, ..state }
            }

            QueryIntent::Reset => state.reset(),
        }
    }
}
