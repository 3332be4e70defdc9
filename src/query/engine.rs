//! Session-scoped query engine.
//!
//! Owns the selection state for one browsing session and keeps the visible
//! list in sync with it. Every mutation goes through [`QueryReducer`]; a
//! batch of intents is folded first and committed once, so a reader never
//! sees a half-applied user action.

use std::collections::BTreeSet;

use crate::catalog::{CatalogStore, Item, ItemId};
use crate::mvi::Reducer;

use super::derive::visible_indices;
use super::intent::QueryIntent;
use super::reducer::QueryReducer;
use super::state::{SelectionState, SortKey, ViewMode};

/// What a listener sees after each effective commit.
#[derive(Debug)]
pub struct ViewUpdate<'a> {
    pub revision: u64,
    pub state: &'a SelectionState,
    pub items: &'a [&'a Item],
}

pub type Listener = Box<dyn FnMut(&ViewUpdate<'_>) + Send + Sync>;

pub struct QueryEngine {
    catalog: CatalogStore,
    state: SelectionState,
    /// Catalog indices of the current visible items.
    visible: Vec<usize>,
    revision: u64,
    listeners: Vec<Listener>,
}

impl QueryEngine {
    /// Start a session with default selections.
    pub fn new(catalog: CatalogStore) -> Self {
        Self::with_state(catalog, SelectionState::default())
    }

    /// Start a session from an explicit initial state.
    pub fn with_state(catalog: CatalogStore, state: SelectionState) -> Self {
        let visible = visible_indices(&catalog, &state);
        Self {
            catalog,
            state,
            visible,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Apply a single intent.
    pub fn dispatch(&mut self, intent: QueryIntent) {
        self.apply(std::iter::once(intent));
    }

    /// Apply a batch of intents as one user action.
    ///
    /// Intents are folded in order; the visible list is recomputed and
    /// listeners are notified at most once for the whole batch.
    pub fn apply<I>(&mut self, intents: I)
    where
        I: IntoIterator<Item = QueryIntent>,
    {
        let accepted = intents
            .into_iter()
            .filter(|intent| self.accepts(intent))
            .collect::<Vec<_>>();
        let next = QueryReducer::reduce_all(self.state.clone(), accepted);
        self.commit(next);
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.dispatch(QueryIntent::SetSearchTerm(term.into()));
    }

    pub fn set_category(&mut self, category: Option<String>) {
        self.dispatch(QueryIntent::SetCategory(category));
    }

    pub fn toggle_brand(&mut self, brand: impl Into<String>) {
        self.dispatch(QueryIntent::ToggleBrand(brand.into()));
    }

    pub fn set_price_min(&mut self, bound: Option<f64>) {
        self.dispatch(QueryIntent::SetPriceMin(bound));
    }

    pub fn set_price_max(&mut self, bound: Option<f64>) {
        self.dispatch(QueryIntent::SetPriceMax(bound));
    }

    /// Lower bound from raw text; unparsable text clears the bound.
    pub fn set_price_min_input(&mut self, input: &str) {
        self.dispatch(QueryIntent::price_min_input(input));
    }

    /// Upper bound from raw text; unparsable text clears the bound.
    pub fn set_price_max_input(&mut self, input: &str) {
        self.dispatch(QueryIntent::price_max_input(input));
    }

    pub fn set_sort_key(&mut self, sort_key: SortKey) {
        self.dispatch(QueryIntent::SetSortKey(sort_key));
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.dispatch(QueryIntent::SetViewMode(view_mode));
    }

    pub fn toggle_favorite(&mut self, id: ItemId) {
        self.dispatch(QueryIntent::ToggleFavorite(id));
    }

    /// Clear filters and sort. View mode and favorites are kept.
    pub fn reset(&mut self) {
        self.dispatch(QueryIntent::Reset);
    }

    /// Register a callback run after every commit that changes the state.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&ViewUpdate<'_>) + Send + Sync + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    // ========================================================================
    // Reads
    // ========================================================================

    /// Visible items, filtered and sorted.
    pub fn visible_items(&self) -> Vec<&Item> {
        let items = self.catalog.all_items();
        self.visible.iter().map(|&index| &items[index]).collect()
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn view_mode(&self) -> ViewMode {
        self.state.view_mode
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.state.is_favorite(id)
    }

    pub fn favorites(&self) -> &BTreeSet<ItemId> {
        &self.state.favorites
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Incremented once per effective commit.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn catalog(&self) -> &CatalogStore {
        &self.catalog
    }

    pub fn categories(&self) -> &[String] {
        self.catalog.categories()
    }

    pub fn brands(&self) -> &[String] {
        self.catalog.brands()
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Toggles must reference catalog values; anything else is dropped.
    fn accepts(&self, intent: &QueryIntent) -> bool {
        match intent {
            QueryIntent::ToggleBrand(brand) if !self.catalog.contains_brand(brand) => {
                tracing::debug!(brand = %brand, "Ignoring toggle for unknown brand");
                false
            }
            QueryIntent::ToggleFavorite(id) if !self.catalog.contains_id(*id) => {
                tracing::debug!(item_id = %id, "Ignoring favorite toggle for unknown item");
                false
            }
            _ => true,
        }
    }

    fn commit(&mut self, next: SelectionState) {
        if next == self.state {
            return;
        }

        self.state = next;
        self.visible = visible_indices(&self.catalog, &self.state);
        self.revision += 1;

        tracing::debug!(
            revision = self.revision,
            visible = self.visible.len(),
            sort = %self.state.sort_key,
            view = %self.state.view_mode,
            "Selection committed"
        );

        if self.listeners.is_empty() {
            return;
        }

        let all = self.catalog.all_items();
        let items: Vec<&Item> = self.visible.iter().map(|&index| &all[index]).collect();
        let update = ViewUpdate {
            revision: self.revision,
            state: &self.state,
            items: &items,
        };
        for listener in &mut self.listeners {
            listener(&update);
        }
    }
}

impl std::fmt::Debug for QueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryEngine")
            .field("catalog_len", &self.catalog.len())
            .field("state", &self.state)
            .field("visible", &self.visible.len())
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
