//! Pure derivation of the visible item list.
//!
//! `(catalog, selection) -> visible items`. No caching lives here; the same
//! inputs always give the same output.

use crate::catalog::{CatalogStore, Item};

use super::collate::compare_names;
use super::state::{SelectionState, SortKey};

/// Filter predicates prepared once per derivation.
struct Criteria<'a> {
    needle: String,
    state: &'a SelectionState,
}

impl<'a> Criteria<'a> {
    fn new(state: &'a SelectionState) -> Self {
        Self {
            needle: state.search_term.to_lowercase(),
            state,
        }
    }

    fn matches(&self, item: &Item) -> bool {
        self.matches_text(item)
            && self.matches_category(item)
            && self.matches_brand(item)
            && self.matches_price(item)
    }

    fn matches_text(&self, item: &Item) -> bool {
        self.needle.is_empty()
            || item.name.to_lowercase().contains(&self.needle)
            || item.description.to_lowercase().contains(&self.needle)
    }

    fn matches_category(&self, item: &Item) -> bool {
        self.state
            .category
            .as_deref()
            .map_or(true, |category| item.category == category)
    }

    fn matches_brand(&self, item: &Item) -> bool {
        self.state.brands.is_empty() || self.state.brands.contains(&item.brand)
    }

    fn matches_price(&self, item: &Item) -> bool {
        self.state.price_min.map_or(true, |min| item.price >= min)
            && self.state.price_max.map_or(true, |max| item.price <= max)
    }
}

/// True if `item` passes every active filter in `state`.
pub fn matches(state: &SelectionState, item: &Item) -> bool {
    Criteria::new(state).matches(item)
}

/// Catalog indices of the visible items, in display order.
pub fn visible_indices(catalog: &CatalogStore, state: &SelectionState) -> Vec<usize> {
    let criteria = Criteria::new(state);
    let items = catalog.all_items();

    let mut indices: Vec<usize> = items
        .iter()
        .enumerate()
        .filter(|(_, item)| criteria.matches(item))
        .map(|(index, _)| index)
        .collect();

    // `sort_by` is stable: ties keep catalog order.
    indices.sort_by(|&a, &b| {
        let (a, b) = (&items[a], &items[b]);
        match state.sort_key {
            SortKey::Name => compare_names(&a.name, &b.name),
            SortKey::PriceAscending => a.price.total_cmp(&b.price),
            SortKey::PriceDescending => b.price.total_cmp(&a.price),
            SortKey::RatingDescending => b.rating.total_cmp(&a.rating),
        }
    });

    indices
}

/// The visible items for `state`, filtered and sorted.
pub fn derive_visible<'a>(catalog: &'a CatalogStore, state: &SelectionState) -> Vec<&'a Item> {
    let items = catalog.all_items();
    visible_indices(catalog, state)
        .into_iter()
        .map(|index| &items[index])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemId;

    fn item(id: u64, name: &str, price: f64, rating: f64) -> Item {
        Item {
            id: ItemId(id),
            name: name.to_string(),
            category: "Home".to_string(),
            brand: "Acme".to_string(),
            price,
            rating,
            description: String::new(),
            image: String::new(),
        }
    }

    fn ids(items: &[&Item]) -> Vec<u64> {
        items.iter().map(|item| item.id.0).collect()
    }

    #[test]
    fn default_state_shows_everything_by_name() {
        let catalog = CatalogStore::new(vec![
            item(1, "Zeta", 1.0, 1.0),
            item(2, "alpha", 2.0, 2.0),
            item(3, "Beta", 3.0, 3.0),
        ]);
        let visible = derive_visible(&catalog, &SelectionState::default());
        assert_eq!(ids(&visible), vec![2, 3, 1]);
    }

    #[test]
    fn equal_keys_keep_catalog_order() {
        let catalog = CatalogStore::new(vec![
            item(1, "Same", 10.0, 4.0),
            item(2, "Other", 10.0, 4.0),
            item(3, "Same", 10.0, 4.0),
        ]);

        let by_name = derive_visible(&catalog, &SelectionState::default());
        assert_eq!(ids(&by_name), vec![2, 1, 3]);

        for sort_key in [
            SortKey::PriceAscending,
            SortKey::PriceDescending,
            SortKey::RatingDescending,
        ] {
            let state = SelectionState {
                sort_key,
                ..SelectionState::default()
            };
            assert_eq!(ids(&derive_visible(&catalog, &state)), vec![1, 2, 3]);
        }
    }

    #[test]
    fn inverted_price_range_is_empty() {
        let catalog = CatalogStore::new(vec![item(1, "A", 150.0, 1.0)]);
        let state = SelectionState {
            price_min: Some(200.0),
            price_max: Some(100.0),
            ..SelectionState::default()
        };
        assert!(derive_visible(&catalog, &state).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let catalog = CatalogStore::new(vec![item(1, "A", 100.0, 1.0), item(2, "B", 200.0, 1.0)]);
        let state = SelectionState {
            price_min: Some(100.0),
            price_max: Some(200.0),
            ..SelectionState::default()
        };
        assert_eq!(ids(&derive_visible(&catalog, &state)), vec![1, 2]);
    }

    #[test]
    fn search_matches_description_case_insensitively() {
        let mut lamp = item(1, "Lamp", 10.0, 1.0);
        lamp.description = "Warm LED light".to_string();
        let catalog = CatalogStore::new(vec![lamp, item(2, "Chair", 10.0, 1.0)]);
        let state = SelectionState {
            search_term: "led".to_string(),
            ..SelectionState::default()
        };
        assert_eq!(ids(&derive_visible(&catalog, &state)), vec![1]);
    }

    #[test]
    fn matches_agrees_with_derivation() {
        let catalog = CatalogStore::new(vec![item(1, "A", 5.0, 1.0), item(2, "B", 50.0, 1.0)]);
        let state = SelectionState {
            price_max: Some(10.0),
            ..SelectionState::default()
        };
        assert!(matches(&state, &catalog.all_items()[0]));
        assert!(!matches(&state, &catalog.all_items()[1]));
    }
}
