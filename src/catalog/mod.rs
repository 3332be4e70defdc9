//! Catalog store: the immutable item collection and its facets.

mod item;
mod loader;
mod sample;
mod store;

pub use item::{Item, ItemId};
pub use loader::{load_catalog, validate_items, CatalogError};
pub use sample::sample_items;
pub use store::CatalogStore;
