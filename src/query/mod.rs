//! Query engine: selection state and the visible-item derivation.

mod collate;
mod derive;
mod engine;
mod intent;
mod reducer;
mod shared;
mod state;

pub use collate::compare_names;
pub use derive::{derive_visible, matches, visible_indices};
pub use engine::{Listener, QueryEngine, ViewUpdate};
pub use intent::QueryIntent;
pub use reducer::QueryReducer;
pub use shared::{SharedQueryEngine, ViewSnapshot};
pub use state::{parse_price_bound, ParseSelectionError, SelectionState, SortKey, ViewMode};
