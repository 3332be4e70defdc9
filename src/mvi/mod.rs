//! State/intent/reducer primitives behind the query engine.
//!
//! Every change to a browsing session travels one way:
//!
//! ```text
//! control ──→ Intent ──→ Reducer::reduce ──→ State ──→ derived items
//!    ↑                                                    │
//!    └──────────────── rendered view ─────────────────────┘
//! ```
//!
//! Nothing outside a reducer writes to a state value, so two sessions fed
//! the same intents end up with the same selections.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
