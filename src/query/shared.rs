//! Thread-safe engine handle for renderers running off the input thread.

use std::collections::BTreeSet;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::catalog::{Item, ItemId};

use super::engine::QueryEngine;
use super::intent::QueryIntent;
use super::state::{SelectionState, ViewMode};

/// Owned copy of everything a renderer reads for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot {
    pub revision: u64,
    pub items: Vec<Item>,
    pub view_mode: ViewMode,
    pub favorites: BTreeSet<ItemId>,
}

impl ViewSnapshot {
    pub fn from_engine(engine: &QueryEngine) -> Self {
        Self {
            revision: engine.revision(),
            items: engine.visible_items().into_iter().cloned().collect(),
            view_mode: engine.view_mode(),
            favorites: engine.favorites().clone(),
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_favorite(&self, id: ItemId) -> bool {
        self.favorites.contains(&id)
    }
}

/// Cloneable handle to one session's engine.
///
/// Batches run under a single write lock, so a concurrent [`snapshot`]
/// observes either the state before the batch or the state after it.
///
/// [`snapshot`]: SharedQueryEngine::snapshot
#[derive(Clone)]
pub struct SharedQueryEngine {
    inner: Arc<RwLock<QueryEngine>>,
}

impl SharedQueryEngine {
    pub fn new(engine: QueryEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn dispatch(&self, intent: QueryIntent) {
        self.inner.write().dispatch(intent);
    }

    pub fn apply<I>(&self, intents: I)
    where
        I: IntoIterator<Item = QueryIntent>,
    {
        self.inner.write().apply(intents);
    }

    pub fn snapshot(&self) -> ViewSnapshot {
        ViewSnapshot::from_engine(&self.inner.read())
    }

    pub fn state(&self) -> SelectionState {
        self.inner.read().state().clone()
    }

    /// Run `f` against the engine under a read lock.
    pub fn with_engine<R>(&self, f: impl FnOnce(&QueryEngine) -> R) -> R {
        f(&self.inner.read())
    }
}

impl std::fmt::Debug for SharedQueryEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedQueryEngine")
            .field("revision", &self.inner.read().revision())
            .finish()
    }
}
