mod common;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use catalog_browser::catalog::ItemId;
use catalog_browser::query::{QueryIntent, SharedQueryEngine, SortKey, ViewMode};
use common::sample_engine;

#[test]
fn snapshot_reflects_dispatched_intents() {
    let shared = SharedQueryEngine::new(sample_engine());
    shared.dispatch(QueryIntent::SetCategory(Some("Home".to_string())));
    shared.dispatch(QueryIntent::ToggleFavorite(ItemId(6)));

    let snapshot = shared.snapshot();
    assert_eq!(snapshot.count(), 3);
    assert_eq!(snapshot.revision, 2);
    assert!(snapshot.is_favorite(ItemId(6)));
    assert_eq!(snapshot.view_mode, ViewMode::Grid);
    assert_eq!(shared.state().category.as_deref(), Some("Home"));
}

#[test]
fn clones_share_one_session() {
    let shared = SharedQueryEngine::new(sample_engine());
    let other = shared.clone();
    other.dispatch(QueryIntent::SetViewMode(ViewMode::List));

    assert_eq!(shared.snapshot().view_mode, ViewMode::List);
    assert_eq!(shared.with_engine(|engine| engine.visible_count()), 12);
}

/// Readers racing a writer only ever observe whole batches.
#[test]
fn readers_never_see_partial_batches() {
    let shared = SharedQueryEngine::new(sample_engine());
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let shared = shared.clone();
        let done = done.clone();
        thread::spawn(move || {
            while !done.load(Ordering::SeqCst) {
                shared.with_engine(|engine| {
                    let state = engine.state();
                    // The batch sets both fields together or not at all.
                    let narrowed = state.category.is_some();
                    let sorted = state.sort_key == SortKey::PriceDescending;
                    assert_eq!(narrowed, sorted);
                    if narrowed {
                        assert_eq!(engine.visible_count(), 4);
                    } else {
                        assert_eq!(engine.visible_count(), 12);
                    }
                });
            }
        })
    };

    for _ in 0..200 {
        shared.apply([
            QueryIntent::SetCategory(Some("Fashion".to_string())),
            QueryIntent::SetSortKey(SortKey::PriceDescending),
        ]);
        shared.apply([QueryIntent::Reset]);
    }

    done.store(true, Ordering::SeqCst);
    reader.join().expect("reader thread panicked");
}
