//! In-memory catalog browser.
//!
//! A [`catalog::CatalogStore`] holds the immutable items and their facets;
//! a [`query::QueryEngine`] holds one session's filter, sort, view and
//! favorite selections and derives the visible items from both.

pub mod catalog;
pub mod config;
pub mod logging;
pub mod mvi;
pub mod query;
pub mod render;
