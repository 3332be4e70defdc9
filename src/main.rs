use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use catalog_browser::catalog::{load_catalog, CatalogStore, ItemId};
use catalog_browser::config::Config;
use catalog_browser::logging::init_tracing;
use catalog_browser::query::{
    QueryEngine, QueryIntent, SelectionState, SortKey, ViewMode, ViewSnapshot,
};
use catalog_browser::render::{render_facets, render_text};

/// Browse a product catalog with search, facet filters and sorting.
#[derive(Debug, Parser)]
#[command(name = "catalog-browser", version)]
struct Cli {
    /// Config file (default: ~/.config/catalog-browser/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog file (.json or .toml); overrides the config file
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Case-insensitive text matched against name and description
    #[arg(long, short = 's')]
    search: Option<String>,

    /// Show only this category
    #[arg(long, short = 'c')]
    category: Option<String>,

    /// Toggle a brand filter (repeatable)
    #[arg(long = "brand", short = 'b')]
    brands: Vec<String>,

    /// Minimum price; non-numeric input means no bound
    #[arg(long)]
    min_price: Option<String>,

    /// Maximum price; non-numeric input means no bound
    #[arg(long)]
    max_price: Option<String>,

    /// Sort order: name, price-low, price-high, rating
    #[arg(long)]
    sort: Option<SortKey>,

    /// Layout: grid or list
    #[arg(long)]
    view: Option<ViewMode>,

    /// Toggle an item id as favorite (repeatable)
    #[arg(long = "favorite")]
    favorites: Vec<u64>,

    /// Print category and brand facets before the results
    #[arg(long)]
    facets: bool,

    /// Print visible items as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    /// Every selection flag as one batch of intents.
    fn intents(&self) -> Vec<QueryIntent> {
        let mut intents = Vec::new();

        if let Some(search) = &self.search {
            intents.push(QueryIntent::SetSearchTerm(search.clone()));
        }
        if let Some(category) = &self.category {
            intents.push(QueryIntent::SetCategory(Some(category.clone())));
        }
        intents.extend(self.brands.iter().cloned().map(QueryIntent::ToggleBrand));
        if let Some(min) = &self.min_price {
            intents.push(QueryIntent::price_min_input(min));
        }
        if let Some(max) = &self.max_price {
            intents.push(QueryIntent::price_max_input(max));
        }
        if let Some(sort) = self.sort {
            intents.push(QueryIntent::SetSortKey(sort));
        }
        if let Some(view) = self.view {
            intents.push(QueryIntent::SetViewMode(view));
        }
        intents.extend(
            self.favorites
                .iter()
                .map(|&id| QueryIntent::ToggleFavorite(ItemId(id))),
        );

        intents
    }
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = Config::load_from(&config_path)?;

    let catalog_path = cli.catalog.clone().or_else(|| config.catalog_path(&config_path));
    let catalog = match &catalog_path {
        Some(path) => load_catalog(path)
            .with_context(|| format!("cannot open catalog {}", path.display()))?,
        None => CatalogStore::sample(),
    };

    let initial = SelectionState {
        view_mode: config.defaults.view_mode,
        ..SelectionState::default()
    };
    let mut engine = QueryEngine::with_state(catalog, initial);
    engine.apply(cli.intents());

    if cli.facets {
        print!("{}", render_facets(engine.categories(), engine.brands()));
        println!();
    }

    let snapshot = ViewSnapshot::from_engine(&engine);
    if cli.json {
        let json = serde_json::to_string_pretty(&snapshot.items)
            .context("cannot serialize visible items")?;
        println!("{json}");
    } else {
        print!("{}", render_text(&snapshot));
    }

    Ok(())
}
