use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::item::Item;
use super::store::CatalogStore;

/// Errors that can occur when loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    JsonError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse catalog file '{path}': {source}")]
    TomlError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported catalog format '{path}' (expected .json or .toml)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Catalog validation failed: {message}")]
    ValidationError { message: String },
}

/// Accepted JSON layouts: a bare array or an object with an `items` array.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    Bare(Vec<Item>),
    Wrapped { items: Vec<Item> },
}

#[derive(Deserialize)]
struct TomlCatalog {
    #[serde(default)]
    items: Vec<Item>,
}

/// Loads and validates a catalog file.
///
/// The format is picked from the extension: `.json` or `.toml`.
pub fn load_catalog(path: &Path) -> Result<CatalogStore, CatalogError> {
    let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let extension = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase());

    let items = match extension.as_deref() {
        Some("json") => parse_json(&content).map_err(|e| CatalogError::JsonError {
            path: path.to_path_buf(),
            source: e,
        })?,
        Some("toml") => parse_toml(&content).map_err(|e| CatalogError::TomlError {
            path: path.to_path_buf(),
            source: e,
        })?,
        _ => {
            return Err(CatalogError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    };

    validate_items(&items)?;

    tracing::info!(
        path = %path.display(),
        items = items.len(),
        "Catalog loaded"
    );

    Ok(CatalogStore::new(items))
}

fn parse_json(content: &str) -> Result<Vec<Item>, serde_json::Error> {
    let catalog: JsonCatalog = serde_json::from_str(content)?;
    Ok(match catalog {
        JsonCatalog::Bare(items) | JsonCatalog::Wrapped { items } => items,
    })
}

fn parse_toml(content: &str) -> Result<Vec<Item>, toml::de::Error> {
    let catalog: TomlCatalog = toml::from_str(content)?;
    Ok(catalog.items)
}

/// Checks that a collection is well-formed.
///
/// Checks:
/// - Item ids are unique
/// - Name, category and brand are not blank
/// - Price is finite and non-negative
/// - Rating is finite and within `[0, 5]`
pub fn validate_items(items: &[Item]) -> Result<(), CatalogError> {
    let mut ids = HashSet::new();

    for item in items {
        if !ids.insert(item.id) {
            return Err(invalid(format!("Duplicate item id {}", item.id)));
        }
        if item.name.trim().is_empty() {
            return Err(invalid(format!("Item {} has an empty name", item.id)));
        }
        if item.category.trim().is_empty() {
            return Err(invalid(format!("Item {} has an empty category", item.id)));
        }
        if item.brand.trim().is_empty() {
            return Err(invalid(format!("Item {} has an empty brand", item.id)));
        }
        if !item.price.is_finite() || item.price < 0.0 {
            return Err(invalid(format!(
                "Item {} has an invalid price {}",
                item.id, item.price
            )));
        }
        if !item.rating.is_finite() || !(0.0..=5.0).contains(&item.rating) {
            return Err(invalid(format!(
                "Item {} has a rating {} outside [0, 5]",
                item.id, item.rating
            )));
        }
    }

    Ok(())
}

fn invalid(message: String) -> CatalogError {
    CatalogError::ValidationError { message }
}
