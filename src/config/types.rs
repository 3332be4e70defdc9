use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::query::ViewMode;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub defaults: Defaults,
}

/// Where the item catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a `.json` or `.toml` catalog. `None` uses the built-in sample.
    /// Relative paths resolve against the config file's directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Initial session preferences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// View mode a new session starts in (default: grid).
    #[serde(default)]
    pub view_mode: ViewMode,
}
