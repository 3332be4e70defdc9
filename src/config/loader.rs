use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/catalog-browser/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("catalog-browser").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Catalog file named by `catalog.path`.
    ///
    /// A relative path is taken relative to the directory holding
    /// `config_file`, so the config keeps working from any directory.
    pub fn catalog_path(&self, config_file: &Path) -> Option<PathBuf> {
        let path = self.catalog.path.as_ref()?;
        if path.is_absolute() {
            return Some(path.clone());
        }
        let base = config_file.parent().unwrap_or_else(|| Path::new(""));
        Some(base.join(path))
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - A configured catalog path is not blank
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.catalog.path {
            if path.as_os_str().to_string_lossy().trim().is_empty() {
                return Err(ConfigError::ValidationError {
                    message: "catalog.path must not be empty".to_string(),
                });
            }
        }

        Ok(())
    }
}
