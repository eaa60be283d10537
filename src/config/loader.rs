use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Longest accepted debounce window.
const MAX_DEBOUNCE_MS: u64 = 10_000;

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
    /// Uses `~/.config/moviesdecade/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("moviesdecade").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
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

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The debounce window is within `1..=MAX_DEBOUNCE_MS`
    /// - The log level directive is not empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        let debounce_ms = self.search.debounce_ms;
        if debounce_ms == 0 || debounce_ms > MAX_DEBOUNCE_MS {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "search.debounce_ms must be between 1 and {}, got {}",
                    MAX_DEBOUNCE_MS, debounce_ms
                ),
            });
        }

        if self.logging.level.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "logging.level must not be empty".to_string(),
            });
        }

        Ok(())
    }

    /// Catalog file to load: the configured path, or `movies.json` beside `config_path`.
    pub fn catalog_path(&self, config_path: &Path) -> PathBuf {
        match &self.catalog.path {
            Some(path) => path.clone(),
            None => config_path
                .parent()
                .unwrap_or_else(|| Path::new("."))
                .join("movies.json"),
        }
    }
}
