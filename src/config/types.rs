use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search intent pipeline settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a text change becomes a search (default: 300).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Where the movie catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. When unset, `movies.json` next to the config file.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

/// Logging settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set (e.g. "info", "moviesdecade=debug").
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl SearchConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
