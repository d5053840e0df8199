//! `AppConfig` struct and TOML read/write.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level application configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Upstream API settings.
    #[serde(default)]
    pub api: ApiConfig,
    /// Browse page layout.
    #[serde(default)]
    pub page: PageConfig,
}

/// Upstream API configuration.
#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ApiConfig {
    /// TMDB API key. The `TMDB_API_KEY` environment variable takes
    /// precedence over this value.
    #[serde(default)]
    pub key: Option<String>,
}

/// Browse page configuration.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PageConfig {
    /// Authored carousel headings, in page order. Each heading selects
    /// its catalog query; unknown headings route to the default query.
    #[serde(default = "default_rows")]
    pub rows: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
        }
    }
}

/// The authored headings of the stock browse page.
fn default_rows() -> Vec<String> {
    vec![
        String::from("Popular on Netflix"),
        String::from("Trending Now"),
        String::from("Netflix Originals"),
        String::from("TV Shows"),
        String::from("Movies"),
    ]
}

impl AppConfig {
    /// Loads config from a TOML file. Returns default if file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Saves config to a TOML file, creating parent directories if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self).context("failed to serialize config to TOML")?;
        std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
    }
}
