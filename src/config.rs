//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a syllabus.toml, and if present we load settings from there.
//! This provides the data and store locations, tree indentation and the log filter.

use facet::Facet;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when no other path is given.
pub const DEFAULT_CONFIG_FILE: &str = "syllabus.toml";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from syllabus.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "data.json".to_string())]
    /// Location of the syllabus document.
    pub data_path: String,
    #[facet(default = String::new())]
    /// Location of the check store; empty means the platform data directory.
    pub store_path: String,
    #[facet(default = 2)]
    /// Columns of indentation per tree level.
    pub indent_width: usize,
    #[facet(default = "info".to_string())]
    /// Tracing filter used when `SYLLABUS_LOG` is not set.
    pub log_filter: String,
}

// Mirrors the `#[facet(default)]` attributes above.
impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: "data.json".to_string(),
            store_path: String::new(),
            indent_width: 2,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from syllabus.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(DEFAULT_CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, falling back to defaults if it is missing or invalid.
    pub fn load_from(path: &Path) -> Self {
        if let Ok(contents) = fs::read_to_string(path) {
            if let Ok(config) = facet_toml::from_str::<Self>(&contents) {
                return config;
            }
        }
        Self::default()
    }

    #[must_use]
    /// Resolved location of the check store.
    pub fn resolved_store_path(&self) -> PathBuf {
        if self.store_path.is_empty() {
            crate::store::default_store_path()
        } else {
            PathBuf::from(&self.store_path)
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
