//! Configuration management for model-select

use crate::paths;
use crate::registry::Registry;
use crate::ui::DEFAULT_OVERLAY_GAP;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Models offered by the selector, in display order
    #[serde(default)]
    pub models: Registry,

    /// Model selected at startup; falls back to the first model when unset
    /// or unknown
    #[serde(default)]
    pub default_model: Option<String>,

    /// Poll interval in milliseconds for terminal events
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Rows between the trigger and the overlay
    #[serde(default = "default_overlay_gap")]
    pub overlay_gap: u16,
}

const fn default_poll_interval() -> u64 {
    100
}

const fn default_overlay_gap() -> u16 {
    DEFAULT_OVERLAY_GAP
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: Registry::default(),
            default_model: None,
            poll_interval_ms: default_poll_interval(),
            overlay_gap: default_overlay_gap(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let Some(path) = Self::default_path() else {
            warn!("No config directory available, using defaults");
            return Ok(Self::default());
        };
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "No config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if its model
    /// list is empty or repeats an id
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        debug!(
            path = %path.display(),
            models = config.models.len(),
            "Loaded config"
        );
        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> Option<PathBuf> {
        paths::config_dir().map(|dir| dir.join("model-select").join("config.json"))
    }

    /// The model id to start with: `requested`, else the configured default,
    /// else the first model
    #[must_use]
    pub fn initial_model(&self, requested: Option<&str>) -> String {
        requested
            .or(self.default_model.as_deref())
            .unwrap_or_else(|| self.models.first().id.as_str())
            .to_string()
    }
}
