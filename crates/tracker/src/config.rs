//! Configuration file loading and parsing.
//!
//! The tracker reads optional settings from `tracker.toml`. If no config file
//! exists, every setting falls back to its default. Every section and key is
//! optional.
//!
//! ```toml
//! [store]
//! seed = true
//! unknown_id = "ignore"
//!
//! [validation]
//! reject_blank = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// File name looked up by [`TrackerConfig::load`].
pub const CONFIG_FILE_NAME: &str = "tracker.toml";

/// Root configuration structure loaded from `tracker.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrackerConfig {
    /// Store behavior configuration (optional).
    pub store: Option<StoreConfig>,
    /// Draft validation configuration (optional).
    pub validation: Option<ValidationConfig>,
}

/// Store behavior configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoreConfig {
    /// Start with the built-in seed issues (default: false).
    pub seed: Option<bool>,
    /// What a status change on an unknown id does (default: "error").
    pub unknown_id: Option<UnknownIdPolicy>,
}

impl StoreConfig {
    pub fn seed(&self) -> bool {
        self.seed.unwrap_or(false)
    }

    pub fn unknown_id(&self) -> UnknownIdPolicy {
        self.unknown_id.unwrap_or_default()
    }
}

/// Outcome of a status change that names an id not in the collection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownIdPolicy {
    /// Report `NotFoundError`
    #[default]
    Error,
    /// Leave the collection unchanged and report success
    Ignore,
}

/// Draft validation configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationConfig {
    /// Whitespace-only title or owner counts as missing (default: false).
    pub reject_blank: Option<bool>,
}

impl ValidationConfig {
    pub fn reject_blank(&self) -> bool {
        self.reject_blank.unwrap_or(false)
    }
}

impl TrackerConfig {
    /// Load configuration from `<config_dir>/tracker.toml` if it exists.
    ///
    /// Returns the default config if the file doesn't exist.
    /// Returns an error if the file exists but is malformed.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %config_path.display(), "loaded config");

        Ok(config)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse tracker.toml")
    }

    /// Whether a new store starts with the seed issues.
    pub fn seed(&self) -> bool {
        self.store.as_ref().map(StoreConfig::seed).unwrap_or(false)
    }

    /// Policy for status changes on unknown ids.
    pub fn unknown_id_policy(&self) -> UnknownIdPolicy {
        self.store
            .as_ref()
            .map(StoreConfig::unknown_id)
            .unwrap_or_default()
    }

    /// Validation section, or defaults when absent.
    pub fn validation(&self) -> ValidationConfig {
        self.validation.clone().unwrap_or_default()
    }
}
