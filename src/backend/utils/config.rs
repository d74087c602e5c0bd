//! Application configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Namespace for every key the app writes to local storage.
    pub storage_prefix: String,
    /// File name of the local storage, relative to the app directory.
    pub storage_file: String,
    /// Default `env_logger` filter, `RUST_LOG` takes precedence.
    pub log_filter: String,
    pub window: WindowSettings,
    pub pricing: PricingSettings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    pub default_markup_percent: f64,
    pub currency: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_prefix: "jewelryCalc.".to_string(),
            storage_file: "local_storage.json".to_string(),
            log_filter: "warn".to_string(),
            window: WindowSettings::default(),
            pricing: PricingSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Jewelry Calculator".to_string(),
            width: 960,
            height: 720,
            resizable: false,
        }
    }
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            default_markup_percent: 30.0,
            currency: "USD".to_string(),
        }
    }
}

impl AppConfig {
    /// Loads the config at `path`.
    ///
    /// A missing file is created with defaults. A file that cannot be read or
    /// parsed is left alone and defaults are used for this run.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                log::warn!("Failed to write default config: {e:#}");
            }
            return config;
        }

        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Using default config: {e:#}");
                Self::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        serde_json::from_str(&json).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
    }

    /// Storage key holding the current user, e.g. `jewelryCalc.currentUser`.
    pub fn session_key(&self) -> String {
        crate::frontend::services::guard::session_key(&self.storage_prefix)
    }

    /// Local storage file, resolved against the config file's directory.
    pub fn storage_path(&self, config_path: &Path) -> PathBuf {
        config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(&self.storage_file)
    }
}
