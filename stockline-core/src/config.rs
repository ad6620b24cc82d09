//! Configuration management
//!
//! Settings live in `settings.json` inside the stockline directory:
//! ```json
//! {
//!   "app": { "historyLimit": 500, "defaultUser": "user_abc" }
//! }
//! ```
//! Fields the core doesn't manage are preserved when saving.

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::services::DEFAULT_HISTORY_LIMIT;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default = "default_history_limit")]
    history_limit: usize,
    #[serde(default)]
    default_user: Option<String>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_user: None,
            other: HashMap::new(),
        }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}

/// Stockline configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    /// Retention cap for the per-user transaction history
    pub history_limit: usize,
    /// User id assumed when no identity is supplied by the environment
    pub default_user: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            default_user: None,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the stockline directory
    pub fn load(stockline_dir: &Path) -> Result<Self> {
        let settings_path = stockline_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        Ok(Self {
            history_limit: raw.app.history_limit.max(1),
            default_user: raw.app.default_user.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the stockline directory
    ///
    /// Preserves settings the core doesn't manage.
    pub fn save(&self, stockline_dir: &Path) -> Result<()> {
        let settings_path = stockline_dir.join("settings.json");

        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.history_limit = self.history_limit;
        settings.app.default_user = self.default_user.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }
}
