// ABOUTME: Configuration for shipmate
// Optional UI tuning loaded from ~/.shipmate/config.toml

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_TICK_RATE_MS: u64 = 250;
const DEFAULT_COPY_FLASH_MS: u64 = 2000;

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick rate in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// How long the "copied" indicator stays visible, in milliseconds
    #[serde(default = "default_copy_flash_ms")]
    pub copy_flash_ms: u64,
}

fn default_tick_rate_ms() -> u64 {
    DEFAULT_TICK_RATE_MS
}

fn default_copy_flash_ms() -> u64 {
    DEFAULT_COPY_FLASH_MS
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            copy_flash_ms: DEFAULT_COPY_FLASH_MS,
        }
    }
}

impl UiConfig {
    /// Load from the user config file, falling back to defaults when the file
    /// is missing or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(content) = fs::read_to_string(&path) else {
            return Self::default();
        };
        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    /// Application home directory (`~/.shipmate`)
    pub fn app_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".shipmate"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::app_dir().map(|dir| dir.join("config.toml"))
    }
}
