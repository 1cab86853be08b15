// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Client configuration.
//!
//! Configuration is read from `config.toml` at `$SJN_CONFIG`, or
//! `<config dir>/sjn/config.toml`. Every field has a default, so a missing
//! file yields the default configuration:
//!
//! ```toml
//! base_url = "http://127.0.0.1:8000"
//! api_root = "/api"
//! timeout_secs = 10
//! autosave_delay_ms = 2000
//! notification_duration_ms = 3000
//!
//! [offline]
//! enabled = true
//! static_cache = "sj-notes-v1.1.0-beta"
//! api_cache = "sj-notes-api-v1"
//! precache = ["/", "/index.html", "/assets/index.css", "/assets/index.js", "/vite.svg"]
//! background_sync = false
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "sjn";
const CONFIG_FILE_NAME: &str = "config.toml";
const CACHE_DIR_NAME: &str = "cache";
const OUTBOX_FILE_NAME: &str = "outbox.jsonl";
const STATE_FILE_NAME: &str = "state.json";

/// Client configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server address, without the API root.
    pub base_url: String,
    /// Path prefix under which the REST API is served.
    pub api_root: String,
    pub timeout_secs: u64,
    /// Quiet period before an edit is auto-saved.
    pub autosave_delay_ms: u64,
    pub notification_duration_ms: u64,
    /// Where caches, the outbox and the tab state live. Defaults to the
    /// platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    pub offline: OfflineConfig,
}

/// Offline cache configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OfflineConfig {
    /// Route requests through the offline cache layer.
    pub enabled: bool,
    /// Name of the cache holding static assets.
    pub static_cache: String,
    /// Name of the cache holding API responses.
    pub api_cache: String,
    /// Static URLs (paths relative to `base_url`) stored when the cache is installed.
    pub precache: Vec<String>,
    /// Queue writes made while offline and replay them with `sjn sync`.
    pub background_sync: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: "http://127.0.0.1:8000".to_string(),
            api_root: "/api".to_string(),
            timeout_secs: 10,
            autosave_delay_ms: 2000,
            notification_duration_ms: 3000,
            data_dir: None,
            offline: OfflineConfig::default(),
        }
    }
}

impl Default for OfflineConfig {
    fn default() -> Self {
        OfflineConfig {
            enabled: true,
            static_cache: "sj-notes-v1.1.0-beta".to_string(),
            api_cache: "sj-notes-api-v1".to_string(),
            precache: ["/", "/index.html", "/assets/index.css", "/assets/index.js", "/vite.svg"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            background_sync: false,
        }
    }
}

impl Config {
    /// Loads configuration from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::Config(format!("failed to read config: {}", e))),
        };
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from its default location and applies
    /// environment overrides.
    pub fn load_default() -> Result<Self> {
        let mut config = Config::load(&config_path())?;
        config.apply_env();
        Ok(config)
    }

    /// Applies `SJN_DATA_DIR` and `SJN_BASE_URL`.
    pub fn apply_env(&mut self) {
        if let Some(dir) = env::data_dir() {
            self.data_dir = Some(dir);
        }
        if let Some(url) = env::base_url() {
            self.base_url = url;
        }
    }

    /// Saves configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(Error::Config(format!(
                "invalid base_url '{}': must start with http:// or https://",
                self.base_url
            )));
        }
        if !self.api_root.is_empty() && !self.api_root.starts_with('/') {
            return Err(Error::Config(format!(
                "invalid api_root '{}': must start with /",
                self.api_root
            )));
        }
        Ok(())
    }

    /// The base address every record request is built from.
    pub fn api_base(&self) -> String {
        format!(
            "{}{}",
            self.base_url.trim_end_matches('/'),
            self.api_root.trim_end_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn autosave_delay(&self) -> Duration {
        Duration::from_millis(self.autosave_delay_ms)
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    pub fn cache_dir(&self) -> PathBuf {
        self.data_dir().join(CACHE_DIR_NAME)
    }

    pub fn outbox_path(&self) -> PathBuf {
        self.data_dir().join(OUTBOX_FILE_NAME)
    }

    pub fn state_path(&self) -> PathBuf {
        self.data_dir().join(STATE_FILE_NAME)
    }
}

/// Path of the config file: `$SJN_CONFIG` or `<config dir>/sjn/config.toml`.
pub fn config_path() -> PathBuf {
    if let Some(path) = env::config_path() {
        return path;
    }
    dirs::config_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".sjn"))
        .join(CONFIG_FILE_NAME)
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join(APP_DIR_NAME))
        .unwrap_or_else(|| PathBuf::from(".sjn"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
