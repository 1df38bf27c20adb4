//! Configuration for tidewatch-admin
//!
//! Stored as YAML in the user's config directory.
//! Default location: <config dir>/tidewatch/config.yaml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tidewatch_core::client::{HttpClient, MemoryClient, SharedBucketsClient, SharedLabelsClient};
use tidewatch_core::overlay::HIDE_DELAY;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Platform API connection
    pub api: ApiConfig,
    /// Overlay timing
    pub overlay: OverlaySettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            overlay: OverlaySettings::default(),
        }
    }
}

impl Config {
    pub fn validate(&mut self) {
        self.api.validate();
        self.overlay.validate();
    }
}

/// Buckets every organization starts with; seeds the in-memory backend
const SYSTEM_BUCKETS: [&str; 2] = ["_monitoring", "_tasks"];

/// Which client implementation backs the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// REST API at `api.url`
    #[default]
    Http,
    /// In-process store, nothing leaves the machine
    Memory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub backend: Backend,
    pub url: String,
    /// API token sent as `Authorization: Token <token>`
    pub token: Option<String>,
    pub org_id: String,
    /// Request timeout in seconds (1-120)
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            backend: Backend::Http,
            url: String::from("http://localhost:8086"),
            token: None,
            org_id: String::new(),
            timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    pub fn validate(&mut self) {
        self.timeout_secs = self.timeout_secs.clamp(1, 120);
        let trimmed = self.url.trim_end_matches('/');
        if trimmed.len() != self.url.len() {
            self.url = trimmed.to_string();
        }
        if self.token.as_deref().is_some_and(|t| t.trim().is_empty()) {
            self.token = None;
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the label and bucket clients for the configured backend
    pub fn clients(&self) -> (SharedLabelsClient, SharedBucketsClient) {
        match self.backend {
            Backend::Http => {
                log::info!("Using platform API at {}", self.url);
                let client = Arc::new(HttpClient::new(
                    self.url.clone(),
                    self.token.clone(),
                    self.timeout(),
                ));
                let labels: SharedLabelsClient = client.clone();
                let buckets: SharedBucketsClient = client;
                (labels, buckets)
            }
            Backend::Memory => {
                log::info!("Using in-memory backend");
                let buckets = SYSTEM_BUCKETS.iter().map(|b| b.to_string()).collect();
                let client = Arc::new(MemoryClient::with_data(Vec::new(), buckets));
                let labels: SharedLabelsClient = client.clone();
                let buckets: SharedBucketsClient = client;
                (labels, buckets)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlaySettings {
    /// Delay between hiding an overlay and unmounting its content (0-2000 ms)
    pub hide_delay_ms: u64,
}

impl Default for OverlaySettings {
    fn default() -> Self {
        Self {
            hide_delay_ms: HIDE_DELAY.as_millis() as u64,
        }
    }
}

impl OverlaySettings {
    pub fn validate(&mut self) {
        self.hide_delay_ms = self.hide_delay_ms.min(2000);
    }

    pub fn hide_delay(&self) -> Duration {
        Duration::from_millis(self.hide_delay_ms)
    }
}

/// Get the default config file path
///
/// Returns: <config dir>/tidewatch/config.yaml
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tidewatch")
        .join("config.yaml")
}

/// Load configuration from a YAML file
///
/// A missing or unreadable file yields the defaults.
pub fn load_config(path: &Path) -> Config {
    log::info!("load_config: Loading from {:?}", path);

    if !path.exists() {
        log::info!("load_config: Config file doesn't exist, using defaults");
        return Config::default();
    }

    match std::fs::read_to_string(path) {
        Ok(contents) => match serde_yaml::from_str::<Config>(&contents) {
            Ok(mut config) => {
                config.validate();
                log::info!(
                    "load_config: Loaded config - backend {:?}, hide delay {}ms",
                    config.api.backend,
                    config.overlay.hide_delay_ms
                );
                config
            }
            Err(e) => {
                log::warn!("load_config: Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            log::warn!("load_config: Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

/// Save configuration to a YAML file, creating parent directories
pub fn save_config(config: &Config, path: &Path) -> Result<()> {
    log::info!("save_config: Saving to {:?}", path);

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
    }

    let yaml = serde_yaml::to_string(config).context("Failed to serialize config to YAML")?;

    std::fs::write(path, yaml).with_context(|| format!("Failed to write config file: {:?}", path))?;

    log::info!("save_config: Config saved successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api.backend, Backend::Http);
        assert_eq!(config.overlay.hide_delay(), HIDE_DELAY);
    }

    #[test]
    fn test_validation_clamps_values() {
        let mut config = Config::default();
        config.api.timeout_secs = 0;
        config.api.url = "http://db:8086/".into();
        config.api.token = Some("  ".into());
        config.overlay.hide_delay_ms = 60_000;
        config.validate();

        assert_eq!(config.api.timeout_secs, 1);
        assert_eq!(config.api.url, "http://db:8086");
        assert_eq!(config.api.token, None);
        assert_eq!(config.overlay.hide_delay_ms, 2000);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: Config = serde_yaml::from_str("api:\n  backend: memory\n").unwrap();
        assert_eq!(config.api.backend, Backend::Memory);
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.overlay, OverlaySettings::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");

        let mut config = Config::default();
        config.api.org_id = "org-1".into();
        config.overlay.hide_delay_ms = 150;
        save_config(&config, &path).unwrap();

        assert_eq!(load_config(&path), config);
    }

    #[test]
    fn test_invalid_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "api: [not, a, map]").unwrap();

        assert_eq!(load_config(&path), Config::default());
    }
}
