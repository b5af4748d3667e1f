// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[server]` - Platform origin and request timeout
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Set `ICED_RECOVER_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_recover::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.general.language = Some("fr".to_string());
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Platform connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Origin of the platform (scheme + host), used for the reset request
    /// and the sign-up links.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Platform connection settings.
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// The effective platform origin.
    pub fn base_url(&self) -> &str {
        self.server.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// The effective request timeout in seconds.
    pub fn request_timeout_secs(&self) -> u64 {
        self.server
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(_) => {
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<Config>(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        save_to_path(config, &path)?;
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn default_config_uses_platform_origin() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.request_timeout_secs(), DEFAULT_REQUEST_TIMEOUT_SECS);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);

        let mut config = Config::default();
        config.general.language = Some("fr".to_string());
        config.server.base_url = Some("https://staging.example.org".to_string());

        save_to_path(&config, &path).expect("Failed to save config");
        let loaded = load_from_path(&path).expect("Failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[general]\nlanguage = \"fr\"\n").unwrap();
        assert_eq!(config.general.language.as_deref(), Some("fr"));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn theme_mode_accepts_mixed_case() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"Dark\"\n").unwrap();
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);
    }

    #[test]
    fn invalid_theme_mode_is_rejected() {
        let parsed = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(parsed.is_err());
    }

    #[test]
    fn corrupt_file_loads_defaults_with_warning() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "this is not toml [[[").unwrap();

        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn missing_file_loads_defaults_without_warning() {
        let dir = tempdir().expect("Failed to create temporary directory");
        let (config, warning) = load_with_override(Some(dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }
}
