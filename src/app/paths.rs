// SPDX-License-Identifier: MPL-2.0
//! Centralized path management for application directories.
//!
//! Paths are resolved in the following priority order:
//! 1. **Explicit override** - parameter to `_with_override()` functions (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_overrides`]
//! 3. **Environment variable** (`ICED_RECOVER_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate
//!
//! CLI overrides should be initialized once at startup, before any path
//! resolution function is called.

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "IcedRecover";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_RECOVER_CONFIG_DIR";

/// Global CLI override for config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Initializes the CLI override for the config directory.
///
/// # Panics
///
/// Panics if called more than once (OnceLock can only be set once).
pub fn init_cli_overrides(config_dir: Option<String>) {
    CLI_CONFIG_DIR
        .set(config_dir.map(PathBuf::from))
        .expect("CLI config dir override already initialized");
}

/// Returns the CLI override for config directory, if set.
fn get_cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the application config directory path.
///
/// This directory stores user preferences (`settings.toml`).
pub fn get_app_config_dir() -> Option<PathBuf> {
    get_app_config_dir_with_override(None)
}

/// Returns the application config directory path with an optional override.
///
/// # Arguments
///
/// * `override_path` - Optional path to use instead of default. Takes highest priority.
pub fn get_app_config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    // Priority 1: Explicit override (for tests)
    if let Some(path) = override_path {
        return Some(path);
    }

    // Priority 2: CLI argument
    if let Some(path) = get_cli_config_dir() {
        return Some(path);
    }

    // Priority 3: Environment variable
    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    // Priority 4: Platform default with app name
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}
