//! # Configuration Loader
//!
//! Reads the TOML file and maps it onto the [`AppConfig`] DTO.
//!
//! No validation and no default values happen here. Whatever is in the file
//! is accepted; defaults are applied during wiring.

use std::path::{Path, PathBuf};

use anyhow::Context;
use sl_core::app_dirs::AppDirs;
use sl_core::config::AppConfig;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV: &str = "SHOPLIST_CONFIG";

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `SHOPLIST_CONFIG` when set, otherwise `config.toml` in the app data root.
pub fn resolve_config_path(app_dirs: &AppDirs) -> PathBuf {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => PathBuf::from(path),
        _ => app_dirs.config_path(),
    }
}
