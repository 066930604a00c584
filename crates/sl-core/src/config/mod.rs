//! # Configuration DTO
//!
//! Pure data: TOML is mapped onto [`AppConfig`] without validation or
//! default-value policy. Missing keys become empty strings or zero, which
//! are valid facts. Defaults are applied by the wiring layer.

use std::path::PathBuf;

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Backend web API key (may be empty)
    pub api_key: String,

    /// Backend project identifier (may be empty)
    pub project_id: String,

    /// Identity REST base URL; empty means "use the provider default"
    pub identity_endpoint: String,

    /// Document store REST base URL; empty means "use the provider default"
    pub firestore_endpoint: String,

    /// Collection holding the shopping-list items
    pub items_collection: String,

    /// HTTP request timeout in seconds; 0 means "not configured"
    pub request_timeout_secs: u64,

    /// Local cache file path (path info only, no existence check)
    pub cache_path: PathBuf,

    /// Fallback language code (may be empty or unsupported)
    pub default_language: String,
}

fn str_at<'a>(value: &'a toml::Value, section: &str, key: &str) -> &'a str {
    value
        .get(section)
        .and_then(|s| s.get(key))
        .and_then(|v| v.as_str())
        .unwrap_or("")
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// This method must NOT contain any validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        Ok(Self {
            api_key: str_at(toml_value, "backend", "api_key").to_string(),
            project_id: str_at(toml_value, "backend", "project_id").to_string(),
            identity_endpoint: str_at(toml_value, "backend", "identity_endpoint").to_string(),
            firestore_endpoint: str_at(toml_value, "backend", "firestore_endpoint").to_string(),
            items_collection: str_at(toml_value, "backend", "items_collection").to_string(),
            request_timeout_secs: toml_value
                .get("backend")
                .and_then(|b| b.get("request_timeout_secs"))
                .and_then(|v| v.as_integer())
                .unwrap_or(0)
                .max(0) as u64,
            cache_path: PathBuf::from(str_at(toml_value, "storage", "cache_path")),
            default_language: str_at(toml_value, "i18n", "default_language").to_string(),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            api_key: String::new(),
            project_id: String::new(),
            identity_endpoint: String::new(),
            firestore_endpoint: String::new(),
            items_collection: String::new(),
            request_timeout_secs: 0,
            cache_path: PathBuf::new(),
            default_language: String::new(),
        }
    }

    /// Create AppConfig with system-default paths for production use
    ///
    /// The base directory should be computed by the caller (e.g. with `dirs`).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            cache_path: data_dir.join("cache.json"),
            ..Self::empty()
        }
    }
}
