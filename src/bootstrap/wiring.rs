//! # Dependency Wiring
//!
//! Turns the config DTO into concrete adapters grouped as [`AppDeps`].
//! This is the only place where defaults are applied to configuration facts.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{info, warn};

use sl_app::{AppDeps, AppOptions};
use sl_core::app_dirs::AppDirs;
use sl_core::config::AppConfig;
use sl_core::item::DEFAULT_ITEMS_COLLECTION;
use sl_core::ports::{DocumentStorePort, IdentityPort};
use sl_core::{Locale, Route};
use sl_infra::http::build_client;
use sl_infra::{
    FileKeyValueCache, FirebaseIdentityClient, FirestoreDocumentStore, InMemoryDocumentStore,
    InMemoryIdentity, StaticTranslator,
};

use crate::adapters::{Console, ConsoleConfirmation, ConsoleNotifier, RouteTracker};

/// Which remote services back the identity and document ports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// The hosted REST services named by the config.
    Hosted,
    /// Process-local stand-ins, used when no API key is configured.
    Local,
}

pub fn backend_mode(config: &AppConfig) -> BackendMode {
    if config.api_key.is_empty() || config.project_id.is_empty() {
        BackendMode::Local
    } else {
        BackendMode::Hosted
    }
}

pub fn resolve_cache_path(config: &AppConfig, app_dirs: &AppDirs) -> PathBuf {
    if config.cache_path.as_os_str().is_empty() {
        app_dirs.cache_path()
    } else {
        config.cache_path.clone()
    }
}

pub fn resolve_options(config: &AppConfig) -> AppOptions {
    let items_collection = if config.items_collection.is_empty() {
        DEFAULT_ITEMS_COLLECTION.to_string()
    } else {
        config.items_collection.clone()
    };

    let default_locale = if config.default_language.is_empty() {
        Locale::default()
    } else {
        config.default_language.parse().unwrap_or_else(|err| {
            warn!(error = %err, "ignoring configured default language");
            Locale::default()
        })
    };

    AppOptions {
        items_collection,
        default_locale,
    }
}

/// Everything the shell needs besides the application itself.
pub struct Wiring {
    pub deps: AppDeps,
    pub options: AppOptions,
    pub routes: Arc<RouteTracker>,
    pub route_events: mpsc::UnboundedReceiver<Route>,
    /// Present in hosted mode so a restored session can be resumed.
    pub hosted_identity: Option<Arc<FirebaseIdentityClient>>,
    pub mode: BackendMode,
}

pub fn wire_dependencies(
    config: &AppConfig,
    app_dirs: &AppDirs,
    console: Arc<Console>,
) -> anyhow::Result<Wiring> {
    let mode = backend_mode(config);
    let options = resolve_options(config);

    let (identity, document_store, hosted_identity): (
        Arc<dyn IdentityPort>,
        Arc<dyn DocumentStorePort>,
        Option<Arc<FirebaseIdentityClient>>,
    ) = match mode {
        BackendMode::Hosted => {
            let client = build_client(config.request_timeout_secs)
                .context("Failed to create backend http client")?;
            let identity = Arc::new(FirebaseIdentityClient::new(
                client.clone(),
                &config.identity_endpoint,
                config.api_key.clone(),
            ));
            let store: Arc<dyn DocumentStorePort> = Arc::new(FirestoreDocumentStore::new(
                client,
                &config.firestore_endpoint,
                config.project_id.clone(),
                config.api_key.clone(),
                identity.clone(),
            ));
            let identity_port: Arc<dyn IdentityPort> = identity.clone();
            (identity_port, store, Some(identity))
        }
        BackendMode::Local => {
            warn!("no backend credentials configured, using in-memory services");
            let identity_port: Arc<dyn IdentityPort> = Arc::new(InMemoryIdentity::new());
            let store: Arc<dyn DocumentStorePort> = Arc::new(InMemoryDocumentStore::new());
            (identity_port, store, None)
        }
    };

    let cache_path = resolve_cache_path(config, app_dirs);
    let (routes, route_events) = RouteTracker::new();
    let routes = Arc::new(routes);

    info!(
        ?mode,
        cache_path = %cache_path.display(),
        collection = %options.items_collection,
        "dependencies wired"
    );

    let deps = AppDeps {
        identity,
        document_store,
        cache: Arc::new(FileKeyValueCache::new(cache_path)),
        navigation: routes.clone(),
        translation: Arc::new(StaticTranslator::new(options.default_locale)),
        notifier: Arc::new(ConsoleNotifier::new(console.clone())),
        confirmation: Arc::new(ConsoleConfirmation::new(console)),
    };

    Ok(Wiring {
        deps,
        options,
        routes,
        route_events,
        hosted_identity,
        mode,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_dirs() -> AppDirs {
        AppDirs {
            app_data_root: PathBuf::from("/tmp/shoplist"),
        }
    }

    #[test]
    fn empty_config_gets_defaults() {
        let config = AppConfig::empty();

        assert_eq!(backend_mode(&config), BackendMode::Local);
        assert_eq!(
            resolve_cache_path(&config, &app_dirs()),
            PathBuf::from("/tmp/shoplist/cache.json")
        );
        assert_eq!(resolve_options(&config), AppOptions::default());
    }

    #[test]
    fn configured_values_win_over_defaults() {
        let config = AppConfig {
            api_key: "k".into(),
            project_id: "p".into(),
            items_collection: "groceries".into(),
            default_language: "EN".into(),
            cache_path: PathBuf::from("/var/cache.json"),
            ..AppConfig::empty()
        };

        assert_eq!(backend_mode(&config), BackendMode::Hosted);
        assert_eq!(
            resolve_cache_path(&config, &app_dirs()),
            PathBuf::from("/var/cache.json")
        );
        let options = resolve_options(&config);
        assert_eq!(options.items_collection, "groceries");
        assert_eq!(options.default_locale, Locale::En);
    }

    #[test]
    fn unsupported_language_falls_back() {
        let config = AppConfig {
            default_language: "fr".into(),
            ..AppConfig::empty()
        };
        assert_eq!(resolve_options(&config).default_locale, Locale::Pt);
    }

    #[tokio::test]
    async fn hosted_config_wires_remote_clients() {
        let config = AppConfig {
            api_key: "k".into(),
            project_id: "p".into(),
            ..AppConfig::empty()
        };
        let console = Arc::new(Console::new(std::io::Cursor::new(Vec::new()), tokio::io::sink()));

        let wiring = wire_dependencies(&config, &app_dirs(), console).unwrap();

        assert_eq!(wiring.mode, BackendMode::Hosted);
        assert!(wiring.hosted_identity.is_some());
    }
}
