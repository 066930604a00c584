//! Application entry point used by `main`.

use std::sync::Arc;

use anyhow::Context;
use tracing::{info, warn};

use sl_app::App;
use sl_core::config::AppConfig;
use sl_core::ports::AppDirsPort;
use sl_infra::{DirsAppDirsAdapter, FirebaseIdentityClient};

use super::config::{load_config, resolve_config_path};
use super::tracing::init_tracing_subscriber;
use super::wiring::wire_dependencies;
use crate::adapters::Console;
use crate::shell::Shell;

/// Start logging, wire the services and run the shell until it exits.
pub async fn run_app() -> anyhow::Result<()> {
    let app_dirs = DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve application directories")?;

    init_tracing_subscriber(&app_dirs.logs_dir())
        .context("Failed to initialize tracing subscriber")?;

    let config_path = resolve_config_path(&app_dirs);
    let config = if config_path.exists() {
        load_config(&config_path)?
    } else {
        warn!(path = %config_path.display(), "config file not found, using defaults");
        AppConfig::empty()
    };

    let console = Arc::new(Console::stdio());
    let wiring = wire_dependencies(&config, &app_dirs, console.clone())?;
    let app = Arc::new(App::new(wiring.deps, wiring.options));

    if app.start().await {
        if let Some(identity) = &wiring.hosted_identity {
            resume_hosted_identity(&app, identity).await;
        }
    }

    info!(mode = ?wiring.mode, "shell starting");
    Shell::new(app, console, wiring.routes, wiring.route_events)
        .with_hosted_identity(wiring.hosted_identity)
        .run()
        .await
        .context("Console I/O failed")
}

/// Hand the cached user back to the identity client so token-bearing calls
/// work after a restart.
async fn resume_hosted_identity(app: &App, identity: &FirebaseIdentityClient) {
    let user = app.session().session().await.and_then(|s| s.user());
    match user {
        Some(user) if user.id_token.is_some() => identity.resume(user).await,
        Some(user) => warn!(uid = %user.uid, "cached session has no token, remote calls need a new sign-in"),
        None => warn!("cached session is not a readable user record"),
    }
}
