//! Interactive console shell.
//!
//! Reads one command per line, dispatches it to the application and renders
//! the list screen whenever navigation enters it.

mod command;

use std::io;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, info};

use sl_app::App;
use sl_core::i18n::keys;
use sl_core::ports::NavigationPort;
use sl_core::{ListView, Route};
use sl_infra::identity::FirebaseIdentityClient;

use crate::adapters::{Console, RouteTracker};

pub use command::{Command, ParseError, HELP};

pub struct Shell {
    app: Arc<App>,
    console: Arc<Console>,
    routes: Arc<RouteTracker>,
    route_events: mpsc::UnboundedReceiver<Route>,
    hosted_identity: Option<Arc<FirebaseIdentityClient>>,
}

impl Shell {
    pub fn new(
        app: Arc<App>,
        console: Arc<Console>,
        routes: Arc<RouteTracker>,
        route_events: mpsc::UnboundedReceiver<Route>,
    ) -> Self {
        Self {
            app,
            console,
            routes,
            route_events,
            hosted_identity: None,
        }
    }

    /// Hosted identity client whose remembered token is dropped on sign-out.
    pub fn with_hosted_identity(mut self, identity: Option<Arc<FirebaseIdentityClient>>) -> Self {
        self.hosted_identity = identity;
        self
    }

    /// Run until `quit` or end of input.
    pub async fn run(mut self) -> io::Result<()> {
        self.console.write_line(HELP).await?;

        loop {
            self.handle_route_changes().await?;

            let label = format!("{} > ", self.routes.current());
            let Some(line) = self.console.prompt(&label).await? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            match Command::parse(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command).await?,
                Err(err) => self.console.write_line(&err.to_string()).await?,
            }
        }

        info!("shell exited");
        Ok(())
    }

    async fn execute(&self, command: Command) -> io::Result<()> {
        // Flow failures were already shown to the user as notices.
        let outcome = match command {
            Command::Login { email, password } => self
                .app
                .session()
                .sign_in(&email, &password)
                .await
                .map_err(|e| e.to_string()),
            Command::Reset { email } => self
                .app
                .session()
                .request_password_reset(&email)
                .await
                .map_err(|e| e.to_string()),
            Command::Logout => {
                let result = self.app.session().sign_out().await.map_err(|e| e.to_string());
                if result.is_ok() {
                    if let Some(identity) = &self.hosted_identity {
                        identity.forget().await;
                    }
                }
                result
            }
            Command::DeleteAccount => self
                .app
                .session()
                .delete_account()
                .await
                .map_err(|e| e.to_string()),
            Command::List => {
                let result = self.app.list().fetch_all().await.map_err(|e| e.to_string());
                if result.is_ok() {
                    self.render_list().await?;
                }
                result
            }
            Command::Add { title } => {
                if let Some(title) = title {
                    self.app.list().set_draft(title).await;
                }
                let result = self
                    .app
                    .list()
                    .submit_draft()
                    .await
                    .map(|_| ())
                    .map_err(|e| e.to_string());
                if result.is_ok() {
                    self.render_list().await?;
                }
                result
            }
            Command::Draft { title: Some(title) } => {
                self.app.list().set_draft(title).await;
                Ok(())
            }
            Command::Draft { title: None } => {
                let draft = self.app.list().draft().await;
                let line = if draft.is_empty() {
                    format!("({})", self.app.translate(keys::ITEM_PLACEHOLDER))
                } else {
                    draft
                };
                self.console.write_line(&line).await?;
                Ok(())
            }
            Command::Lang(locale) => {
                let result = self
                    .app
                    .change_language(locale)
                    .await
                    .map_err(|e| e.to_string());
                if result.is_ok() {
                    self.console
                        .write_line(&self.app.translate(keys::WELCOME))
                        .await?;
                }
                result
            }
            Command::ChangePassword => {
                self.routes.push(Route::ChangePassword);
                Ok(())
            }
            Command::Register => {
                self.routes.push(Route::Register);
                Ok(())
            }
            Command::Back => {
                self.routes.back();
                Ok(())
            }
            Command::Help => {
                self.console.write_line(HELP).await?;
                Ok(())
            }
            Command::Quit => Ok(()),
        };

        if let Err(error) = outcome {
            debug!(%error, "command failed");
        }
        Ok(())
    }

    async fn handle_route_changes(&mut self) -> io::Result<()> {
        while let Ok(route) = self.route_events.try_recv() {
            self.console.write_line(&format!("-> {route}")).await?;
            if route != Route::List {
                continue;
            }

            let header = format!(
                "{}  [{} | {} | {}]",
                self.app.translate(keys::WELCOME),
                self.app.translate(keys::LOGOUT),
                self.app.translate(keys::DELETE_ACCOUNT),
                self.app.translate(keys::CHANGE_PASSWORD),
            );
            self.console.write_line(&header).await?;

            if let Err(error) = self.app.list().fetch_all().await {
                debug!(%error, "list refresh on enter failed");
            }
            self.render_list().await?;
        }
        Ok(())
    }

    async fn render_list(&self) -> io::Result<()> {
        match self.app.list().view().await {
            ListView::Loading => self.console.write_line("...").await,
            ListView::Loaded(items) => {
                for item in items {
                    let mark = if item.is_checked { "x" } else { " " };
                    self.console
                        .write_line(&format!("[{mark}] {}", item.title))
                        .await?;
                }
                Ok(())
            }
        }
    }
}
