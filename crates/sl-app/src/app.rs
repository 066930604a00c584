use std::sync::Arc;

use tracing::info;

use sl_core::item::DEFAULT_ITEMS_COLLECTION;
use sl_core::ports::TranslationPort;
use sl_core::Locale;

use crate::deps::AppDeps;
use crate::errors::LanguageError;
use crate::list_synchronizer::ListSynchronizer;
use crate::session_manager::SessionManager;
use crate::usecases::{ChangeLanguage, Messenger, RestoreLanguage};

/// Options that are not ports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub items_collection: String,
    pub default_locale: Locale,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            items_collection: DEFAULT_ITEMS_COLLECTION.to_string(),
            default_locale: Locale::default(),
        }
    }
}

/// The application runtime.
pub struct App {
    session: Arc<SessionManager>,
    list: ListSynchronizer,
    change_language: ChangeLanguage,
    restore_language: RestoreLanguage,
    translation: Arc<dyn TranslationPort>,
}

impl App {
    /// This constructor signature IS the dependency manifest.
    pub fn new(deps: AppDeps, options: AppOptions) -> Self {
        let session = Arc::new(SessionManager::from_deps(&deps));
        let list = ListSynchronizer::from_deps(&deps, options.items_collection, session.clone());
        let messenger = Messenger::new(deps.notifier.clone(), deps.translation.clone());

        Self {
            session,
            list,
            change_language: ChangeLanguage::new(
                deps.translation.clone(),
                deps.cache.clone(),
                messenger,
            ),
            restore_language: RestoreLanguage::new(
                deps.translation.clone(),
                deps.cache.clone(),
                options.default_locale,
            ),
            translation: deps.translation,
        }
    }

    /// Apply the persisted language and decide the initial session state.
    ///
    /// Returns whether a cached session was found.
    pub async fn start(&self) -> bool {
        let locale = self.restore_language.execute().await;
        let authenticated = self.session.restore_session().await;
        info!(locale = %locale, authenticated, "app started");
        authenticated
    }

    pub fn session(&self) -> &SessionManager {
        &self.session
    }

    pub fn list(&self) -> &ListSynchronizer {
        &self.list
    }

    pub fn translate(&self, key: &str) -> String {
        self.translation.translate(key)
    }

    pub fn language(&self) -> Locale {
        self.translation.language()
    }

    pub async fn change_language(&self, locale: Locale) -> Result<(), LanguageError> {
        self.change_language.execute(locale).await
    }
}
