//! Interface language selection, persisted in the local cache.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use sl_core::i18n::{keys, LANGUAGE_CACHE_KEY};
use sl_core::ports::{KeyValueCachePort, TranslationPort};
use sl_core::Locale;

use crate::errors::LanguageError;
use crate::usecases::messenger::Messenger;

/// Use case for switching the interface language.
pub struct ChangeLanguage {
    translation: Arc<dyn TranslationPort>,
    cache: Arc<dyn KeyValueCachePort>,
    messenger: Messenger,
}

impl ChangeLanguage {
    pub fn new(
        translation: Arc<dyn TranslationPort>,
        cache: Arc<dyn KeyValueCachePort>,
        messenger: Messenger,
    ) -> Self {
        Self {
            translation,
            cache,
            messenger,
        }
    }

    /// The choice is persisted before it is applied, so a failed write
    /// leaves the current language in place.
    #[tracing::instrument(name = "usecase.change_language.execute", skip(self), fields(locale = %locale))]
    pub async fn execute(&self, locale: Locale) -> Result<(), LanguageError> {
        if let Err(err) = self.cache.set(LANGUAGE_CACHE_KEY, locale.code()).await {
            error!(error = %err, "failed to persist language");
            self.messenger.error(keys::LANGUAGE_SAVE_FAILED).await;
            return Err(err.into());
        }

        self.translation.set_language(locale);
        info!("language changed");
        Ok(())
    }
}

/// Use case for applying the persisted language at startup.
pub struct RestoreLanguage {
    translation: Arc<dyn TranslationPort>,
    cache: Arc<dyn KeyValueCachePort>,
    fallback: Locale,
}

impl RestoreLanguage {
    pub fn new(
        translation: Arc<dyn TranslationPort>,
        cache: Arc<dyn KeyValueCachePort>,
        fallback: Locale,
    ) -> Self {
        Self {
            translation,
            cache,
            fallback,
        }
    }

    #[tracing::instrument(name = "usecase.restore_language.execute", skip(self))]
    pub async fn execute(&self) -> Locale {
        let locale = match self.cache.get(LANGUAGE_CACHE_KEY).await {
            Ok(Some(code)) => code.parse::<Locale>().unwrap_or_else(|err| {
                warn!(error = %err, "ignoring persisted language");
                self.fallback
            }),
            Ok(None) => self.fallback,
            Err(err) => {
                warn!(error = %err, "failed to read persisted language");
                self.fallback
            }
        };

        self.translation.set_language(locale);
        debug!(locale = %locale, "language restored");
        locale
    }
}
