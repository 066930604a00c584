//! Built-in translation catalog.

mod catalog;

use std::sync::RwLock;

use tracing::debug;

use sl_core::ports::TranslationPort;
use sl_core::Locale;

/// Translator over the compiled-in pt/en/es catalog.
///
/// Unknown keys are returned unchanged.
pub struct StaticTranslator {
    locale: RwLock<Locale>,
}

impl StaticTranslator {
    pub fn new(locale: Locale) -> Self {
        Self {
            locale: RwLock::new(locale),
        }
    }
}

impl Default for StaticTranslator {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

impl TranslationPort for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        catalog::lookup(self.language(), key)
            .map(str::to_string)
            .unwrap_or_else(|| key.to_string())
    }

    fn set_language(&self, locale: Locale) {
        let mut current = self.locale.write().unwrap_or_else(|e| e.into_inner());
        *current = locale;
        debug!(locale = %locale, "translator language set");
    }

    fn language(&self) -> Locale {
        *self.locale.read().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sl_core::i18n::keys;

    const ALL_KEYS: &[&str] = &[
        keys::WELCOME,
        keys::LOGOUT,
        keys::DELETE_ACCOUNT,
        keys::CHANGE_PASSWORD,
        keys::CANCEL,
        keys::DELETE,
        keys::ATTENTION,
        keys::ERROR,
        keys::SUCCESS,
        keys::FILL_ALL_FIELDS,
        keys::INVALID_CREDENTIALS,
        keys::SIGN_IN_FAILED,
        keys::ENTER_EMAIL_FOR_RESET,
        keys::RESET_EMAIL_SENT,
        keys::RESET_EMAIL_FAILED,
        keys::CONFIRM_DELETE_TITLE,
        keys::CONFIRM_DELETE_MESSAGE,
        keys::ACCOUNT_DELETED_TITLE,
        keys::ACCOUNT_DELETED,
        keys::NO_USER_SIGNED_IN,
        keys::DELETE_ACCOUNT_FAILED,
        keys::ITEM_SAVED,
        keys::ITEM_SAVE_FAILED,
        keys::ITEMS_LOAD_FAILED,
        keys::ITEM_PLACEHOLDER,
        keys::SESSION_REQUIRED,
        keys::SIGN_OUT_FAILED,
        keys::LANGUAGE_SAVE_FAILED,
    ];

    #[test]
    fn every_key_is_translated_in_every_language() {
        for locale in Locale::ALL {
            for key in ALL_KEYS {
                assert!(
                    catalog::lookup(locale, key).is_some(),
                    "{key} missing for {locale}"
                );
            }
        }
    }

    #[test]
    fn switching_language_changes_output() {
        let translator = StaticTranslator::default();
        assert_eq!(translator.translate(keys::WELCOME), "Bem-vindo");

        translator.set_language(Locale::En);
        assert_eq!(translator.language(), Locale::En);
        assert_eq!(translator.translate(keys::WELCOME), "Welcome");
    }

    #[test]
    fn unknown_key_echoes_key() {
        let translator = StaticTranslator::new(Locale::Es);
        assert_eq!(translator.translate("no.such.key"), "no.such.key");
    }
}
