use crate::i18n::Locale;

/// Translation service: key lookup plus the process-wide language switch.
pub trait TranslationPort: Send + Sync {
    /// Localized text for `key` in the current language.
    fn translate(&self, key: &str) -> String;

    fn set_language(&self, locale: Locale);

    fn language(&self) -> Locale;
}
