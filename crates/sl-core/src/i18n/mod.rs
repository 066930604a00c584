//! Locale selection and translation keys.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Local cache key holding the selected language code.
pub const LANGUAGE_CACHE_KEY: &str = "@language";

/// Supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Pt,
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::Pt, Locale::En, Locale::Es];

    pub fn code(&self) -> &'static str {
        match self {
            Locale::Pt => "pt",
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language code: {0}")]
pub struct UnsupportedLocale(pub String);

impl FromStr for Locale {
    type Err = UnsupportedLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pt" => Ok(Locale::Pt),
            "en" => Ok(Locale::En),
            "es" => Ok(Locale::Es),
            other => Err(UnsupportedLocale(other.to_string())),
        }
    }
}

/// Translation keys used by the flows and the shell.
pub mod keys {
    pub const WELCOME: &str = "welcome";
    pub const LOGOUT: &str = "logout";
    pub const DELETE_ACCOUNT: &str = "deleteAccount";
    pub const CHANGE_PASSWORD: &str = "changePass";
    pub const CANCEL: &str = "cancel";
    pub const DELETE: &str = "delete";

    pub const ATTENTION: &str = "attention";
    pub const ERROR: &str = "error";
    pub const SUCCESS: &str = "success";

    pub const FILL_ALL_FIELDS: &str = "fillAllFields";
    pub const INVALID_CREDENTIALS: &str = "invalidCredentials";
    pub const SIGN_IN_FAILED: &str = "signInFailed";

    pub const ENTER_EMAIL_FOR_RESET: &str = "enterEmailForReset";
    pub const RESET_EMAIL_SENT: &str = "resetEmailSent";
    pub const RESET_EMAIL_FAILED: &str = "resetEmailFailed";

    pub const CONFIRM_DELETE_TITLE: &str = "confirmDeleteTitle";
    pub const CONFIRM_DELETE_MESSAGE: &str = "confirmDeleteMessage";
    pub const ACCOUNT_DELETED_TITLE: &str = "accountDeletedTitle";
    pub const ACCOUNT_DELETED: &str = "accountDeleted";
    pub const NO_USER_SIGNED_IN: &str = "noUserSignedIn";
    pub const DELETE_ACCOUNT_FAILED: &str = "deleteAccountFailed";

    pub const ITEM_SAVED: &str = "itemSaved";
    pub const ITEM_SAVE_FAILED: &str = "itemSaveFailed";
    pub const ITEMS_LOAD_FAILED: &str = "itemsLoadFailed";
    pub const ITEM_PLACEHOLDER: &str = "itemPlaceholder";
    pub const SESSION_REQUIRED: &str = "sessionRequired";
    pub const SIGN_OUT_FAILED: &str = "signOutFailed";
    pub const LANGUAGE_SAVE_FAILED: &str = "languageSaveFailed";
}
