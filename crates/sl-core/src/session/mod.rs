//! Session domain models.
//!
//! A session is local evidence that a user has authenticated before. It is
//! kept as opaque serialized identity data under [`SESSION_CACHE_KEY`]; the
//! presence of that key is the only "authenticated" signal.

mod state_machine;

use serde::{Deserialize, Serialize};

use crate::ids::UserId;

pub use state_machine::{SessionEvent, SessionStateMachine};

/// Local cache key holding the serialized user record.
pub const SESSION_CACHE_KEY: &str = "@user";

/// User record returned by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub uid: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

impl UserRecord {
    pub fn new(uid: impl Into<UserId>, email: Option<String>) -> Self {
        Self {
            uid: uid.into(),
            email,
            display_name: None,
            id_token: None,
            refresh_token: None,
        }
    }
}

/// Cached session payload.
///
/// The payload is treated as opaque text; [`Session::user`] is a best-effort
/// view used for logging and display only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    raw: String,
}

impl Session {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn from_user(user: &UserRecord) -> Result<Self, serde_json::Error> {
        Ok(Self {
            raw: serde_json::to_string(user)?,
        })
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn user(&self) -> Option<UserRecord> {
        serde_json::from_str(&self.raw).ok()
    }
}

/// Authentication state owned by the session manager.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, SessionState::Authenticated(_))
    }

    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Unauthenticated => None,
        }
    }
}
