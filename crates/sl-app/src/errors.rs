use sl_core::{CacheError, RemoteError, ValidationError};

/// Errors produced by the session flows.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("remote identity call failed: {0}")]
    Remote(#[from] RemoteError),
    #[error("session cache failed: {0}")]
    Cache(#[from] CacheError),
    #[error("encode user record failed: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("no user is signed in on the identity service")]
    NoCurrentUser,
    #[error("cancelled by user")]
    Cancelled,
}

/// Errors produced by the list flows.
#[derive(Debug, thiserror::Error)]
pub enum ListError {
    #[error("an authenticated session is required")]
    Unauthenticated,
    #[error("the session changed before the list was updated")]
    SessionChanged,
    #[error("remote store call failed: {0}")]
    Remote(#[from] RemoteError),
}

/// Errors produced by the language flows.
#[derive(Debug, thiserror::Error)]
pub enum LanguageError {
    #[error("language cache failed: {0}")]
    Cache(#[from] CacheError),
}
