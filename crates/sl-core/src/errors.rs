//! Error taxonomy shared by ports and flows.

use thiserror::Error;

/// Empty required input, caught before any remote call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("required field is empty: {0}")]
    EmptyField(&'static str),
}

/// Broad classes of remote failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteErrorKind {
    InvalidCredential,
    UserNotFound,
    Unauthenticated,
    PermissionDenied,
    Network,
    InvalidResponse,
    Provider,
}

/// Failure reported by a remote collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind:?}: {message}")]
pub struct RemoteError {
    pub kind: RemoteErrorKind,
    /// Provider-specific code such as `auth/invalid-credential`.
    pub code: Option<String>,
    pub message: String,
}

impl RemoteError {
    pub fn new(kind: RemoteErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = Some(code.into());
        self
    }

    pub fn is_invalid_credential(&self) -> bool {
        self.kind == RemoteErrorKind::InvalidCredential
    }
}

/// Failure of the local durable cache.
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cache encoding error: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("cache backend error: {0}")]
    Backend(String),
}
