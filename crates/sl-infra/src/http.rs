//! Shared HTTP plumbing for the hosted backend clients.

use std::time::Duration;

use anyhow::Context;
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use sl_core::{RemoteError, RemoteErrorKind};

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 15;

/// Build the client shared by every backend adapter.
///
/// A zero timeout falls back to [`DEFAULT_REQUEST_TIMEOUT_SECS`].
pub fn build_client(timeout_secs: u64) -> anyhow::Result<Client> {
    let timeout = if timeout_secs == 0 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    } else {
        timeout_secs
    };

    Client::builder()
        .timeout(Duration::from_secs(timeout))
        .build()
        .context("build http client failed")
}

pub(crate) fn transport_error(err: reqwest::Error) -> RemoteError {
    RemoteError::new(RemoteErrorKind::Network, err.to_string())
}

pub(crate) fn decode_error(err: reqwest::Error) -> RemoteError {
    RemoteError::new(RemoteErrorKind::InvalidResponse, err.to_string())
}

/// Google REST error envelope: `{"error": {"code": 400, "message": "...", "status": "..."}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: Option<String>,
}

/// Provider message and status extracted from a failed response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProviderFailure {
    pub status: StatusCode,
    /// Leading token of the provider message, e.g. `INVALID_PASSWORD`.
    pub reason: String,
    pub message: String,
    pub rpc_status: Option<String>,
}

impl ProviderFailure {
    pub(crate) async fn from_response(response: Response) -> Self {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Self::from_body(status, &body)
    }

    pub(crate) fn from_body(status: StatusCode, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(envelope) => {
                // Messages look like "INVALID_PASSWORD : optional detail".
                let reason = envelope
                    .error
                    .message
                    .split(" : ")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();
                Self {
                    status,
                    reason,
                    message: envelope.error.message,
                    rpc_status: envelope.error.status,
                }
            }
            Err(_) => Self {
                status,
                reason: String::new(),
                message: body.to_string(),
                rpc_status: None,
            },
        }
    }

    pub(crate) fn status_kind(&self) -> RemoteErrorKind {
        match self.status {
            StatusCode::UNAUTHORIZED => RemoteErrorKind::Unauthenticated,
            StatusCode::FORBIDDEN => RemoteErrorKind::PermissionDenied,
            StatusCode::NOT_FOUND => RemoteErrorKind::UserNotFound,
            s if s.is_server_error() => RemoteErrorKind::Network,
            _ => RemoteErrorKind::Provider,
        }
    }
}
