//! Hosted identity service client (Identity Toolkit REST API).

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use sl_core::ports::IdentityPort;
use sl_core::{RemoteError, RemoteErrorKind, UserRecord};

use crate::http::{decode_error, transport_error, ProviderFailure};

pub const DEFAULT_IDENTITY_ENDPOINT: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    local_id: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    display_name: Option<String>,
    #[serde(default)]
    id_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

impl From<SignInResponse> for UserRecord {
    fn from(response: SignInResponse) -> Self {
        let mut user = UserRecord::new(response.local_id, response.email);
        user.display_name = response.display_name.filter(|name| !name.is_empty());
        user.id_token = response.id_token;
        user.refresh_token = response.refresh_token;
        user
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct OobCodeRequest<'a> {
    request_type: &'static str,
    email: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteAccountRequest<'a> {
    id_token: &'a str,
}

/// Map an Identity Toolkit failure onto the shared error taxonomy.
///
/// The `auth/...` codes mirror the ones the provider's client SDKs report.
fn map_identity_failure(failure: &ProviderFailure) -> RemoteError {
    let (kind, code) = match failure.reason.as_str() {
        "INVALID_LOGIN_CREDENTIALS" | "INVALID_PASSWORD" => {
            (RemoteErrorKind::InvalidCredential, Some("auth/invalid-credential"))
        }
        "EMAIL_NOT_FOUND" => (RemoteErrorKind::UserNotFound, Some("auth/user-not-found")),
        "INVALID_EMAIL" => (RemoteErrorKind::Provider, Some("auth/invalid-email")),
        "MISSING_PASSWORD" => (RemoteErrorKind::Provider, Some("auth/missing-password")),
        "USER_DISABLED" => (RemoteErrorKind::PermissionDenied, Some("auth/user-disabled")),
        "TOO_MANY_ATTEMPTS_TRY_LATER" => {
            (RemoteErrorKind::Provider, Some("auth/too-many-requests"))
        }
        "CREDENTIAL_TOO_OLD_LOGIN_AGAIN" => {
            (RemoteErrorKind::Unauthenticated, Some("auth/requires-recent-login"))
        }
        "INVALID_ID_TOKEN" => (RemoteErrorKind::Unauthenticated, Some("auth/invalid-user-token")),
        "TOKEN_EXPIRED" => (RemoteErrorKind::Unauthenticated, Some("auth/user-token-expired")),
        "USER_NOT_FOUND" => (RemoteErrorKind::UserNotFound, Some("auth/user-not-found")),
        _ => (failure.status_kind(), None),
    };

    let err = RemoteError::new(kind, failure.message.clone());
    match code {
        Some(code) => err.with_code(code),
        None => err,
    }
}

pub struct FirebaseIdentityClient {
    client: Client,
    endpoint: String,
    api_key: String,
    current: RwLock<Option<UserRecord>>,
}

impl FirebaseIdentityClient {
    /// An empty `endpoint` selects [`DEFAULT_IDENTITY_ENDPOINT`].
    pub fn new(client: Client, endpoint: &str, api_key: impl Into<String>) -> Self {
        let endpoint = if endpoint.is_empty() {
            DEFAULT_IDENTITY_ENDPOINT
        } else {
            endpoint
        };
        Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            current: RwLock::new(None),
        }
    }

    /// Adopt a previously signed-in user, e.g. one restored from the local cache.
    pub async fn resume(&self, user: UserRecord) {
        debug!(uid = %user.uid, "identity resumed from cached user");
        *self.current.write().await = Some(user);
    }

    /// Drop the remembered user and its token after a local sign-out.
    pub async fn forget(&self) {
        if self.current.write().await.take().is_some() {
            debug!("identity forgot signed-out user");
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/accounts:{}", self.endpoint, method)
    }

    async fn post<B: Serialize + ?Sized>(
        &self,
        method: &str,
        body: &B,
    ) -> Result<reqwest::Response, RemoteError> {
        let response = self
            .client
            .post(self.url(method))
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .await
            .map_err(transport_error)?;

        if !response.status().is_success() {
            let failure = ProviderFailure::from_response(response).await;
            let err = map_identity_failure(&failure);
            warn!(
                method,
                status = %failure.status,
                reason = %failure.reason,
                code = ?err.code,
                "identity request rejected"
            );
            return Err(err);
        }
        Ok(response)
    }
}

#[async_trait]
impl IdentityPort for FirebaseIdentityClient {
    async fn sign_in(&self, email: &str, password: &str) -> Result<UserRecord, RemoteError> {
        let request = SignInRequest {
            email,
            password,
            return_secure_token: true,
        };
        let response: SignInResponse = self
            .post("signInWithPassword", &request)
            .await?
            .json()
            .await
            .map_err(decode_error)?;

        let user = UserRecord::from(response);
        info!(uid = %user.uid, "identity sign-in succeeded");
        *self.current.write().await = Some(user.clone());
        Ok(user)
    }

    async fn send_password_reset(&self, email: &str) -> Result<(), RemoteError> {
        let request = OobCodeRequest {
            request_type: "PASSWORD_RESET",
            email,
        };
        self.post("sendOobCode", &request).await?;
        info!("password reset email requested");
        Ok(())
    }

    async fn delete_current_user(&self) -> Result<(), RemoteError> {
        let user = self.current.read().await.clone().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::Unauthenticated, "no user is signed in")
                .with_code("auth/no-current-user")
        })?;
        let id_token = user.id_token.as_deref().ok_or_else(|| {
            RemoteError::new(RemoteErrorKind::Unauthenticated, "signed-in user has no id token")
                .with_code("auth/invalid-user-token")
        })?;

        self.post("delete", &DeleteAccountRequest { id_token }).await?;
        info!(uid = %user.uid, "identity account deleted");
        *self.current.write().await = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<UserRecord> {
        self.current.read().await.clone()
    }
}
