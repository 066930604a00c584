use std::sync::Arc;

use tracing::{error, info, warn};

use sl_core::i18n::keys;
use sl_core::ports::{IdentityPort, KeyValueCachePort};
use sl_core::session::{Session, SESSION_CACHE_KEY};
use sl_core::ValidationError;

use crate::errors::SessionError;
use crate::usecases::messenger::Messenger;

/// Use case for email/password sign-in.
///
/// Empty input never reaches the identity service. A successful sign-in is
/// only reported back once the user record is in the local cache.
pub struct SignIn {
    identity: Arc<dyn IdentityPort>,
    cache: Arc<dyn KeyValueCachePort>,
    messenger: Messenger,
}

impl SignIn {
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        cache: Arc<dyn KeyValueCachePort>,
        messenger: Messenger,
    ) -> Self {
        Self {
            identity,
            cache,
            messenger,
        }
    }

    #[tracing::instrument(name = "usecase.sign_in.execute", skip_all)]
    pub async fn execute(&self, email: &str, password: &str) -> Result<Session, SessionError> {
        let missing = if email.is_empty() {
            Some("email")
        } else if password.is_empty() {
            Some("password")
        } else {
            None
        };
        if let Some(field) = missing {
            self.messenger.info(keys::FILL_ALL_FIELDS).await;
            return Err(ValidationError::EmptyField(field).into());
        }

        let user = match self.identity.sign_in(email, password).await {
            Ok(user) => user,
            Err(err) => {
                warn!(
                    kind = ?err.kind,
                    code = err.code.as_deref().unwrap_or("-"),
                    message = %err.message,
                    "sign-in rejected by identity service"
                );
                let message_key = if err.is_invalid_credential() {
                    keys::INVALID_CREDENTIALS
                } else {
                    keys::SIGN_IN_FAILED
                };
                self.messenger.error(message_key).await;
                return Err(err.into());
            }
        };

        let session = match Session::from_user(&user) {
            Ok(session) => session,
            Err(err) => {
                error!(error = %err, "failed to encode user record");
                self.messenger.error(keys::SIGN_IN_FAILED).await;
                return Err(err.into());
            }
        };

        if let Err(err) = self.cache.set(SESSION_CACHE_KEY, session.raw()).await {
            error!(error = %err, "failed to cache session after sign-in");
            self.messenger.error(keys::SIGN_IN_FAILED).await;
            return Err(err.into());
        }

        info!(uid = %user.uid, "signed in");
        Ok(session)
    }
}
