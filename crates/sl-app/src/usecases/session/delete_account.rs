use std::sync::Arc;

use tracing::{error, info, warn};

use sl_core::i18n::keys;
use sl_core::ports::{ConfirmationPort, IdentityPort, KeyValueCachePort};
use sl_core::session::SESSION_CACHE_KEY;
use sl_core::ConfirmRequest;

use crate::errors::SessionError;
use crate::usecases::messenger::Messenger;

/// Use case for deleting the signed-in account.
///
/// Order matters: the remote identity is deleted first and the cached session
/// is only cleared once that succeeded. Failures before the remote deletion
/// leave everything as it was; once the remote account is gone the flow
/// reports success even if the cache entry could not be removed.
pub struct DeleteAccount {
    identity: Arc<dyn IdentityPort>,
    cache: Arc<dyn KeyValueCachePort>,
    confirmation: Arc<dyn ConfirmationPort>,
    messenger: Messenger,
}

impl DeleteAccount {
    pub fn new(
        identity: Arc<dyn IdentityPort>,
        cache: Arc<dyn KeyValueCachePort>,
        confirmation: Arc<dyn ConfirmationPort>,
        messenger: Messenger,
    ) -> Self {
        Self {
            identity,
            cache,
            confirmation,
            messenger,
        }
    }

    fn confirm_request(&self) -> ConfirmRequest {
        ConfirmRequest {
            title: self.messenger.translate(keys::CONFIRM_DELETE_TITLE),
            message: self.messenger.translate(keys::CONFIRM_DELETE_MESSAGE),
            confirm_label: self.messenger.translate(keys::DELETE),
            cancel_label: self.messenger.translate(keys::CANCEL),
            destructive: true,
        }
    }

    #[tracing::instrument(name = "usecase.delete_account.execute", skip_all)]
    pub async fn execute(&self) -> Result<(), SessionError> {
        if !self.confirmation.confirm(self.confirm_request()).await {
            info!("account deletion cancelled by user");
            return Err(SessionError::Cancelled);
        }

        let Some(user) = self.identity.current_user().await else {
            warn!("account deletion confirmed but no user is signed in remotely");
            self.messenger.error(keys::NO_USER_SIGNED_IN).await;
            return Err(SessionError::NoCurrentUser);
        };

        if let Err(err) = self.identity.delete_current_user().await {
            error!(
                uid = %user.uid,
                kind = ?err.kind,
                message = %err.message,
                "failed to delete remote account"
            );
            self.messenger.error(keys::DELETE_ACCOUNT_FAILED).await;
            return Err(err.into());
        }

        // The remote deletion is the commit point. A stale cache entry can
        // only be logged; the account it names no longer exists.
        if let Err(err) = self.cache.delete(SESSION_CACHE_KEY).await {
            error!(uid = %user.uid, error = %err, "remote account deleted but cached session not removed");
        }

        info!(uid = %user.uid, "account deleted");
        self.messenger
            .success(keys::ACCOUNT_DELETED_TITLE, keys::ACCOUNT_DELETED)
            .await;
        Ok(())
    }
}
