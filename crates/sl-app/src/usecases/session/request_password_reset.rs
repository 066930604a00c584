use std::sync::Arc;

use tracing::{info, warn};

use sl_core::i18n::keys;
use sl_core::ports::IdentityPort;
use sl_core::ValidationError;

use crate::errors::SessionError;
use crate::usecases::messenger::Messenger;

/// Use case for sending a password-reset email.
pub struct RequestPasswordReset {
    identity: Arc<dyn IdentityPort>,
    messenger: Messenger,
}

impl RequestPasswordReset {
    pub fn new(identity: Arc<dyn IdentityPort>, messenger: Messenger) -> Self {
        Self {
            identity,
            messenger,
        }
    }

    /// Failures are acknowledged with one message regardless of cause.
    #[tracing::instrument(name = "usecase.request_password_reset.execute", skip_all)]
    pub async fn execute(&self, email: &str) -> Result<(), SessionError> {
        if email.is_empty() {
            self.messenger.info(keys::ENTER_EMAIL_FOR_RESET).await;
            return Err(ValidationError::EmptyField("email").into());
        }

        match self.identity.send_password_reset(email).await {
            Ok(()) => {
                info!("password reset email requested");
                self.messenger
                    .success(keys::SUCCESS, keys::RESET_EMAIL_SENT)
                    .await;
                Ok(())
            }
            Err(err) => {
                warn!(kind = ?err.kind, message = %err.message, "password reset request failed");
                self.messenger.error(keys::RESET_EMAIL_FAILED).await;
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{messenger, MockIdentity, RecordingNotifier};
    use sl_core::NoticeLevel;

    #[tokio::test]
    async fn test_empty_email_prompts_without_remote_call() {
        let identity = Arc::new(MockIdentity::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = RequestPasswordReset::new(identity.clone(), messenger(notifier.clone()));

        let result = use_case.execute("").await;

        assert!(matches!(result, Err(SessionError::Validation(_))));
        assert_eq!(MockIdentity::calls(&identity.reset_calls), 0);
        assert_eq!(notifier.last().unwrap().message, keys::ENTER_EMAIL_FOR_RESET);
    }

    #[tokio::test]
    async fn test_success_is_acknowledged() {
        let identity = Arc::new(MockIdentity::new());
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = RequestPasswordReset::new(identity.clone(), messenger(notifier.clone()));

        use_case.execute("a@b.com").await.unwrap();

        assert_eq!(MockIdentity::calls(&identity.reset_calls), 1);
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Success);
        assert_eq!(notice.message, keys::RESET_EMAIL_SENT);
    }

    #[tokio::test]
    async fn test_failure_is_acknowledged_generically() {
        let identity = Arc::new(MockIdentity::new());
        identity.fail_reset();
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = RequestPasswordReset::new(identity, messenger(notifier.clone()));

        let result = use_case.execute("nobody@b.com").await;

        assert!(matches!(result, Err(SessionError::Remote(_))));
        let notice = notifier.last().unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, keys::RESET_EMAIL_FAILED);
    }
}
