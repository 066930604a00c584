use std::sync::Arc;

use tracing::{error, info};

use sl_core::i18n::keys;
use sl_core::ports::KeyValueCachePort;
use sl_core::session::SESSION_CACHE_KEY;

use crate::errors::SessionError;
use crate::usecases::messenger::Messenger;

/// Use case for local sign-out. The identity service is not contacted.
pub struct SignOut {
    cache: Arc<dyn KeyValueCachePort>,
    messenger: Messenger,
}

impl SignOut {
    pub fn new(cache: Arc<dyn KeyValueCachePort>, messenger: Messenger) -> Self {
        Self { cache, messenger }
    }

    #[tracing::instrument(name = "usecase.sign_out.execute", skip_all)]
    pub async fn execute(&self) -> Result<(), SessionError> {
        if let Err(err) = self.cache.delete(SESSION_CACHE_KEY).await {
            error!(error = %err, "failed to remove cached session");
            self.messenger.error(keys::SIGN_OUT_FAILED).await;
            return Err(err.into());
        }

        info!("signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::{messenger, MockCache, RecordingNotifier};

    #[tokio::test]
    async fn test_execute_removes_cached_session() {
        let cache = Arc::new(MockCache::with_entry(SESSION_CACHE_KEY, r#"{"uid":"abc"}"#));
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = SignOut::new(cache.clone(), messenger(notifier.clone()));

        use_case.execute().await.unwrap();

        assert_eq!(cache.value(SESSION_CACHE_KEY), None);
        assert_eq!(cache.deletes(), vec![SESSION_CACHE_KEY.to_string()]);
        assert!(notifier.notices().is_empty());
    }

    #[tokio::test]
    async fn test_execute_reports_cache_failure() {
        let cache = Arc::new(MockCache::with_entry(SESSION_CACHE_KEY, r#"{"uid":"abc"}"#));
        cache.fail_writes();
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = SignOut::new(cache.clone(), messenger(notifier.clone()));

        let result = use_case.execute().await;

        assert!(matches!(result, Err(SessionError::Cache(_))));
        assert!(cache.value(SESSION_CACHE_KEY).is_some());
        assert_eq!(notifier.last().unwrap().message, keys::SIGN_OUT_FAILED);
    }
}
