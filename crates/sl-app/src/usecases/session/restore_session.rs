use std::sync::Arc;

use tracing::{debug, warn};

use sl_core::ports::KeyValueCachePort;
use sl_core::session::{Session, SESSION_CACHE_KEY};

/// Use case for restoring a cached session at startup.
///
/// A read failure is logged and treated exactly like an empty cache.
pub struct RestoreSession {
    cache: Arc<dyn KeyValueCachePort>,
}

impl RestoreSession {
    pub fn new(cache: Arc<dyn KeyValueCachePort>) -> Self {
        Self { cache }
    }

    /// Returns the cached session, or `None` when the user must sign in.
    #[tracing::instrument(name = "usecase.restore_session.execute", skip(self))]
    pub async fn execute(&self) -> Option<Session> {
        match self.cache.get(SESSION_CACHE_KEY).await {
            Ok(Some(raw)) if !raw.is_empty() => {
                debug!("cached session found");
                Some(Session::from_raw(raw))
            }
            Ok(_) => {
                debug!("no cached session");
                None
            }
            Err(err) => {
                warn!(error = %err, "failed to read cached session");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::test_support::MockCache;

    #[tokio::test]
    async fn test_execute_returns_cached_session() {
        let cache = Arc::new(MockCache::with_entry(SESSION_CACHE_KEY, r#"{"uid":"abc"}"#));
        let use_case = RestoreSession::new(cache);

        let session = use_case.execute().await.expect("session should be restored");

        assert_eq!(session.raw(), r#"{"uid":"abc"}"#);
    }

    #[tokio::test]
    async fn test_execute_returns_none_for_empty_cache() {
        let use_case = RestoreSession::new(Arc::new(MockCache::default()));

        assert!(use_case.execute().await.is_none());
    }

    #[tokio::test]
    async fn test_execute_treats_empty_value_as_absent() {
        let cache = Arc::new(MockCache::with_entry(SESSION_CACHE_KEY, ""));
        let use_case = RestoreSession::new(cache);

        assert!(use_case.execute().await.is_none());
    }

    #[tokio::test]
    async fn test_execute_treats_read_failure_as_absent() {
        let cache = Arc::new(MockCache::with_entry(SESSION_CACHE_KEY, r#"{"uid":"abc"}"#));
        cache.fail_reads();
        let use_case = RestoreSession::new(cache);

        assert!(use_case.execute().await.is_none());
    }
}
