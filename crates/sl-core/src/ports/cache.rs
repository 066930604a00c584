//! Local durable cache port
//!
//! An on-device key-value store that survives process restarts. The session
//! lives under [`crate::session::SESSION_CACHE_KEY`] and the selected
//! language under [`crate::i18n::LANGUAGE_CACHE_KEY`].

use async_trait::async_trait;

use crate::errors::CacheError;

#[async_trait]
pub trait KeyValueCachePort: Send + Sync {
    /// Read a value; `Ok(None)` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value, replacing any previous one.
    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;

    /// Remove a key. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}
