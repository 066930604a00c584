//! File-backed key-value cache
//!
//! Persists every entry into a single JSON object file. Writes go to a
//! sibling temp file which is then renamed over the target, so readers see
//! either the old or the new contents.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use sl_core::ports::KeyValueCachePort;
use sl_core::CacheError;

pub const DEFAULT_CACHE_FILE: &str = "cache.json";

type Entries = BTreeMap<String, String>;

pub struct FileKeyValueCache {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    write_lock: Mutex<()>,
}

impl FileKeyValueCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_CACHE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> Result<(), CacheError> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir).await?;
        }
        Ok(())
    }

    async fn load(&self) -> Result<Entries, CacheError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    async fn atomic_write(&self, entries: &Entries) -> Result<(), CacheError> {
        self.ensure_parent_dir().await?;

        let json = serde_json::to_string_pretty(entries)?;
        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).await?;
        fs::rename(&tmp_path, &self.path).await?;

        debug!(path = %self.path.display(), entries = entries.len(), "cache file written");
        Ok(())
    }
}

#[async_trait]
impl KeyValueCachePort for FileKeyValueCache {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let entries = self.load().await?;
        Ok(entries.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        entries.insert(key.to_string(), value.to_string());
        self.atomic_write(&entries).await
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.load().await?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.atomic_write(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_returns_none_when_file_not_exists() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileKeyValueCache::new(temp_dir.path().join("missing.json"));

        assert_eq!(cache.get("@user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_set_then_get_survives_new_instance() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("cache.json");

        let cache = FileKeyValueCache::new(&path);
        cache.set("@user", r#"{"uid":"abc"}"#).await.unwrap();
        cache.set("@language", "en").await.unwrap();

        let reopened = FileKeyValueCache::new(&path);
        assert_eq!(
            reopened.get("@user").await.unwrap().as_deref(),
            Some(r#"{"uid":"abc"}"#)
        );
        assert_eq!(reopened.get("@language").await.unwrap().as_deref(), Some("en"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_key() {
        let temp_dir = TempDir::new().unwrap();
        let cache = FileKeyValueCache::with_defaults(temp_dir.path().to_path_buf());
        cache.set("@user", "x").await.unwrap();
        cache.set("@language", "es").await.unwrap();

        cache.delete("@user").await.unwrap();
        cache.delete("@user").await.unwrap();

        assert_eq!(cache.get("@user").await.unwrap(), None);
        assert_eq!(cache.get("@language").await.unwrap().as_deref(), Some("es"));
    }

    #[tokio::test]
    async fn test_empty_file_reads_as_empty_cache() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        std::fs::write(&path, "  \n").unwrap();

        let cache = FileKeyValueCache::new(&path);
        assert_eq!(cache.get("@user").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_encoding_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("cache.json");
        std::fs::write(&path, "{not json").unwrap();

        let cache = FileKeyValueCache::new(&path);
        assert!(matches!(
            cache.get("@user").await,
            Err(CacheError::Encoding(_))
        ));
    }
}
