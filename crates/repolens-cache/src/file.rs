//! Filesystem cache store.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use repolens_core::ports::CacheStore;
use repolens_core::{Error, Result};

use crate::keys::sanitize_key;

/// On-disk envelope wrapping a cached payload with its expiry metadata.
#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    stored_at: DateTime<Utc>,
    ttl_secs: u64,
    payload_b64: String,
}

impl Envelope {
    fn is_expired(&self, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.stored_at);
        age.num_seconds() < 0 || age.num_seconds() as u64 >= self.ttl_secs
    }
}

/// One JSON file per key under a root directory. Survives restarts;
/// expired files read as a miss and are removed on that read.
pub struct FileStore {
    root_dir: PathBuf,
}

impl FileStore {
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.root_dir.join(format!("{}.json", sanitize_key(key)))
    }

    async fn write_atomic(path: &Path, contents: &[u8]) -> Result<()> {
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, contents).await?;
        tokio::fs::rename(&temp_path, path).await?;
        Ok(())
    }
}

#[async_trait]
impl CacheStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let path = self.entry_path(key);
        let contents = match tokio::fs::read(&path).await {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(Error::CacheRead {
                    key: key.to_string(),
                    message: err.to_string(),
                });
            }
        };

        let envelope: Envelope =
            serde_json::from_slice(&contents).map_err(|err| Error::CacheRead {
                key: key.to_string(),
                message: err.to_string(),
            })?;

        if envelope.is_expired(Utc::now()) {
            let _ = tokio::fs::remove_file(&path).await;
            return Ok(None);
        }

        let payload = BASE64
            .decode(&envelope.payload_b64)
            .map_err(|err| Error::CacheRead {
                key: key.to_string(),
                message: err.to_string(),
            })?;
        Ok(Some(payload))
    }

    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()> {
        let envelope = Envelope {
            stored_at: Utc::now(),
            ttl_secs: ttl.as_secs(),
            payload_b64: BASE64.encode(&value),
        };
        let contents = serde_json::to_vec(&envelope)?;

        Self::write_atomic(&self.entry_path(key), &contents)
            .await
            .map_err(|err| Error::CacheWrite {
                key: key.to_string(),
                message: err.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn roundtrips_a_payload() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("acme:widget", b"payload".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(
            store.get("acme:widget").await.unwrap(),
            Some(b"payload".to_vec())
        );
    }

    #[tokio::test]
    async fn absent_key_is_a_miss() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("nope").await.unwrap(), None);
    }

    #[tokio::test]
    async fn zero_ttl_expires_immediately() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("acme:", b"payload".to_vec(), Duration::ZERO)
            .await
            .unwrap();

        assert_eq!(store.get("acme:").await.unwrap(), None);
    }

    #[tokio::test]
    async fn expired_entry_file_is_removed_on_read() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("acme:", b"payload".to_vec(), Duration::ZERO)
            .await
            .unwrap();
        let path = dir.path().join("acme_.json");
        assert!(path.exists());

        store.get("acme:").await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn corrupt_entry_surfaces_as_cache_read_error() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        tokio::fs::write(dir.path().join("acme_.json"), b"not json")
            .await
            .unwrap();

        let err = store.get("acme:").await.expect_err("should fail");
        assert!(matches!(err, Error::CacheRead { .. }));
    }

    #[tokio::test]
    async fn keys_with_separators_map_to_distinct_files() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path());

        store
            .set("acme:widget", b"a".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();
        store
            .set("acme:", b"b".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        assert_eq!(
            store.get("acme:widget").await.unwrap(),
            Some(b"a".to_vec())
        );
        assert_eq!(store.get("acme:").await.unwrap(), Some(b"b".to_vec()));
    }
}
