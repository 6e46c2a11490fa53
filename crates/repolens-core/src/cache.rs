//! Cache gateway.
//!
//! Maps a query partition key to a cached [`ResultSet`] over any
//! [`CacheStore`] backend. The gateway is best-effort by contract: read
//! failures of any kind degrade to a miss and write failures are logged
//! and swallowed, so the cache can never fail a request.

use std::sync::Arc;
use std::time::Duration;

use crate::ports::CacheStore;
use crate::repo::ResultSet;

/// Default TTL for cached result sets: 12 hours.
pub const DEFAULT_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// TTL selection per query shape.
///
/// The volatile preset reflects the assumption that unfiltered listings
/// change more often than phrase-filtered ones. It is a policy choice,
/// not a domain invariant, so it stays configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    /// TTL for queries without a phrase.
    pub without_phrase: Duration,
    /// TTL for queries with a phrase.
    pub with_phrase: Duration,
}

impl TtlPolicy {
    /// Same TTL regardless of query shape.
    pub const fn fixed(ttl: Duration) -> Self {
        Self {
            without_phrase: ttl,
            with_phrase: ttl,
        }
    }

    /// Short-lived entries: 1 second for unfiltered listings, 10 seconds
    /// when a phrase narrows the query.
    pub const fn volatile() -> Self {
        Self {
            without_phrase: Duration::from_secs(1),
            with_phrase: Duration::from_secs(10),
        }
    }

    pub fn ttl_for(&self, phrase: Option<&str>) -> Duration {
        match phrase {
            Some(p) if !p.is_empty() => self.with_phrase,
            _ => self.without_phrase,
        }
    }
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self::fixed(DEFAULT_TTL)
    }
}

/// Gateway between the query service and a backing cache store.
pub struct CacheGateway {
    store: Arc<dyn CacheStore>,
    policy: TtlPolicy,
}

impl CacheGateway {
    pub fn new(store: Arc<dyn CacheStore>, policy: TtlPolicy) -> Self {
        Self { store, policy }
    }

    /// Fetch a cached result set. Any failure (store error, expired
    /// entry, undecodable payload) reads as a miss.
    pub async fn get_result(&self, key: &str) -> Option<ResultSet> {
        let bytes = match self.store.get(key).await {
            Ok(Some(bytes)) => bytes,
            Ok(None) => {
                tracing::debug!(key, "cache miss");
                return None;
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "cache read failed, treating as miss");
                return None;
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(result) => {
                tracing::debug!(key, "cache hit");
                Some(result)
            }
            Err(err) => {
                tracing::warn!(key, error = %err, "cached payload undecodable, treating as miss");
                None
            }
        }
    }

    /// Store a result set under the policy TTL for this query shape.
    /// Best-effort: failures are logged and never propagated.
    pub async fn put_result(&self, key: &str, result: &ResultSet, phrase: Option<&str>) {
        let bytes = match serde_json::to_vec(result) {
            Ok(bytes) => bytes,
            Err(err) => {
                tracing::warn!(key, error = %err, "cache write skipped, payload unserializable");
                return;
            }
        };

        let ttl = self.policy.ttl_for(phrase);
        if let Err(err) = self.store.set(key, bytes, ttl).await {
            tracing::warn!(key, error = %err, "cache write failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use tokio::sync::Mutex;

    struct MapStore {
        entries: Mutex<HashMap<String, Vec<u8>>>,
    }

    impl MapStore {
        fn new() -> Self {
            Self {
                entries: Mutex::new(HashMap::new()),
            }
        }
    }

    #[async_trait]
    impl CacheStore for MapStore {
        async fn get(&self, key: &str) -> crate::Result<Option<Vec<u8>>> {
            Ok(self.entries.lock().await.get(key).cloned())
        }

        async fn set(&self, key: &str, value: Vec<u8>, _ttl: Duration) -> crate::Result<()> {
            self.entries.lock().await.insert(key.to_string(), value);
            Ok(())
        }
    }

    struct BrokenStore;

    #[async_trait]
    impl CacheStore for BrokenStore {
        async fn get(&self, key: &str) -> crate::Result<Option<Vec<u8>>> {
            Err(Error::CacheRead {
                key: key.to_string(),
                message: "store offline".to_string(),
            })
        }

        async fn set(&self, key: &str, _value: Vec<u8>, _ttl: Duration) -> crate::Result<()> {
            Err(Error::CacheWrite {
                key: key.to_string(),
                message: "store offline".to_string(),
            })
        }
    }

    #[test]
    fn volatile_policy_distinguishes_query_shape() {
        let policy = TtlPolicy::volatile();
        assert_eq!(policy.ttl_for(None), Duration::from_secs(1));
        assert_eq!(policy.ttl_for(Some("")), Duration::from_secs(1));
        assert_eq!(policy.ttl_for(Some("widget")), Duration::from_secs(10));
    }

    #[test]
    fn default_policy_is_twelve_hours() {
        let policy = TtlPolicy::default();
        assert_eq!(policy.ttl_for(None), Duration::from_secs(43_200));
        assert_eq!(policy.ttl_for(Some("widget")), Duration::from_secs(43_200));
    }

    #[tokio::test]
    async fn roundtrips_a_result_set() {
        let gateway = CacheGateway::new(Arc::new(MapStore::new()), TtlPolicy::default());
        let result = ResultSet::new(1, Vec::new());

        gateway.put_result("acme:", &result, None).await;
        assert_eq!(gateway.get_result("acme:").await, Some(result));
    }

    #[tokio::test]
    async fn read_failure_is_a_miss() {
        let gateway = CacheGateway::new(Arc::new(BrokenStore), TtlPolicy::default());
        assert_eq!(gateway.get_result("acme:").await, None);
    }

    #[tokio::test]
    async fn write_failure_is_swallowed() {
        let gateway = CacheGateway::new(Arc::new(BrokenStore), TtlPolicy::default());
        // Must not panic or propagate
        gateway
            .put_result("acme:", &ResultSet::default(), None)
            .await;
    }

    #[tokio::test]
    async fn undecodable_payload_is_a_miss() {
        let store = Arc::new(MapStore::new());
        store
            .set("acme:", b"not json".to_vec(), Duration::from_secs(60))
            .await
            .unwrap();

        let gateway = CacheGateway::new(store, TtlPolicy::default());
        assert_eq!(gateway.get_result("acme:").await, None);
    }
}
