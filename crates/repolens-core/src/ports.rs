//! Port traits (hexagonal architecture).
//!
//! These traits define the interfaces between the core domain and
//! external adapters. The query service is constructed from them; there
//! are no process-wide singletons.

use std::time::Duration;

use async_trait::async_trait;

use crate::Result;
use crate::repo::ResultSet;

/// Upstream repository search capability. A source-specific adapter
/// (GitHub today) implements this; the core never sees provider detail.
#[async_trait]
pub trait RepositorySearch: Send + Sync {
    /// Fetch the repositories of `subject`, optionally filtered to names
    /// containing `phrase`. `page` selects an upstream page for adapters
    /// whose source paginates server-side.
    async fn search(&self, subject: &str, phrase: Option<&str>, page: u32) -> Result<ResultSet>;
}

/// Key-value store with per-entry TTL. An expired entry is equivalent to
/// absence: implementations must never return a value past its TTL.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Look up a key. `Ok(None)` is a miss (absent or expired).
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Store a value under a key for at most `ttl`.
    async fn set(&self, key: &str, value: Vec<u8>, ttl: Duration) -> Result<()>;
}
