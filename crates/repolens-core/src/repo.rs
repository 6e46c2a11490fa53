//! Repository records and result sets.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single repository as decoded from the upstream search response.
/// Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoRecord {
    pub name: String,
    pub owner_login: String,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    pub stars: u32,
}

/// The full, unpaginated collection of records for one query partition.
/// This is the unit the cache gateway stores; pages are sliced from it
/// per request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Total match count as reported by the upstream search. May exceed
    /// `items.len()` when the upstream caps a single response; pagination
    /// operates on the records actually held.
    pub total_count: u64,
    pub items: Vec<RepoRecord>,
}

impl ResultSet {
    pub fn new(total_count: u64, items: Vec<RepoRecord>) -> Self {
        Self { total_count, items }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
