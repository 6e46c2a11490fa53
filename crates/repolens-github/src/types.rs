//! GitHub search API response types.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use repolens_core::repo::{RepoRecord, ResultSet};

/// `GET /search/repositories` response body.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

/// One repository in a search response.
#[derive(Debug, Deserialize)]
pub struct SearchItem {
    pub name: String,
    pub owner: ItemOwner,
    pub html_url: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub stargazers_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct ItemOwner {
    pub login: String,
}

impl From<SearchItem> for RepoRecord {
    fn from(item: SearchItem) -> Self {
        Self {
            name: item.name,
            owner_login: item.owner.login,
            html_url: item.html_url,
            created_at: item.created_at,
            stars: item.stargazers_count,
        }
    }
}

impl From<SearchResponse> for ResultSet {
    fn from(response: SearchResponse) -> Self {
        Self {
            total_count: response.total_count,
            items: response.items.into_iter().map(RepoRecord::from).collect(),
        }
    }
}
