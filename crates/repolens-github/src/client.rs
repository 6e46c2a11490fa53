//! GitHub search API client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, StatusCode};

use repolens_core::ports::RepositorySearch;
use repolens_core::repo::ResultSet;
use repolens_core::{Error, Result};

use crate::types::SearchResponse;

pub const GITHUB_API_BASE: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

/// Upstream maximum for `per_page` on the search endpoint.
pub const MAX_PER_PAGE: u32 = 100;

/// Client configuration. The base URL is overridable so tests can point
/// the client at a local mock server.
#[derive(Debug, Clone)]
pub struct GitHubSearchConfig {
    pub base_url: String,
    /// Optional token, sent as a Bearer header when present.
    pub token: Option<String>,
    /// Items requested per upstream page. Defaults to the upstream
    /// maximum so a single fetch approximates the full result set.
    pub per_page: u32,
    pub timeout: Duration,
}

impl Default for GitHubSearchConfig {
    fn default() -> Self {
        Self {
            base_url: GITHUB_API_BASE.to_string(),
            token: None,
            per_page: MAX_PER_PAGE,
            timeout: Duration::from_secs(10),
        }
    }
}

/// GitHub implementation of the [`RepositorySearch`] port.
pub struct GitHubSearch {
    client: Client,
    base_url: String,
    per_page: u32,
}

impl GitHubSearch {
    pub fn new(config: GitHubSearchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static(GITHUB_API_VERSION),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("repolens"));

        if let Some(token) = &config.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| Error::Config(format!("invalid GitHub token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Config(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            per_page: config.per_page.clamp(1, MAX_PER_PAGE),
        })
    }

    /// Search qualifier string. An empty phrase would leave a dangling
    /// `in:name` qualifier, so it falls back to the bare org scope.
    fn build_query(subject: &str, phrase: Option<&str>) -> String {
        match phrase {
            Some(p) if !p.is_empty() => format!("{p} in:name org:{subject}"),
            _ => format!("org:{subject}"),
        }
    }
}

#[async_trait]
impl RepositorySearch for GitHubSearch {
    async fn search(&self, subject: &str, phrase: Option<&str>, page: u32) -> Result<ResultSet> {
        let url = format!("{}/search/repositories", self.base_url);
        let params = [
            ("q", Self::build_query(subject, phrase)),
            ("page", page.max(1).to_string()),
            ("per_page", self.per_page.to_string()),
        ];

        tracing::debug!(subject, phrase = phrase.unwrap_or(""), page, "searching upstream");

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|e| Error::UpstreamUnreachable(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = response.text().await.unwrap_or_default();
            return Err(Error::UpstreamStatus {
                status: status.as_u16(),
                message,
            });
        }

        let decoded: SearchResponse = response
            .json()
            .await
            .map_err(|e| Error::UpstreamDecode(e.to_string()))?;

        Ok(decoded.into())
    }
}
