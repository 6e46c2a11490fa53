//! Server configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use repolens_core::cache::TtlPolicy;
use repolens_core::service::QueryServiceConfig;
use repolens_github::GitHubSearchConfig;

/// Server configuration, loaded from YAML with per-field defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address for `serve`.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// GitHub API base URL.
    #[serde(default = "default_github_base_url")]
    pub github_base_url: String,
    /// Optional GitHub token. `REPOLENS_GITHUB_TOKEN` or `GITHUB_TOKEN`
    /// in the environment take precedence over the file.
    #[serde(default)]
    pub github_token: Option<String>,
    /// Items requested per upstream search page.
    #[serde(default = "default_upstream_per_page")]
    pub upstream_per_page: u32,
    /// Upstream request timeout in seconds.
    #[serde(default = "default_upstream_timeout")]
    pub upstream_timeout_secs: u64,
    /// Items rendered per page.
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
    /// Cache backend selection.
    #[serde(default)]
    pub cache: CacheConfig,
    /// Cache TTL in seconds for queries without a phrase.
    #[serde(default = "default_ttl")]
    pub ttl_without_phrase_secs: u64,
    /// Cache TTL in seconds for queries with a phrase.
    #[serde(default = "default_ttl")]
    pub ttl_with_phrase_secs: u64,
    /// Overall deadline in seconds for one request through the core.
    #[serde(default = "default_request_deadline")]
    pub request_deadline_secs: u64,
}

/// Cache backend selection.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum CacheConfig {
    #[default]
    Memory,
    File { dir: PathBuf },
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_github_base_url() -> String {
    repolens_github::client::GITHUB_API_BASE.to_string()
}

fn default_upstream_per_page() -> u32 {
    repolens_github::client::MAX_PER_PAGE
}

fn default_upstream_timeout() -> u64 {
    10
}

fn default_items_per_page() -> usize {
    repolens_core::page::DEFAULT_PER_PAGE
}

fn default_ttl() -> u64 {
    12 * 60 * 60
}

fn default_request_deadline() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            github_base_url: default_github_base_url(),
            github_token: None,
            upstream_per_page: default_upstream_per_page(),
            upstream_timeout_secs: default_upstream_timeout(),
            items_per_page: default_items_per_page(),
            cache: CacheConfig::default(),
            ttl_without_phrase_secs: default_ttl(),
            ttl_with_phrase_secs: default_ttl(),
            request_deadline_secs: default_request_deadline(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from `path`, or defaults when no path is given.
    /// Environment token overrides apply in both cases.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut config = match path {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                serde_yaml::from_str(&contents)?
            }
            None => Self::default(),
        };

        if let Ok(token) = std::env::var("REPOLENS_GITHUB_TOKEN").or_else(|_| std::env::var("GITHUB_TOKEN")) {
            if !token.is_empty() {
                config.github_token = Some(token);
            }
        }

        Ok(config)
    }

    pub fn ttl_policy(&self) -> TtlPolicy {
        TtlPolicy {
            without_phrase: Duration::from_secs(self.ttl_without_phrase_secs),
            with_phrase: Duration::from_secs(self.ttl_with_phrase_secs),
        }
    }

    pub fn service_config(&self) -> QueryServiceConfig {
        QueryServiceConfig {
            per_page: self.items_per_page,
            deadline: Duration::from_secs(self.request_deadline_secs),
        }
    }

    pub fn github_config(&self) -> GitHubSearchConfig {
        GitHubSearchConfig {
            base_url: self.github_base_url.clone(),
            token: self.github_token.clone(),
            per_page: self.upstream_per_page,
            timeout: Duration::from_secs(self.upstream_timeout_secs),
        }
    }
}
