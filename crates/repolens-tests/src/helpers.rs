//! Test helper functions and utilities.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use repolens_api::{AppState, create_router};
use repolens_cache::MemoryStore;
use repolens_core::cache::{CacheGateway, TtlPolicy};
use repolens_core::service::{QueryService, QueryServiceConfig};
use repolens_github::{GitHubSearch, GitHubSearchConfig};

/// Start an API server backed by a fresh in-memory cache and an
/// upstream at `upstream_base_url`, and return its address.
pub async fn start_test_server(
    upstream_base_url: &str,
) -> anyhow::Result<(SocketAddr, tokio::task::JoinHandle<()>)> {
    let search = GitHubSearch::new(GitHubSearchConfig {
        base_url: upstream_base_url.to_string(),
        token: None,
        per_page: 100,
        timeout: Duration::from_secs(2),
    })?;
    let gateway = CacheGateway::new(Arc::new(MemoryStore::new()), TtlPolicy::default());
    let service = QueryService::new(
        Arc::new(search),
        gateway,
        QueryServiceConfig {
            per_page: 10,
            deadline: Duration::from_secs(5),
        },
    );

    let app = create_router(Arc::new(AppState::new(Arc::new(service))));
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;

    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Ok((addr, handle))
}

/// Plain reqwest client against a test server address.
pub struct ApiTestClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiTestClient {
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    pub async fn get(&self, path: &str) -> reqwest::Result<reqwest::Response> {
        self.client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
    }
}
