//! CLI command handlers.

use std::sync::Arc;

use console::style;
use dialoguer::Input;
use tokio::net::TcpListener;

use repolens_api::{AppState, create_router};
use repolens_cache::{FileStore, MemoryStore};
use repolens_core::Query;
use repolens_core::cache::CacheGateway;
use repolens_core::ports::CacheStore;
use repolens_core::service::QueryService;
use repolens_github::GitHubSearch;

use crate::config::{CacheConfig, ServerConfig};

/// Run the HTTP server until interrupted.
pub async fn serve(config: ServerConfig, listen: Option<String>) -> anyhow::Result<()> {
    let addr = listen.unwrap_or_else(|| config.listen.clone());
    let service = build_service(&config)?;
    let router = create_router(Arc::new(AppState::new(service)));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "repolens listening");
    axum::serve(listener, router).await?;
    Ok(())
}

/// Print one page of an organization's repositories to the console.
pub async fn list(
    config: ServerConfig,
    org: Option<String>,
    phrase: Option<String>,
    page: u32,
) -> anyhow::Result<()> {
    let org = match org {
        Some(org) => org,
        None => Input::<String>::new()
            .with_prompt("Organization")
            .interact_text()?,
    };

    let service = build_service(&config)?;
    let query = Query::new(org, phrase, page);
    let view = service.fetch_page(&query).await?;

    println!("{}", style(query.title()).bold());
    if view.items.is_empty() {
        println!("{}", style("No repositories found.").dim());
        return Ok(());
    }

    for repo in &view.items {
        println!(
            "{}  {}  {}  {}  {}",
            style(&repo.name).cyan(),
            repo.owner_login,
            repo.created_at.format("%Y-%m-%d %H:%M"),
            style(format!("{} stars", repo.stars)).yellow(),
            style(&repo.html_url).dim(),
        );
    }
    println!(
        "{}",
        style(format!(
            "page {} of {}",
            view.current_page, view.total_pages
        ))
        .dim()
    );
    Ok(())
}

fn build_service(config: &ServerConfig) -> anyhow::Result<Arc<QueryService>> {
    let store: Arc<dyn CacheStore> = match &config.cache {
        CacheConfig::Memory => Arc::new(MemoryStore::new()),
        CacheConfig::File { dir } => Arc::new(FileStore::new(dir.clone())),
    };
    let gateway = CacheGateway::new(store, config.ttl_policy());
    let search = Arc::new(GitHubSearch::new(config.github_config())?);

    Ok(Arc::new(QueryService::new(
        search,
        gateway,
        config.service_config(),
    )))
}
