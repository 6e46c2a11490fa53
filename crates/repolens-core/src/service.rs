//! Repository query service.
//!
//! Orchestrates cache lookup, upstream fetch on miss, cache population,
//! and pagination into a render-ready [`PageView`]. Collaborators are
//! injected at construction; the service holds no other state.

use std::sync::Arc;
use std::time::Duration;

use crate::cache::CacheGateway;
use crate::error::{Error, Result};
use crate::page::{self, PageView};
use crate::ports::RepositorySearch;
use crate::query::Query;

/// Tunables for the query service.
#[derive(Debug, Clone, Copy)]
pub struct QueryServiceConfig {
    /// Items rendered per page.
    pub per_page: usize,
    /// Upper bound on one `fetch_page` call, covering cache IO and the
    /// upstream fetch. On expiry the call fails with [`Error::Cancelled`]
    /// and no cache write happens.
    pub deadline: Duration,
}

impl Default for QueryServiceConfig {
    fn default() -> Self {
        Self {
            per_page: page::DEFAULT_PER_PAGE,
            deadline: Duration::from_secs(10),
        }
    }
}

/// The core request path: cache -> upstream -> cache -> paginate.
pub struct QueryService {
    search: Arc<dyn RepositorySearch>,
    cache: CacheGateway,
    config: QueryServiceConfig,
}

impl QueryService {
    pub fn new(
        search: Arc<dyn RepositorySearch>,
        cache: CacheGateway,
        config: QueryServiceConfig,
    ) -> Self {
        Self {
            search,
            cache,
            config,
        }
    }

    /// Produce the page of repositories for `query`.
    ///
    /// Upstream transport and decode failures surface immediately with no
    /// retry; cache failures of any kind degrade silently. A call that
    /// exceeds the configured deadline fails with [`Error::Cancelled`].
    pub async fn fetch_page(&self, query: &Query) -> Result<PageView> {
        match tokio::time::timeout(self.config.deadline, self.resolve(query)).await {
            Ok(outcome) => outcome,
            Err(_) => Err(Error::Cancelled(self.config.deadline)),
        }
    }

    async fn resolve(&self, query: &Query) -> Result<PageView> {
        let key = query.cache_key();

        let result = match self.cache.get_result(&key).await {
            Some(cached) => cached,
            None => {
                let fetched = self
                    .search
                    .search(&query.subject, query.phrase.as_deref(), 1)
                    .await?;
                tracing::info!(
                    subject = %query.subject,
                    phrase = query.phrase.as_deref().unwrap_or(""),
                    items = fetched.len(),
                    total_count = fetched.total_count,
                    "fetched result set from upstream"
                );
                self.cache
                    .put_result(&key, &fetched, query.phrase.as_deref())
                    .await;
                fetched
            }
        };

        Ok(PageView::build(&result, query.page, self.config.per_page))
    }
}
