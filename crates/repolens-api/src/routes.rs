//! API route definitions.

use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::handlers::{health, repositories};
use crate::middleware;
use crate::state::AppState;

/// Create the main API router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/repositories/org/{org}",
            get(repositories::list_repositories),
        )
        .route(
            "/repositories/org/{org}/q/{phrase}",
            get(repositories::list_repositories_with_phrase),
        )
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .layer(axum::middleware::from_fn(middleware::request_id))
        .layer(middleware::cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
