//! Application state shared across handlers.

use std::sync::Arc;

use repolens_core::service::QueryService;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<QueryService>,
}

impl AppState {
    pub fn new(service: Arc<QueryService>) -> Self {
        Self { service }
    }
}
