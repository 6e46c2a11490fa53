//! Repository listing handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, Query as QueryParams, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use repolens_core::page::{self, PageView};
use repolens_core::{Error, Query};

use crate::render;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Raw page parameter. String-typed so that a non-numeric value
    /// normalizes to page 1 instead of rejecting the request.
    pub page: Option<String>,
    /// `json` selects a JSON body; anything else renders HTML.
    pub format: Option<String>,
}

#[derive(Serialize)]
pub struct ListResponse {
    pub title: String,
    #[serde(flatten)]
    pub page: PageView,
}

pub async fn list_repositories(
    State(state): State<Arc<AppState>>,
    Path(org): Path<String>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Response, (StatusCode, String)> {
    respond(&state, org, None, params).await
}

pub async fn list_repositories_with_phrase(
    State(state): State<Arc<AppState>>,
    Path((org, phrase)): Path<(String, String)>,
    QueryParams(params): QueryParams<ListParams>,
) -> Result<Response, (StatusCode, String)> {
    respond(&state, org, Some(phrase), params).await
}

async fn respond(
    state: &AppState,
    org: String,
    phrase: Option<String>,
    params: ListParams,
) -> Result<Response, (StatusCode, String)> {
    let page = page::parse_page(params.page.as_deref());
    let query = Query::new(org, phrase, page);

    let view = state
        .service
        .fetch_page(&query)
        .await
        .map_err(error_response)?;
    let title = query.title();

    if params.format.as_deref() == Some("json") {
        return Ok(Json(ListResponse { title, page: view }).into_response());
    }

    Ok(Html(render::repositories_page(&title, &view, &query)).into_response())
}

/// Map core errors onto transport status codes. Cache failures never
/// reach this point; the gateway swallows them.
fn error_response(err: Error) -> (StatusCode, String) {
    let status = match &err {
        Error::Cancelled(_) => StatusCode::GATEWAY_TIMEOUT,
        Error::UpstreamUnreachable(_) | Error::UpstreamStatus { .. } | Error::UpstreamDecode(_) => {
            StatusCode::BAD_GATEWAY
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    tracing::error!(error = %err, status = %status, "request failed");
    (status, err.to_string())
}
