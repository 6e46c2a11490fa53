//! Upstream response fixtures.

use serde_json::{Value, json};

/// A search response body holding `count` repositories for `org`.
pub fn search_response(org: &str, count: usize) -> Value {
    let items: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "name": format!("repo-{i}"),
                "owner": {"login": org},
                "html_url": format!("https://github.com/{org}/repo-{i}"),
                "created_at": "2023-04-01T12:00:00Z",
                "stargazers_count": i
            })
        })
        .collect();

    json!({
        "total_count": count,
        "incomplete_results": false,
        "items": items
    })
}
