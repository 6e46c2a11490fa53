//! HTML rendering of page views.
//!
//! Self-contained server-rendered page: title, repository table, and a
//! pagination bar. The JSON representation lives in the handlers; this
//! module only concerns the HTML shape.

use std::fmt::Write;

use repolens_core::Query;
use repolens_core::page::PageView;

/// Render the repository listing page.
pub fn repositories_page(title: &str, view: &PageView, query: &Query) -> String {
    let mut html = String::with_capacity(2048);

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2rem; }\n\
         table { border-collapse: collapse; }\n\
         th, td { border: 1px solid #ccc; padding: 0.4rem 0.8rem; text-align: left; }\n\
         .pagination a, .pagination strong { margin-right: 0.5rem; }\n\
         </style>\n",
    );
    html.push_str("</head>\n<body>\n");
    let _ = writeln!(html, "<h1>{}</h1>", escape_html(title));

    if view.items.is_empty() {
        html.push_str("<p>No repositories found.</p>\n");
    } else {
        html.push_str(
            "<table>\n<tr><th>Name</th><th>Owner</th><th>Created</th><th>Stars</th></tr>\n",
        );
        for repo in &view.items {
            let _ = writeln!(
                html,
                "<tr><td><a href=\"{url}\">{name}</a></td><td>{owner}</td><td>{created}</td><td>{stars}</td></tr>",
                url = escape_html(&repo.html_url),
                name = escape_html(&repo.name),
                owner = escape_html(&repo.owner_login),
                created = repo.created_at.format("%Y-%m-%d %H:%M"),
                stars = repo.stars,
            );
        }
        html.push_str("</table>\n");
    }

    html.push_str(&pagination_bar(view, query));
    html.push_str("</body>\n</html>\n");
    html
}

fn pagination_bar(view: &PageView, query: &Query) -> String {
    if view.total_pages == 0 {
        return String::new();
    }

    let base = listing_path(query);
    let mut bar = String::from("<nav class=\"pagination\">\n");

    if view.has_prev {
        let _ = writeln!(
            bar,
            "<a href=\"{base}?page={}\">&laquo; Prev</a>",
            view.current_page - 1
        );
    }
    for number in &view.page_numbers {
        if *number == view.current_page {
            let _ = writeln!(bar, "<strong>{number}</strong>");
        } else {
            let _ = writeln!(bar, "<a href=\"{base}?page={number}\">{number}</a>");
        }
    }
    if view.has_next {
        let _ = writeln!(
            bar,
            "<a href=\"{base}?page={}\">Next &raquo;</a>",
            view.current_page + 1
        );
    }

    bar.push_str("</nav>\n");
    bar
}

/// Listing path for `query`, preserving the phrase segment.
fn listing_path(query: &Query) -> String {
    match &query.phrase {
        Some(phrase) => format!(
            "/repositories/org/{}/q/{}",
            encode_segment(&query.subject),
            encode_segment(phrase)
        ),
        None => format!("/repositories/org/{}", encode_segment(&query.subject)),
    }
}

/// Minimal HTML entity escaping for text and attribute positions.
fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Percent-encode a path segment for use in links.
fn encode_segment(raw: &str) -> String {
    let mut encoded = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char);
            }
            _ => {
                let _ = write!(encoded, "%{byte:02X}");
            }
        }
    }
    encoded
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use repolens_core::repo::{RepoRecord, ResultSet};

    fn view_of(count: usize, page: u32) -> PageView {
        let items = (0..count)
            .map(|i| RepoRecord {
                name: format!("repo-{i}"),
                owner_login: "acme".to_string(),
                html_url: format!("https://github.com/acme/repo-{i}"),
                created_at: Utc.with_ymd_and_hms(2023, 4, 1, 12, 30, 0).unwrap(),
                stars: i as u32,
            })
            .collect();
        PageView::build(&ResultSet::new(count as u64, items), page, 10)
    }

    #[test]
    fn escapes_html_entities() {
        assert_eq!(
            escape_html("<b>\"a\" & 'b'</b>"),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn encodes_path_segments() {
        assert_eq!(encode_segment("acme"), "acme");
        assert_eq!(encode_segment("two words"), "two%20words");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
    }

    #[test]
    fn page_lists_repositories_and_formats_dates() {
        let query = Query::new("acme", None, 1);
        let html = repositories_page("Repositories of 'acme'", &view_of(3, 1), &query);

        assert!(html.contains("Repositories of &#39;acme&#39;"));
        assert!(html.contains("repo-0"));
        assert!(html.contains("2023-04-01 12:30"));
        assert!(html.contains("https://github.com/acme/repo-0"));
    }

    #[test]
    fn pagination_links_preserve_phrase_segment() {
        let query = Query::new("acme", Some("widget".to_string()), 2);
        let html = repositories_page("title", &view_of(25, 2), &query);

        assert!(html.contains("/repositories/org/acme/q/widget?page=1"));
        assert!(html.contains("/repositories/org/acme/q/widget?page=3"));
        assert!(html.contains("<strong>2</strong>"));
    }

    #[test]
    fn first_page_has_no_prev_link() {
        let query = Query::new("acme", None, 1);
        let html = repositories_page("title", &view_of(25, 1), &query);

        assert!(!html.contains("Prev"));
        assert!(html.contains("Next"));
    }

    #[test]
    fn empty_result_renders_without_pagination() {
        let query = Query::new("acme", None, 1);
        let html = repositories_page("title", &view_of(0, 1), &query);

        assert!(html.contains("No repositories found."));
        assert!(!html.contains("pagination"));
    }
}
