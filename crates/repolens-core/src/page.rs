//! Pagination engine.
//!
//! Pure page arithmetic: slices, totals, and display windows. No IO and
//! no state; callers feed a result set and a requested page and get back
//! a render-ready [`PageView`].

use serde::Serialize;

use crate::repo::{RepoRecord, ResultSet};

/// Items shown per page unless configured otherwise.
pub const DEFAULT_PER_PAGE: usize = 30;

/// Pages shown on either side of the current page in the display window.
pub const DEFAULT_WINDOW_RADIUS: u32 = 2;

/// Half-open slice bounds `[start, end)` for the requested page.
///
/// Pages below 1 normalize to 1. A page past the end yields an empty
/// range rather than an error; both bounds stay within
/// `[0, total_items]` and `start <= end` always holds.
pub fn page_slice(total_items: usize, per_page: usize, requested_page: u32) -> (usize, usize) {
    let page = requested_page.max(1);
    let start = ((page - 1) as usize)
        .saturating_mul(per_page)
        .min(total_items);
    let end = start.saturating_add(per_page).min(total_items);
    (start, end)
}

/// Number of pages needed for `total_items`. Zero items is zero pages.
pub fn total_pages(total_items: usize, per_page: usize) -> u32 {
    total_items.div_ceil(per_page) as u32
}

/// Inclusive range of page numbers to display around `current`:
/// `[max(current - radius, 1), min(current + radius, total_pages)]`.
///
/// Empty when there are no pages. The current page is not clamped to
/// `total_pages` first, so a request far past the end inverts the range
/// and also yields an empty window.
pub fn page_window(current: u32, total_pages: u32, radius: u32) -> Vec<u32> {
    if total_pages == 0 {
        return Vec::new();
    }
    let start = current.saturating_sub(radius).max(1);
    let end = current.saturating_add(radius).min(total_pages);
    if start > end {
        return Vec::new();
    }
    (start..=end).collect()
}

/// Parse a raw `page` query parameter. Absent, non-numeric, or
/// non-positive values all normalize to page 1.
pub fn parse_page(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|&page| page >= 1)
        .unwrap_or(1)
}

/// The render-ready slice of a result set plus pagination metadata.
/// Recomputed per request, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView {
    pub items: Vec<RepoRecord>,
    pub current_page: u32,
    pub total_pages: u32,
    pub page_numbers: Vec<u32>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl PageView {
    /// Slice `result` for `requested_page` and assemble the metadata the
    /// renderer needs.
    pub fn build(result: &ResultSet, requested_page: u32, per_page: usize) -> Self {
        let page = requested_page.max(1);
        let total = total_pages(result.len(), per_page);
        let (start, end) = page_slice(result.len(), per_page, page);

        Self {
            items: result.items[start..end].to_vec(),
            current_page: page,
            total_pages: total,
            page_numbers: page_window(page, total, DEFAULT_WINDOW_RADIUS),
            has_prev: page > 1,
            has_next: page < total,
        }
    }
}
