//! Pure page math shared by pagination consumers.

/// Compute the number of pages needed for `item_count` items.
///
/// A `per_page` of zero is treated as one. Zero items yield zero pages;
/// callers that need an always-valid current page should floor the result
/// at one (as [`Pager::for_items`](crate::Pager::for_items) does).
pub fn total_pages(item_count: usize, per_page: usize) -> usize {
    item_count.div_ceil(per_page.max(1))
}

/// Clamp a requested page into `[1, total_pages]`.
///
/// `total_pages` is floored at one so the result is always a valid page.
/// This is the explicit caller-side counterpart to the calculator's
/// fail-loud contract.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Half-open `[start, end)` slice bounds for one page of a backing list.
pub fn page_window(total_items: usize, per_page: usize, page: usize) -> (usize, usize) {
    let safe_per_page = per_page.max(1);
    let start = page.saturating_sub(1).saturating_mul(safe_per_page);
    let end = (start + safe_per_page).min(total_items);
    (start.min(total_items), end)
}
