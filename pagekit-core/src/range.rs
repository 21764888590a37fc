//! The page-range calculator: which pages to show and where to elide.

use crate::error::PageRangeError;
use crate::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT};

/// One emitted unit of a computed page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    /// A concrete, 1-based page number.
    Page(usize),
    /// A marker standing in for a run of two or more omitted pages.
    Ellipsis,
}

/// The outcome of one page-range computation.
///
/// `tokens` is ordered; the `Page` indices in it are strictly increasing and
/// contain `current_page` exactly once. Results are plain values meant to be
/// recomputed fresh whenever the current page changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRangeResult {
    pub tokens: Vec<PageToken>,
    /// Whether a "previous" control should be enabled (`current_page > 1`).
    pub has_previous: bool,
    /// Whether a "next" control should be enabled (`current_page < total_pages`).
    pub has_next: bool,
}

/// Compute a page range with the default window
/// ([`DEFAULT_SIBLING_COUNT`], [`DEFAULT_BOUNDARY_COUNT`]).
pub fn page_range(
    current_page: usize,
    total_pages: usize,
) -> Result<PageRangeResult, PageRangeError> {
    page_range_with_window(
        current_page,
        total_pages,
        DEFAULT_SIBLING_COUNT,
        DEFAULT_BOUNDARY_COUNT,
    )
}

/// Compute a page range with an explicit display window.
///
/// `sibling_count` pages are kept on each side of `current_page`;
/// `boundary_count` pages are always kept at the very start and end. Runs of
/// two or more omitted pages collapse into a single [`PageToken::Ellipsis`];
/// a gap of exactly one page is emitted as that page instead of an ellipsis.
///
/// Fails with [`PageRangeError::InvalidArgument`] when `total_pages` is zero
/// and with [`PageRangeError::OutOfRange`] when `current_page` is outside
/// `[1, total_pages]`. The calculator never clamps; see
/// [`clamp_page`](crate::clamp_page) for the explicit caller-side version.
pub fn page_range_with_window(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
    boundary_count: usize,
) -> Result<PageRangeResult, PageRangeError> {
    if total_pages < 1 {
        return Err(PageRangeError::InvalidArgument("total_pages must be >= 1"));
    }
    if current_page < 1 || current_page > total_pages {
        return Err(PageRangeError::OutOfRange {
            current_page,
            total_pages,
        });
    }

    Ok(build_range(
        current_page,
        total_pages,
        sibling_count,
        boundary_count,
    ))
}

/// Token emission for already-validated inputs.
///
/// Callers must guarantee `1 <= current_page <= total_pages`.
pub(crate) fn build_range(
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
    boundary_count: usize,
) -> PageRangeResult {
    let has_previous = current_page > 1;
    let has_next = current_page < total_pages;

    // Everything fits without elision. Saturation keeps the comparison
    // correct for extreme window parameters: a huge window means every
    // total fits.
    let full_window = boundary_count
        .saturating_mul(2)
        .saturating_add(sibling_count.saturating_mul(2))
        .saturating_add(1);
    if total_pages <= full_window {
        return PageRangeResult {
            tokens: (1..=total_pages).map(PageToken::Page).collect(),
            has_previous,
            has_next,
        };
    }

    // Sibling window clipped into [1, total_pages]; the boundary blocks
    // absorb any overlap rather than the window re-expanding at the edges.
    let window_start = current_page.saturating_sub(sibling_count).max(1);
    let window_end = current_page.saturating_add(sibling_count).min(total_pages);

    let head = 1..=boundary_count.min(total_pages);
    let tail = (total_pages - boundary_count.min(total_pages) + 1)..=total_pages;

    let mut pages: Vec<usize> = head
        .chain(window_start..=window_end)
        .chain(tail)
        .collect();
    pages.sort_unstable();
    pages.dedup();

    let mut tokens = Vec::with_capacity(pages.len() + 2);
    let mut previous_page: Option<usize> = None;
    for &page in &pages {
        if let Some(last) = previous_page {
            match page - last {
                1 => {}
                // A single missing page reads better spelled out.
                2 => tokens.push(PageToken::Page(last + 1)),
                _ => tokens.push(PageToken::Ellipsis),
            }
        }
        tokens.push(PageToken::Page(page));
        previous_page = Some(page);
    }

    PageRangeResult {
        tokens,
        has_previous,
        has_next,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use PageToken::{Ellipsis, Page};

    fn tokens(current: usize, total: usize, siblings: usize, boundaries: usize) -> Vec<PageToken> {
        page_range_with_window(current, total, siblings, boundaries)
            .expect("valid input")
            .tokens
    }

    #[test]
    fn window_clipped_at_left_edge() {
        assert_eq!(tokens(1, 10, 1, 1), vec![Page(1), Page(2), Ellipsis, Page(10)]);
    }

    #[test]
    fn window_clipped_at_right_edge() {
        assert_eq!(tokens(10, 10, 1, 1), vec![Page(1), Ellipsis, Page(9), Page(10)]);
    }

    #[test]
    fn interior_page_elides_both_sides() {
        assert_eq!(
            tokens(5, 20, 1, 1),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn small_total_shows_every_page() {
        assert_eq!(
            tokens(3, 5, 1, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn single_missing_page_is_spelled_out() {
        // Gap between boundary block {1} and window {3, 4, 5} is exactly
        // page 2, which must appear as a page, not an ellipsis.
        assert_eq!(
            tokens(4, 10, 1, 1),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10)
            ]
        );
    }

    #[test]
    fn zero_boundary_emits_bare_window() {
        assert_eq!(tokens(5, 20, 1, 0), vec![Page(4), Page(5), Page(6)]);
    }

    #[test]
    fn zero_siblings_still_shows_current() {
        assert_eq!(
            tokens(5, 20, 0, 1),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(20)]
        );
    }

    #[test]
    fn wide_boundary_blocks_absorb_the_window() {
        assert_eq!(
            tokens(3, 20, 1, 2),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Ellipsis,
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn extreme_window_counts_fall_back_to_full_range() {
        assert_eq!(
            tokens(1, 5, usize::MAX / 2 + 1, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
        assert_eq!(
            tokens(3, 5, 0, usize::MAX),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn default_window_matches_explicit_ones() {
        assert_eq!(
            page_range(7, 30),
            page_range_with_window(7, 30, 1, 1)
        );
    }

    #[test]
    fn prev_next_flags_follow_position() {
        let first = page_range(1, 10).expect("valid input");
        assert!(!first.has_previous);
        assert!(first.has_next);

        let middle = page_range(5, 10).expect("valid input");
        assert!(middle.has_previous);
        assert!(middle.has_next);

        let last = page_range(10, 10).expect("valid input");
        assert!(last.has_previous);
        assert!(!last.has_next);

        let only = page_range(1, 1).expect("valid input");
        assert!(!only.has_previous);
        assert!(!only.has_next);
    }

    #[test]
    fn zero_total_pages_is_invalid_argument() {
        assert_eq!(
            page_range(1, 0),
            Err(PageRangeError::InvalidArgument("total_pages must be >= 1"))
        );
    }

    #[test]
    fn current_page_zero_is_out_of_range() {
        assert_eq!(
            page_range(0, 5),
            Err(PageRangeError::OutOfRange {
                current_page: 0,
                total_pages: 5
            })
        );
    }

    #[test]
    fn current_page_past_total_is_out_of_range() {
        assert_eq!(
            page_range(6, 5),
            Err(PageRangeError::OutOfRange {
                current_page: 6,
                total_pages: 5
            })
        );
    }
}
