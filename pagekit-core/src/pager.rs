//! Caller-owned page state for pagination controls.

use tracing::debug;

use crate::error::PageRangeError;
use crate::page::{clamp_page, total_pages};
use crate::range::{build_range, PageRangeResult};
use crate::{DEFAULT_BOUNDARY_COUNT, DEFAULT_SIBLING_COUNT};

/// Owned `current_page` state plus the window configuration used to derive
/// a [`PageRangeResult`] from it.
///
/// The pager holds no derived state: [`Pager::range`] recomputes fresh on
/// every call, so there is nothing to invalidate when the page changes.
/// State is kept valid by construction (`1 <= current_page <= total_pages`),
/// which is what makes `range` infallible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pager {
    current_page: usize,
    total_pages: usize,
    sibling_count: usize,
    boundary_count: usize,
}

impl Pager {
    /// Create a pager on page 1 with the default display window.
    pub fn new(total_pages: usize) -> Result<Self, PageRangeError> {
        Self::with_window(total_pages, DEFAULT_SIBLING_COUNT, DEFAULT_BOUNDARY_COUNT)
    }

    /// Create a pager on page 1 with an explicit display window.
    pub fn with_window(
        total_pages: usize,
        sibling_count: usize,
        boundary_count: usize,
    ) -> Result<Self, PageRangeError> {
        if total_pages < 1 {
            return Err(PageRangeError::InvalidArgument("total_pages must be >= 1"));
        }

        Ok(Self {
            current_page: 1,
            total_pages,
            sibling_count,
            boundary_count,
        })
    }

    /// Create a pager over a paged item list.
    ///
    /// An empty list still yields one (empty) page so the pager always has a
    /// valid current page.
    pub fn for_items(item_count: usize, per_page: usize) -> Self {
        Self {
            current_page: 1,
            total_pages: total_pages(item_count, per_page).max(1),
            sibling_count: DEFAULT_SIBLING_COUNT,
            boundary_count: DEFAULT_BOUNDARY_COUNT,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Move one page forward, saturating at the last page.
    ///
    /// Returns whether the current page changed.
    pub fn next(&mut self) -> bool {
        if !self.has_next() {
            return false;
        }
        self.current_page += 1;
        debug!(page = self.current_page, "pager moved next");
        true
    }

    /// Move one page back, saturating at page 1.
    ///
    /// Returns whether the current page changed.
    pub fn previous(&mut self) -> bool {
        if !self.has_previous() {
            return false;
        }
        self.current_page -= 1;
        debug!(page = self.current_page, "pager moved previous");
        true
    }

    /// Jump to a requested page, clamped into range.
    ///
    /// Returns the page actually landed on. Clamping here is the explicit
    /// caller-side choice the calculator itself refuses to make.
    pub fn jump(&mut self, page: usize) -> usize {
        let target = clamp_page(page, self.total_pages);
        if target != self.current_page {
            self.current_page = target;
            debug!(page = self.current_page, "pager jumped");
        }
        self.current_page
    }

    /// Recompute the page range for the current state.
    pub fn range(&self) -> PageRangeResult {
        build_range(
            self.current_page,
            self.total_pages,
            self.sibling_count,
            self.boundary_count,
        )
    }
}
