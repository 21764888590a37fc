//! Pure page-range computation for pagination controls.
//!
//! The core entry point is [`page_range`]: given a current page and a total
//! page count it decides which page numbers to show, where to collapse
//! omitted runs into an ellipsis marker, and whether previous/next controls
//! are enabled. Rendering the result is the consumer's concern.

/// Default number of pages shown on each side of the current page.
pub const DEFAULT_SIBLING_COUNT: usize = 1;

/// Default number of pages always shown at the start and end of the range.
pub const DEFAULT_BOUNDARY_COUNT: usize = 1;

mod error;
mod page;
mod pager;
mod range;

pub use error::PageRangeError;
pub use page::{clamp_page, page_window, total_pages};
pub use pager::Pager;
pub use range::{PageRangeResult, PageToken, page_range, page_range_with_window};
