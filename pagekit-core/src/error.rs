//! Error taxonomy for page-range computation.

use thiserror::Error;

/// Input-validation failure for a page-range computation.
///
/// Both variants are caller-side bugs by contract: the calculator refuses to
/// guess intent (for example by clamping `current_page`) so that integration
/// errors surface at the call site instead of producing a misleading range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PageRangeError {
    /// Malformed configuration, e.g. a zero total page count.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `current_page` outside `[1, total_pages]`.
    ///
    /// Callers that want clamping semantics should apply
    /// [`clamp_page`](crate::clamp_page) explicitly before computing.
    #[error("current_page {current_page} outside [1, {total_pages}]")]
    OutOfRange {
        current_page: usize,
        total_pages: usize,
    },
}
