//! Page computation
//!
//! The validation-and-slicing routine: normalizes the raw request,
//! applies the clamp-above-total leniency, fetches the window through
//! the paginator and translates every primitive error into a
//! [`PageResult`].

use tracing::debug;

use crate::error::PageError;
use crate::paginator::{PageToken, Paginator};
use crate::result::{PageParams, PageResult};

/// Window size used when the caller supplies a non-positive one.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Page served when the caller supplies a non-positive page number.
pub const DEFAULT_PAGE: u32 = 1;

/// Computes the slice of a collection belonging to one page.
///
/// Construction normalizes the request; [`compute`](Self::compute) is a
/// pure function of the input slice and never fails: every outcome,
/// including malformed or out-of-range requests, is a [`PageResult`].
#[derive(Debug, Clone)]
pub struct PageComputer {
    per_page: u32,
    page: PageToken,
}

impl PageComputer {
    /// Build a computer from raw request values.
    ///
    /// A non-positive `per_page` falls back to [`DEFAULT_PER_PAGE`]; a
    /// non-positive integer `page` falls back to [`DEFAULT_PAGE`]. Text
    /// tokens are kept verbatim and coerced during
    /// [`compute`](Self::compute), where a malformed one yields the 400
    /// outcome.
    pub fn new(per_page: i64, page: impl Into<PageToken>) -> Self {
        let per_page = if per_page < 1 {
            debug!(
                requested = per_page,
                fallback = DEFAULT_PER_PAGE,
                "Non-positive per_page, using default"
            );
            DEFAULT_PER_PAGE
        } else {
            per_page.min(i64::from(u32::MAX)) as u32
        };

        let page = match page.into() {
            PageToken::Number(n) if n < 1 => {
                debug!(
                    requested = n,
                    fallback = DEFAULT_PAGE,
                    "Non-positive page, using default"
                );
                PageToken::Number(i64::from(DEFAULT_PAGE))
            }
            token => token,
        };

        Self { per_page, page }
    }

    /// Compute the page of `items` selected by this request.
    pub fn compute<T: Clone>(&self, items: &[T]) -> PageResult<T> {
        let paginator = match Paginator::new(items, self.per_page) {
            Ok(paginator) => paginator,
            Err(err) => return translate(err),
        };
        let total_pages = paginator.num_pages();

        let requested = match self.page.coerce() {
            Ok(n) => n.max(i64::from(DEFAULT_PAGE)),
            Err(err) => return translate(err),
        };

        // Requests past the end are served the last page, not an error.
        // For an empty collection this clamps to 0 and the paginator's
        // range check resolves the fetch to the out-of-range outcome.
        let page = if requested > i64::from(total_pages) {
            debug!(requested, total_pages, "Requested page exceeds total, clamping");
            i64::from(total_pages)
        } else {
            requested
        };

        match paginator.page(page) {
            Ok(window) => PageResult::success(window.items().to_vec(), window.number(), total_pages),
            Err(err) => translate(err),
        }
    }
}

impl Default for PageComputer {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
            page: PageToken::Number(i64::from(DEFAULT_PAGE)),
        }
    }
}

impl From<PageParams> for PageComputer {
    fn from(params: PageParams) -> Self {
        Self::new(params.per_page, params.page)
    }
}

/// One-shot convenience over [`PageComputer`].
pub fn paginate<T: Clone>(items: &[T], per_page: i64, page: impl Into<PageToken>) -> PageResult<T> {
    PageComputer::new(per_page, page).compute(items)
}

fn translate<T>(err: PageError) -> PageResult<T> {
    match err {
        PageError::NotAnInteger { .. } => PageResult::invalid_page(),
        PageError::OutOfRange { .. } => PageResult::out_of_range(),
        err @ PageError::InvalidPerPage { .. } => PageResult::internal(err),
    }
}
