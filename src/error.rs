use thiserror::Error;

/// Errors raised by the paging primitive's own boundary checks.
///
/// These never reach callers of [`crate::PageComputer::compute`]; the
/// computer translates each variant into a [`crate::PageResult`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("Page number is not an integer: {token:?}")]
    NotAnInteger { token: String },

    #[error("Page {page} is out of range (valid: 1..={num_pages})")]
    OutOfRange { page: i64, num_pages: u32 },

    #[error("Page size must be positive, got {per_page}")]
    InvalidPerPage { per_page: i64 },
}
