//! # Texnouz Paging Kit
//!
//! Deterministic page computation over in-memory collections: given a
//! slice, a window size and a requested page number, produce the items
//! of that page plus metadata (page actually served, total page count)
//! and a status outcome.
//!
//! ## Architecture
//!
//! - **paginator**: the strict low-level primitive (windows, boundary checks)
//! - **computer**: the lenient request policy (normalization, clamping,
//!   error translation)
//! - **result**: the DTO surface consumed by callers (e.g. HTTP handlers)
//! - **error**: the primitive's error taxonomy
//!
//! Failures never propagate: [`PageComputer::compute`] always returns a
//! [`PageResult`] whose `status_code`/`msg` describe the outcome.
//!
//! ```
//! use texnouz_paging::paginate;
//!
//! let items: Vec<i64> = (1..=25).collect();
//! let result = paginate(&items, 10, 2);
//! assert_eq!(result.items, (11..=20).collect::<Vec<_>>());
//! assert_eq!(result.page, 2);
//! assert_eq!(result.total_pages, 3);
//! assert_eq!(result.status_code, 200);
//! ```

pub mod computer;
pub mod error;
pub mod paginator;
pub mod result;

pub use computer::{paginate, PageComputer, DEFAULT_PAGE, DEFAULT_PER_PAGE};
pub use error::PageError;
pub use paginator::{Page, PageToken, Paginator};
pub use result::{PageParams, PageResult, PageStatus};
