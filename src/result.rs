//! Pagination DTOs
//!
//! The externally observable surface: the fixed status enumeration, the
//! structured result every computation returns, and the query-parameter
//! shape callers (e.g. HTTP handlers) deserialize requests into.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::computer::{DEFAULT_PAGE, DEFAULT_PER_PAGE};
use crate::paginator::PageToken;

/// Outcome of a pagination request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum PageStatus {
    /// The requested page was served.
    Success,
    /// The page parameter was not coercible to an integer.
    InvalidPageNumber,
    /// The page number failed the primitive's range check.
    OutOfRange,
    /// Unexpected failure during computation.
    Internal,
}

impl PageStatus {
    /// HTTP-style numeric code for this outcome.
    pub fn code(&self) -> u16 {
        match self {
            Self::Success => 200,
            Self::InvalidPageNumber => 400,
            Self::OutOfRange => 404,
            Self::Internal => 500,
        }
    }

    /// Map a numeric code back to the enumeration.
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            200 => Some(Self::Success),
            400 => Some(Self::InvalidPageNumber),
            404 => Some(Self::OutOfRange),
            500 => Some(Self::Internal),
            _ => None,
        }
    }
}

/// Structured outcome of one pagination request.
///
/// Always a plain value: failures are encoded in `status_code`/`msg`
/// with `items` left empty, never raised to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PageResult<T> {
    /// Items on the served page. Empty on any failure.
    pub items: Vec<T>,
    /// Page actually served (1-based; possibly clamped below the request).
    pub page: u32,
    /// Total number of pages for the input collection.
    pub total_pages: u32,
    /// Numeric outcome code, see [`PageStatus`].
    pub status_code: u16,
    /// Human-readable outcome description.
    pub msg: String,
}

impl<T> PageResult<T> {
    pub fn success(items: Vec<T>, page: u32, total_pages: u32) -> Self {
        Self {
            items,
            page,
            total_pages,
            status_code: PageStatus::Success.code(),
            msg: "Pagination successful".to_string(),
        }
    }

    pub fn invalid_page() -> Self {
        Self::failure(PageStatus::InvalidPageNumber, "Invalid page number format")
    }

    pub fn out_of_range() -> Self {
        Self::failure(PageStatus::OutOfRange, "Requested page is out of range")
    }

    pub fn internal(details: impl fmt::Display) -> Self {
        Self::failure(PageStatus::Internal, format!("Error: {details}"))
    }

    fn failure(status: PageStatus, msg: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            page: 1,
            total_pages: 0,
            status_code: status.code(),
            msg: msg.into(),
        }
    }

    /// Enum view of `status_code`. Codes outside the fixed enumeration
    /// read as [`PageStatus::Internal`].
    pub fn status(&self) -> PageStatus {
        PageStatus::from_code(self.status_code).unwrap_or(PageStatus::Internal)
    }

    pub fn is_success(&self) -> bool {
        self.status() == PageStatus::Success
    }
}

impl<T> fmt::Display for PageResult<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.page, self.total_pages)
    }
}

/// Pagination query parameters; the page may arrive as `3` or `"3"`.
#[derive(Debug, Clone, Deserialize, ToSchema, IntoParams)]
pub struct PageParams {
    /// Requested page (1-based). Default: 1
    #[serde(default = "default_page")]
    pub page: PageToken,
    /// Number of items per page. Default: 10
    #[serde(default = "default_per_page")]
    pub per_page: i64,
}

fn default_page() -> PageToken {
    PageToken::Number(i64::from(DEFAULT_PAGE))
}

fn default_per_page() -> i64 {
    i64::from(DEFAULT_PER_PAGE)
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_roundtrip() {
        for status in [
            PageStatus::Success,
            PageStatus::InvalidPageNumber,
            PageStatus::OutOfRange,
            PageStatus::Internal,
        ] {
            assert_eq!(PageStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(PageStatus::from_code(418), None);
    }

    #[test]
    fn success_result_shape() {
        let result = PageResult::success(vec!["a", "b"], 2, 5);
        assert_eq!(result.status(), PageStatus::Success);
        assert!(result.is_success());
        assert_eq!(result.to_string(), "Page 2 of 5");
    }

    #[test]
    fn failure_results_are_empty_page_one() {
        let result = PageResult::<String>::out_of_range();
        assert!(result.items.is_empty());
        assert_eq!(result.page, 1);
        assert_eq!(result.total_pages, 0);
        assert_eq!(result.status_code, 404);
        assert_eq!(result.msg, "Requested page is out of range");
    }

    #[test]
    fn internal_captures_details() {
        let result = PageResult::<i32>::internal("window size must be positive");
        assert_eq!(result.status_code, 500);
        assert_eq!(result.msg, "Error: window size must be positive");
    }

    #[test]
    fn serialized_field_names_match_the_contract() {
        let value = serde_json::to_value(PageResult::success(vec![1, 2], 1, 1)).unwrap();
        assert_eq!(value["items"], serde_json::json!([1, 2]));
        assert_eq!(value["page"], 1);
        assert_eq!(value["total_pages"], 1);
        assert_eq!(value["status_code"], 200);
        assert_eq!(value["msg"], "Pagination successful");
    }

    #[test]
    fn params_default_when_absent() {
        let params: PageParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.page, PageToken::Number(1));
        assert_eq!(params.per_page, 10);
    }

    #[test]
    fn params_accept_string_page() {
        let params: PageParams = serde_json::from_str(r#"{"page": "7", "per_page": 20}"#).unwrap();
        assert_eq!(params.page, PageToken::Text("7".into()));
        assert_eq!(params.per_page, 20);
    }
}
