//! Pagination extractor and the `X-Pagination` metadata envelope.

use axum::http::HeaderValue;
use rollcall_core::{PageInfo, PageRequest, RollcallError, RollcallResult};
use serde::{Deserialize, Serialize};

/// Name of the pagination metadata response header.
pub const X_PAGINATION: &str = "x-pagination";

/// Query parameters for pagination.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationQuery {
    #[serde(default)]
    pub page_number: Option<i64>,
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PaginationQuery {
    /// Validates the parameters into a page request.
    ///
    /// Out-of-range values are rejected, not clamped.
    pub fn into_page_request(self) -> RollcallResult<PageRequest> {
        let page_number = self.page_number.unwrap_or(1);
        let page_size = self
            .page_size
            .unwrap_or(PageRequest::DEFAULT_SIZE as i64);

        let page_number = usize::try_from(page_number)
            .ok()
            .filter(|n| *n >= 1)
            .ok_or_else(|| RollcallError::bad_request("pageNumber must be at least 1"))?;
        let page_size = usize::try_from(page_size)
            .ok()
            .filter(|s| (1..=PageRequest::MAX_SIZE).contains(s))
            .ok_or_else(|| {
                RollcallError::bad_request(format!(
                    "pageSize must be between 1 and {}",
                    PageRequest::MAX_SIZE
                ))
            })?;

        Ok(PageRequest::new(page_number, page_size))
    }
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page_number: Some(1),
            page_size: Some(PageRequest::DEFAULT_SIZE as i64),
        }
    }
}

/// Per-request pagination metadata, serialized into `X-Pagination`.
///
/// The previous-page link is absent (not null) on the first page. The
/// next-page link is always produced, even when no further data exists;
/// callers following it past the last page receive an empty page.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_page_link: Option<String>,
    pub next_page_link: String,
    pub total_count: u64,
    pub page_size: usize,
    pub current_page: usize,
    pub total_pages: u64,
}

impl PaginationMeta {
    /// Builds the envelope for a page served under `base_path`.
    #[must_use]
    pub fn new(base_path: &str, info: &PageInfo) -> Self {
        let link = |page_number: usize| {
            format!(
                "{}?pageNumber={}&pageSize={}",
                base_path, page_number, info.page_size
            )
        };

        Self {
            previous_page_link: info.has_previous().then(|| link(info.page_number - 1)),
            next_page_link: link(info.page_number + 1),
            total_count: info.total_count,
            page_size: info.page_size,
            current_page: info.page_number,
            total_pages: info.total_pages,
        }
    }

    /// Serializes the envelope into a header value.
    pub fn header_value(&self) -> RollcallResult<HeaderValue> {
        let json = serde_json::to_string(self)?;
        HeaderValue::from_str(&json)
            .map_err(|e| RollcallError::internal(format!("invalid header value: {}", e)))
    }
}
