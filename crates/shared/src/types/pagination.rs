//! Pagination types for list endpoints.

use serde::{Deserialize, Serialize};

/// Request parameters for paginated list queries.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    /// Page number (1-indexed).
    #[serde(default = "default_page")]
    pub page: u32,
    /// Number of items per page (capped at 100).
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    /// Optional case-insensitive search term.
    #[serde(default)]
    pub search: Option<String>,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

/// Maximum page size accepted from clients.
const MAX_PER_PAGE: u32 = 100;

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
            search: None,
        }
    }
}

impl PageRequest {
    /// Number of items to skip before the current page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.saturating_sub(1) as usize) * self.limit()
    }

    /// Effective page size, clamped to the maximum.
    #[must_use]
    pub fn limit(&self) -> usize {
        self.per_page.clamp(1, MAX_PER_PAGE) as usize
    }
}

/// Response wrapper for paginated data.
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse<T> {
    /// The items in the current page.
    pub data: Vec<T>,
    /// Pagination metadata.
    pub meta: PageMeta,
}

/// Pagination metadata.
#[derive(Debug, Clone, Serialize)]
pub struct PageMeta {
    /// Current page number.
    pub page: u32,
    /// Items per page.
    pub per_page: u32,
    /// Total number of items across all pages.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResponse<T> {
    /// Wraps one page of items with its metadata.
    #[must_use]
    pub fn new(data: Vec<T>, request: &PageRequest, total: usize) -> Self {
        let per_page = request.limit() as u32;
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page as usize) as u32
        };

        Self {
            data,
            meta: PageMeta {
                page: request.page.max(1),
                per_page,
                total,
                total_pages,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(1, 20, 0)]
    #[case(2, 20, 20)]
    #[case(3, 50, 100)]
    fn test_offset(#[case] page: u32, #[case] per_page: u32, #[case] expected: usize) {
        let request = PageRequest {
            page,
            per_page,
            search: None,
        };
        assert_eq!(request.offset(), expected);
    }

    #[test]
    fn test_per_page_is_clamped() {
        let request = PageRequest {
            page: 1,
            per_page: 5000,
            search: None,
        };
        assert_eq!(request.limit(), 100);

        let request = PageRequest {
            page: 1,
            per_page: 0,
            search: None,
        };
        assert_eq!(request.limit(), 1);
    }

    #[test]
    fn test_total_pages_rounds_up() {
        let response = PageResponse::new(vec![1, 2, 3], &PageRequest::default(), 41);
        assert_eq!(response.meta.total_pages, 3);
        assert_eq!(response.meta.total, 41);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let response: PageResponse<u8> = PageResponse::new(vec![], &PageRequest::default(), 0);
        assert_eq!(response.meta.total_pages, 1);
    }
}
