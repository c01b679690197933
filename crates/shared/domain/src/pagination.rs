//! Pagination types for list endpoints.

use serde::Serialize;

use crate::constants::{DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, MAX_OFFSET, MAX_PAGE_SIZE};
#[cfg(feature = "openapi")]
use crate::employee::Employee;

/// Normalised page request.
///
/// Built from untrusted input: missing or non-positive pages become the
/// first page, missing or non-positive sizes become the default size and
/// oversized requests are capped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub page_size: u64,
}

impl PageRequest {
    pub fn normalize(page: Option<i64>, page_size: Option<i64>) -> Self {
        let page = match page {
            Some(p) if p >= 1 => p as u64,
            _ => DEFAULT_PAGE_NUMBER,
        };
        let page_size = match page_size {
            Some(s) if s >= 1 => (s as u64).min(MAX_PAGE_SIZE),
            _ => DEFAULT_PAGE_SIZE,
        };

        Self { page, page_size }
    }

    /// Calculate offset for database query.
    ///
    /// Capped at `i64::MAX` since storage binds offsets as signed 64-bit;
    /// pages past the cap simply come back empty.
    pub fn offset(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_OFFSET)
    }

    /// Rows to fetch
    pub fn limit(&self) -> u64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE_NUMBER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Paginated response wrapper
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[cfg_attr(feature = "openapi", aliases(EmployeePage = Paginated<Employee>))]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: u64,
    pub page_size: u64,
    pub total_pages: u64,
    pub total_records: u64,
}

impl<T> Paginated<T> {
    /// Create new paginated response
    pub fn new(data: Vec<T>, request: PageRequest, total: u64) -> Self {
        let total_pages = if request.page_size > 0 {
            total.div_ceil(request.page_size)
        } else {
            0
        };

        Self {
            data,
            pagination: PaginationMeta {
                current_page: request.page,
                page_size: request.page_size,
                total_pages,
                total_records: total,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_absent() {
        let request = PageRequest::normalize(None, None);
        assert_eq!(request, PageRequest { page: 1, page_size: 10 });
        assert_eq!(request.offset(), 0);
    }

    #[test]
    fn non_positive_values_fall_back_to_defaults() {
        assert_eq!(PageRequest::normalize(Some(0), Some(0)), PageRequest::default());
        assert_eq!(PageRequest::normalize(Some(-3), Some(-1)), PageRequest::default());
    }

    #[test]
    fn page_size_is_capped() {
        let request = PageRequest::normalize(Some(2), Some(500));
        assert_eq!(request.page_size, 100);
        assert_eq!(request.offset(), 100);
    }

    #[test]
    fn huge_page_offset_fits_signed_storage() {
        let request = PageRequest::normalize(Some(i64::MAX), Some(10));
        assert_eq!(request.page, i64::MAX as u64);
        assert_eq!(request.offset(), i64::MAX as u64);
        assert!(i64::try_from(request.offset()).is_ok());

        let request = PageRequest::normalize(Some(i64::MAX), Some(100));
        assert_eq!(request.offset(), i64::MAX as u64);
    }

    #[test]
    fn offset_follows_page() {
        let request = PageRequest::normalize(Some(3), Some(25));
        assert_eq!(request.offset(), 50);
        assert_eq!(request.limit(), 25);
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest::normalize(Some(1), Some(10));
        assert_eq!(Paginated::new(vec![0u8; 10], request, 21).pagination.total_pages, 3);
        assert_eq!(Paginated::<u8>::new(vec![], request, 20).pagination.total_pages, 2);
        assert_eq!(Paginated::<u8>::new(vec![], request, 0).pagination.total_pages, 0);
    }

    #[test]
    fn meta_serializes_camel_case() {
        let page = Paginated::new(vec![1, 2], PageRequest::default(), 2);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["pagination"]["currentPage"], 1);
        assert_eq!(json["pagination"]["pageSize"], 10);
        assert_eq!(json["pagination"]["totalPages"], 1);
        assert_eq!(json["pagination"]["totalRecords"], 2);
        assert_eq!(json["data"].as_array().unwrap().len(), 2);
    }
}
