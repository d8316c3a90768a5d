//! Pagination envelope shared by list endpoints.
//!
//! List endpoints wrap their items in one of three shapes:
//!
//! | Shape | Example |
//! |-------|---------|
//! | Nested | `{"pagination": {...}, "results": [...]}` |
//! | Data key | `{"page": 1, ..., "data": [...]}` |
//! | Inline | `{"page": 1, ..., "results": [...]}` |
//!
//! [`PaginatedResult::from_value`] normalizes all three.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Page position metadata for a list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pagination {
    /// Current page, 1-based.
    #[serde(default = "default_page")]
    pub page: i64,
    /// Items per page.
    #[serde(default = "default_page_size")]
    pub page_size: i64,
    /// Total items across all pages.
    #[serde(default)]
    pub total_count: i64,
    /// Total number of pages.
    #[serde(default)]
    pub total_pages: i64,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    10
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            page: 1,
            page_size: 10,
            total_count: 0,
            total_pages: 0,
        }
    }
}

/// One page of hydrated results plus its [`Pagination`].
#[derive(Debug, Clone, PartialEq)]
pub struct PaginatedResult<T> {
    /// Position of this page.
    pub pagination: Pagination,
    /// Hydrated items on this page.
    pub results: Vec<T>,
}

impl<T: DeserializeOwned> PaginatedResult<T> {
    /// Hydrate a page from a raw list response, accepting any of the
    /// three wire shapes.
    pub fn from_value(raw: Value) -> Result<Self> {
        let pagination = match raw.get("pagination") {
            Some(nested) => serde_json::from_value(nested.clone()).map_err(Error::decode)?,
            None if raw.is_object() => {
                serde_json::from_value(raw.clone()).map_err(Error::decode)?
            }
            None => Pagination::default(),
        };

        let items = raw
            .get("results")
            .or_else(|| raw.get("data"))
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new()));
        let results = serde_json::from_value(items).map_err(Error::decode)?;

        Ok(PaginatedResult {
            pagination,
            results,
        })
    }
}

impl<T> PaginatedResult<T> {
    /// Whether a page follows this one.
    pub fn has_next_page(&self) -> bool {
        self.pagination.page < self.pagination.total_pages
    }

    /// Whether a page precedes this one.
    pub fn has_previous_page(&self) -> bool {
        self.pagination.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_pagination_defaults() {
        let pagination: Pagination = serde_json::from_value(json!({})).unwrap();
        assert_eq!(pagination.page, 1);
        assert_eq!(pagination.page_size, 10);
        assert_eq!(pagination.total_count, 0);
        assert_eq!(pagination.total_pages, 0);
    }

    #[test]
    fn test_from_value_nested_pagination() {
        let raw = json!({
            "pagination": {"page": 2, "page_size": 10, "total_count": 35, "total_pages": 4},
            "results": [{"x": 1}, {"x": 2}],
        });
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert_eq!(page.pagination.page, 2);
        assert_eq!(page.results.len(), 2);
    }

    #[test]
    fn test_from_value_data_key() {
        let raw = json!({"page": 1, "total_pages": 1, "data": [{"x": 1}]});
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert_eq!(page.results.len(), 1);
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn test_from_value_inline_pagination_fields() {
        let raw = json!({"page": 3, "page_size": 5, "total_pages": 3, "results": []});
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert_eq!(page.pagination.page, 3);
        assert_eq!(page.pagination.page_size, 5);
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_from_value_missing_items_yields_empty_page() {
        let raw = json!({"page": 1});
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_from_value_bare_array_degrades_to_empty_page() {
        let raw = json!([{"x": 1}]);
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert_eq!(page.pagination, Pagination::default());
        assert!(page.results.is_empty());
    }

    #[test]
    fn test_page_navigation() {
        let raw = json!({"page": 2, "total_pages": 4, "results": []});
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert!(page.has_next_page());
        assert!(page.has_previous_page());

        let raw = json!({"page": 1, "total_pages": 1, "results": []});
        let page: PaginatedResult<Value> = PaginatedResult::from_value(raw).unwrap();
        assert!(!page.has_next_page());
        assert!(!page.has_previous_page());
    }
}
