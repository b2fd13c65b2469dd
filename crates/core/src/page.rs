use serde::{Deserialize, Serialize};

use crate::query::ApiQuery;

/// One page of a listed resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    pub data: Vec<T>,
    /// Total item count across all pages, passed through from the backend
    /// unchanged.
    pub total: u64,
}

impl<T> Page<T> {
    /// Creates a page from items and the backend-reported total.
    #[must_use]
    pub fn new(data: Vec<T>, total: u64) -> Self {
        Self { data, total }
    }

    /// Returns whether the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Plain pagination query.
///
/// `page` is 1-based everywhere on the client. The transport translates it
/// to the backend's 0-based convention when the request is serialized, and
/// nowhere else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u32,
    /// Number of items per page.
    pub size: u32,
}

impl PageQuery {
    /// Creates a pagination query for a 1-based page number.
    #[must_use]
    pub fn new(page: u32, size: u32) -> Self {
        Self { page, size }
    }
}

impl ApiQuery for PageQuery {
    fn page(&self) -> Option<u32> {
        Some(self.page)
    }

    fn size(&self) -> Option<u32> {
        Some(self.size)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{ApiQuery, Page, PageQuery};

    #[test]
    fn page_total_is_decoded_verbatim() {
        let page: Page<String> = serde_json::from_value(json!({
            "data": ["a", "b"],
            "total": 37,
        }))
        .unwrap_or_else(|error| panic!("decode failed: {error}"));

        assert_eq!(page.data.len(), 2);
        assert_eq!(page.total, 37);
    }

    #[test]
    fn empty_page_reports_empty() {
        let page: Page<u32> = Page::new(Vec::new(), 0);
        assert!(page.is_empty());
    }

    #[test]
    fn page_query_exposes_both_parts() {
        let query = PageQuery::new(3, 10);
        assert_eq!(query.page(), Some(3));
        assert_eq!(query.size(), Some(10));
        assert!(query.params().is_empty());
    }
}
