//! The pagination envelope returned by listing endpoints.

use serde::{Deserialize, Serialize};

/// A single page of results plus pagination metadata.
///
/// The backend returns `{ data, total, totalPages, page }`. The metadata
/// fields are optional on purpose: a partial envelope degrades pagination
/// controls (callers see `None` and disable "next") rather than failing
/// to decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// The items on this page, in backend order.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total matching items across all pages, when the backend sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Total page count, when the backend sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u32>,
    /// The page number this envelope describes, when the backend sent it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl<T> Page<T> {
    /// Returns an empty page with no metadata.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            total: None,
            total_pages: None,
            page: None,
        }
    }

    /// Number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true when the page carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The `has_more` derivation: a page is full exactly when it returned
    /// `page_size` items, which is the signal that another page may exist.
    #[must_use]
    pub fn is_full(&self, page_size: u32) -> bool {
        self.data.len() == page_size as usize
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}
