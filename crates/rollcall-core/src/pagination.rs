//! Pagination types for list operations.

use serde::{Deserialize, Serialize};

/// A request for a page of results.
///
/// Page numbers are 1-indexed on the wire and internally.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageRequest {
    /// The page number (1-indexed).
    pub page_number: usize,
    /// The number of items per page.
    pub page_size: usize,
}

impl PageRequest {
    /// The default page size.
    pub const DEFAULT_SIZE: usize = 10;
    /// The maximum allowed page size.
    pub const MAX_SIZE: usize = 20;

    /// Creates a new page request.
    ///
    /// Bounds are not clamped here; out-of-range values are rejected with a
    /// bad-request error at the HTTP boundary.
    #[must_use]
    pub const fn new(page_number: usize, page_size: usize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Creates a page request for the first page with default size.
    #[must_use]
    pub const fn first() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }

    /// Returns the offset into the ordered collection.
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.page_number.saturating_sub(1) * self.page_size
    }

    /// Returns the maximum number of items on the page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Information about a page of results.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PageInfo {
    /// The current page number (1-indexed).
    pub page_number: usize,
    /// The number of items per page.
    pub page_size: usize,
    /// The total number of items across all pages.
    pub total_count: u64,
    /// The total number of pages.
    pub total_pages: u64,
}

impl PageInfo {
    /// Creates a new page info.
    ///
    /// `total_pages` is the floor of `total_count / page_size`, matching the
    /// wire contract (a final short page is not counted).
    #[must_use]
    pub fn new(page_number: usize, page_size: usize, total_count: u64) -> Self {
        let total_pages = if page_size > 0 {
            total_count / page_size as u64
        } else {
            0
        };

        Self {
            page_number,
            page_size,
            total_count,
            total_pages,
        }
    }

    /// Returns true if a previous page exists.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page_number > 1
    }
}

/// A page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// The items on this page.
    pub content: Vec<T>,
    /// Information about this page.
    #[serde(flatten)]
    pub info: PageInfo,
}

impl<T> Page<T> {
    /// Creates a new page.
    #[must_use]
    pub fn new(content: Vec<T>, page_number: usize, page_size: usize, total_count: u64) -> Self {
        Self {
            content,
            info: PageInfo::new(page_number, page_size, total_count),
        }
    }

    /// Creates an empty page.
    #[must_use]
    pub fn empty(page_number: usize, page_size: usize) -> Self {
        Self::new(Vec::new(), page_number, page_size, 0)
    }

    /// Maps the page content to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            info: self.info,
        }
    }

    /// Returns true if the page is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns the total number of items across all pages.
    #[must_use]
    pub const fn total_count(&self) -> u64 {
        self.info.total_count
    }

    /// Returns the total number of pages.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.info.total_pages
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty(1, PageRequest::DEFAULT_SIZE)
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.content.into_iter()
    }
}
