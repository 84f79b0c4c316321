//! Pagination summary

use std::fmt;

/// Where the current page sits in the filtered result.
///
/// `page` is 1-based and always within `1..=total_pages`; `total_pages` is
/// at least 1 even for an empty result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page (1-based).
    pub page: usize,
    /// Number of pages, never 0.
    pub total_pages: usize,
    /// Number of records matching the current search.
    pub total_items: usize,
}

impl PageInfo {
    pub fn new(page: usize, total_pages: usize, total_items: usize) -> Self {
        Self {
            page,
            total_pages,
            total_items,
        }
    }

    /// Whether "previous" is enabled.
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether "next" is enabled.
    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Pagination label, e.g. `"Page 1 of 10"`.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl Default for PageInfo {
    fn default() -> Self {
        Self::new(1, 1, 0)
    }
}

impl fmt::Display for PageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Page {} of {}", self.page, self.total_pages)
    }
}
