//! On-screen page slices.
//!
//! Pagination only ever narrows what a table shows. Totals and exports are
//! computed over the whole set before a page is cut.

use serde::{Deserialize, Serialize};

/// Page selector (1-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Page number, starting at 1. Zero is treated as 1.
    #[serde(default = "default_page")]
    pub page: u32,
    /// Rows per page. Zero is treated as 1.
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    25
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, per_page: u32) -> Self {
        Self { page, per_page }
    }

    /// Index of the first row on this page.
    #[must_use]
    pub fn offset(&self) -> usize {
        (self.page.max(1) as usize - 1) * self.limit()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.per_page.max(1) as usize
    }
}

/// One page of rows plus the size of the whole set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    /// Rows across all pages.
    pub total: usize,
    pub total_pages: u32,
}

impl<T> Page<T> {
    /// Cut the requested page out of `all`.
    pub fn slice(all: &[T], request: PageRequest) -> Self
    where
        T: Clone,
    {
        let total = all.len();
        let limit = request.limit();
        let total_pages = total.div_ceil(limit).max(1) as u32;
        let start = request.offset().min(total);
        let end = (start + limit).min(total);
        Self {
            items: all[start..end].to_vec(),
            page: request.page.max(1),
            per_page: limit as u32,
            total,
            total_pages,
        }
    }
}
