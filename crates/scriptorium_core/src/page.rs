//! Pagination for book listings.

use serde::{Deserialize, Serialize};

/// Page selector, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Page {
    /// Page number starting at 1
    #[serde(default = "default_page")]
    pub page: u32,
    /// Items per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    Page::DEFAULT_SIZE
}

impl Page {
    /// Page size used when the caller gives none.
    pub const DEFAULT_SIZE: u32 = 20;
    /// Largest page size honoured.
    pub const MAX_SIZE: u32 = 100;

    /// Build a page selector, clamping out-of-range values.
    ///
    /// # Examples
    ///
    /// ```
    /// use scriptorium_core::Page;
    ///
    /// let page = Page::new(0, 1000);
    /// assert_eq!(page.page, 1);
    /// assert_eq!(page.page_size, Page::MAX_SIZE);
    /// assert_eq!(Page::new(3, 10).offset(), 20);
    /// ```
    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.clamp(1, Self::MAX_SIZE),
        }
    }

    /// Number of items to skip.
    pub fn offset(&self) -> usize {
        let normalized = Self::new(self.page, self.page_size);
        (normalized.page as usize - 1) * normalized.page_size as usize
    }

    /// Number of items to take.
    pub fn limit(&self) -> usize {
        self.page_size.clamp(1, Self::MAX_SIZE) as usize
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1, Self::DEFAULT_SIZE)
    }
}
