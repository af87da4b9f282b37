//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?page=&page_size=`), 1-based.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub page_size: Option<i64>,
}

impl PaginationParams {
    /// Clamp to sane bounds: `page >= 1`, `1 <= page_size <= 100`.
    pub fn clamp(&self) -> (i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let page_size = self.page_size.unwrap_or(10).clamp(1, 100);
        (page, page_size)
    }
}

/// `?search=` substring filter used by searchable listings.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}
