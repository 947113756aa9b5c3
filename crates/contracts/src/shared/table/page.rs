use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination state of a screen (1-based page index)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageState {
    pub page_size: usize,
    pub current_page: usize,
}

impl PageState {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            current_page: 1,
        }
    }

    /// Index range of the current page before clipping to the list length
    pub fn window(&self) -> (usize, usize) {
        let start = self.current_page.saturating_sub(1).saturating_mul(self.page_size);
        (start, start.saturating_add(self.page_size))
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// Summary rendered by the pagination controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub page_size: usize,
}

impl PageInfo {
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// 1-based positions of the first and last visible row, `None` when empty
    pub fn visible_range(&self) -> Option<(usize, usize)> {
        if self.total_count == 0 {
            return None;
        }
        let first = self.current_page.saturating_sub(1) * self.page_size + 1;
        let last = (self.current_page * self.page_size).min(self.total_count);
        (first <= last).then_some((first, last))
    }
}
