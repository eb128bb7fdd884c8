//! Client-side pagination over a full result list.

use serde::{Deserialize, Serialize};

/// One page of a result list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Page<'a, T> {
    /// Items visible on this page.
    pub slice: &'a [T],
    /// Requested page (1-indexed, not clamped).
    pub page: usize,
    /// Total number of pages; zero for an empty list.
    pub page_count: usize,
}

/// Number of pages needed for `total` items. A page size of zero counts
/// as one.
pub fn page_count(total: usize, page_size: usize) -> usize {
    total.div_ceil(page_size.max(1))
}

/// Slice out page `page` of `items`.
///
/// Page 0, or a page past the end, yields an empty slice; the page number
/// itself is passed through untouched.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Page<'_, T> {
    let page_size = page_size.max(1);
    let slice = match page.checked_sub(1) {
        Some(index) => {
            let start = index.saturating_mul(page_size).min(items.len());
            let end = start.saturating_add(page_size).min(items.len());
            &items[start..end]
        }
        None => &items[..0],
    };

    Page {
        slice,
        page,
        page_count: page_count(items.len(), page_size),
    }
}

/// Pagination info for rendering the page control.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = page_count(total, per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page <= 1
    }

    /// Check if on (or past) the last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), zero when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.page == 0 || self.end_item() == 0 {
            return 0;
        }
        let start = (self.page - 1) * self.per_page + 1;
        if start > self.total {
            0
        } else {
            start
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }

    /// Links of the page control: Previous, every page number, Next.
    pub fn links(&self) -> Vec<PageLink> {
        let mut links = Vec::with_capacity(self.total_pages + 2);

        links.push(PageLink::Previous {
            target: self.page.saturating_sub(1),
            disabled: self.is_first(),
        });

        for page in 1..=self.total_pages {
            links.push(PageLink::Number {
                page,
                active: page == self.page,
            });
        }

        links.push(PageLink::Next {
            target: self.page.saturating_add(1),
            disabled: self.is_last(),
        });

        links
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, super::DEFAULT_PAGE_SIZE, 0)
    }
}

/// One entry of the page control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLink {
    Previous { target: usize, disabled: bool },
    Number { page: usize, active: bool },
    Next { target: usize, disabled: bool },
}
