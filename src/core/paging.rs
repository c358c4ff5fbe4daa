//! core::paging
//!
//! Page requests, page results, and an accumulating pager.
//!
//! # Semantics
//!
//! Pages are 1-based. Page `n` of size `s` is the slice
//! `(n-1)*s .. n*s` of the full collection, clamped to its bounds. The
//! `total` of a page is always the length of the full collection, so a
//! page past the end is empty but still reports the real total.
//!
//! # Example
//!
//! ```
//! use classblog::core::paging::PageRequest;
//!
//! let items = vec!["a", "b", "c"];
//! let page = PageRequest::new(2, 2).slice(&items);
//! assert_eq!(page.items, vec!["c"]);
//! assert_eq!(page.total, 3);
//! ```

use serde::{Deserialize, Serialize};

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Request for one page of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// 1-based page number. Page 0 selects nothing.
    pub page: u32,
    /// Maximum number of items per page.
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// First page with the given size.
    pub fn first(page_size: u32) -> Self {
        Self::new(1, page_size)
    }

    /// The request for the page after this one.
    pub fn next(&self) -> Self {
        Self::new(self.page.saturating_add(1), self.page_size)
    }

    /// Index range this request covers, before clamping.
    fn bounds(&self) -> Option<(usize, usize)> {
        if self.page == 0 {
            return None;
        }
        let size = self.page_size as usize;
        let start = (self.page as usize - 1).saturating_mul(size);
        Some((start, start.saturating_add(size)))
    }

    /// Cut this page out of a full collection.
    pub fn slice<T: Clone>(&self, items: &[T]) -> Page<T> {
        let selected = match self.bounds() {
            Some((start, end)) if start < items.len() => items[start..end.min(items.len())].to_vec(),
            _ => Vec::new(),
        };
        Page {
            items: selected,
            total: items.len(),
        }
    }
}

/// One page of a collection plus the collection's full length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page<T> {
    #[serde(rename = "data")]
    pub items: Vec<T>,
    pub total: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Accumulates consecutive pages of a listing.
///
/// Mirrors an infinite-scroll list: start at page 1, keep absorbing the
/// next page while fewer items are loaded than the reported total.
#[derive(Debug, Clone)]
pub struct Pager<T> {
    request: PageRequest,
    loaded: Vec<T>,
    total: Option<usize>,
    exhausted: bool,
}

impl<T> Pager<T> {
    pub fn new(page_size: u32) -> Self {
        Self {
            request: PageRequest::first(page_size),
            loaded: Vec::new(),
            total: None,
            exhausted: false,
        }
    }

    /// The request to issue next.
    pub fn next_request(&self) -> PageRequest {
        self.request
    }

    /// Append a fetched page and advance to the following one.
    pub fn absorb(&mut self, page: Page<T>) {
        self.total = Some(page.total);
        if page.items.is_empty() {
            self.exhausted = true;
        } else {
            self.request = self.request.next();
        }
        self.loaded.extend(page.items);
    }

    /// Whether another request could return more items.
    ///
    /// True before the first page has been absorbed. Stops once loaded
    /// reaches the total, or as soon as a page comes back empty while short.
    pub fn has_more(&self) -> bool {
        if self.exhausted {
            return false;
        }
        match self.total {
            None => self.request.page_size > 0,
            Some(total) => self.loaded.len() < total && self.request.page_size > 0,
        }
    }

    /// Drop everything and start over from page 1.
    pub fn reset(&mut self) {
        self.request = PageRequest::first(self.request.page_size);
        self.loaded.clear();
        self.total = None;
        self.exhausted = false;
    }

    pub fn loaded(&self) -> &[T] {
        &self.loaded
    }

    pub fn total(&self) -> Option<usize> {
        self.total
    }

    pub fn into_items(self) -> Vec<T> {
        self.loaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_is_first_page_of_ten() {
        assert_eq!(PageRequest::default(), PageRequest::new(1, 10));
    }

    #[test]
    fn first_page_holds_everything_when_small() {
        let page = PageRequest::new(1, 10).slice(&[1, 2]);
        assert_eq!(page.items, vec![1, 2]);
        assert_eq!(page.total, 2);
    }

    #[test]
    fn page_past_end_is_empty_with_real_total() {
        let page = PageRequest::new(2, 10).slice(&[1, 2]);
        assert!(page.is_empty());
        assert_eq!(page.total, 2);
    }

    #[test]
    fn page_zero_is_empty() {
        let page = PageRequest::new(0, 10).slice(&[1, 2, 3]);
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn zero_page_size_is_empty() {
        let page = PageRequest::new(1, 0).slice(&[1, 2, 3]);
        assert!(page.is_empty());
        assert_eq!(page.total, 3);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<u32> = (1..=7).collect();
        let page = PageRequest::new(3, 3).slice(&items);
        assert_eq!(page.items, vec![7]);
        assert_eq!(page.total, 7);
    }

    #[test]
    fn huge_page_number_does_not_overflow() {
        let page = PageRequest::new(u32::MAX, u32::MAX).slice(&[1]);
        assert!(page.is_empty());
    }

    #[test]
    fn page_serializes_items_as_data() {
        let page = PageRequest::new(1, 1).slice(&["x", "y"]);
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json, serde_json::json!({ "data": ["x"], "total": 2 }));
    }

    #[test]
    fn pager_walks_until_total() {
        let items: Vec<u32> = (1..=5).collect();
        let mut pager = Pager::new(2);
        let mut requests = 0;
        while pager.has_more() {
            let page = pager.next_request().slice(&items);
            pager.absorb(page);
            requests += 1;
        }
        assert_eq!(requests, 3);
        assert_eq!(pager.loaded(), &[1, 2, 3, 4, 5]);
        assert_eq!(pager.total(), Some(5));
    }

    #[test]
    fn pager_on_empty_collection_stops_after_one_request() {
        let items: Vec<u32> = Vec::new();
        let mut pager = Pager::new(10);
        assert!(pager.has_more());
        pager.absorb(pager.next_request().slice(&items));
        assert!(!pager.has_more());
        assert!(pager.loaded().is_empty());
    }

    #[test]
    fn pager_stops_on_short_empty_page() {
        let mut pager: Pager<u32> = Pager::new(2);
        pager.absorb(Page {
            items: vec![1, 2],
            total: 10,
        });
        assert!(pager.has_more());
        pager.absorb(Page {
            items: vec![],
            total: 10,
        });
        assert!(!pager.has_more());
        assert_eq!(pager.loaded(), &[1, 2]);
    }

    #[test]
    fn pager_reset_starts_over() {
        let items = vec![1, 2, 3];
        let mut pager = Pager::new(2);
        pager.absorb(pager.next_request().slice(&items));
        assert_eq!(pager.next_request().page, 2);

        pager.reset();
        assert_eq!(pager.next_request(), PageRequest::first(2));
        assert!(pager.loaded().is_empty());
        assert_eq!(pager.total(), None);
    }
}
