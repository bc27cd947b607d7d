//! # Pagination
//!
//! [`PageLimits::normalize`] is the page normalizer: it maps a loosely specified,
//! 1-based page number and an optional size onto a bounded, 0-based [`PageRequest`].
//!
//! | Input | Result |
//! |-------|--------|
//! | number absent or `<= 0` | index 0 |
//! | number `n > 0` | index `n - 1` |
//! | size absent or `<= 0` | `default_size` |
//! | size `> max_size` | `max_size` |

use serde::Serialize;

pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const MAX_PAGE_SIZE: usize = 1000;

/// Bounds applied by the page normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLimits {
    pub default_size: usize,
    pub max_size: usize,
}

impl Default for PageLimits {
    fn default() -> Self {
        Self {
            default_size: DEFAULT_PAGE_SIZE,
            max_size: MAX_PAGE_SIZE,
        }
    }
}

impl PageLimits {
    /// Canonicalizes caller input. Pure and infallible.
    pub fn normalize(&self, page_number: Option<i64>, page_size: Option<i64>) -> PageRequest {
        let index = match page_number {
            Some(n) if n > 0 => usize::try_from(n - 1).unwrap_or(usize::MAX),
            _ => 0,
        };
        let size = match page_size {
            Some(s) if s > 0 => usize::try_from(s)
                .unwrap_or(usize::MAX)
                .min(self.max_size),
            _ => self.default_size,
        };
        PageRequest { index, size }
    }
}

/// A bounded, 0-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageRequest {
    pub index: usize,
    pub size: usize,
}

impl PageRequest {
    pub fn new(index: usize, size: usize) -> Self {
        Self { index, size }
    }

    /// Number of matching elements to skip.
    pub fn offset(&self) -> usize {
        self.index.saturating_mul(self.size)
    }
}

/// One page of results plus the total number of matches across all pages.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub content: Vec<T>,
    pub index: usize,
    pub size: usize,
    pub total_elements: usize,
}

impl<T> Page<T> {
    /// Slices `matches` according to `request`, counting every element.
    pub fn from_matches<I>(matches: I, request: PageRequest) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut total_elements = 0;
        let mut content = Vec::new();
        let offset = request.offset();
        for item in matches {
            if total_elements >= offset && content.len() < request.size {
                content.push(item);
            }
            total_elements += 1;
        }
        Self {
            content,
            index: request.index,
            size: request.size,
            total_elements,
        }
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            index: self.index,
            size: self.size,
            total_elements: self.total_elements,
        }
    }

    pub fn total_pages(&self) -> usize {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(self.size)
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.total_pages()
    }
}
