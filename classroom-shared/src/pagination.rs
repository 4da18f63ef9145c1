/// Page-number pagination over insertion-ordered collections
///
/// A page is addressed by a 1-based `page` number and a `size`:
///
/// ```text
/// start = (page - 1) * size
/// end   = start + size
/// ```
///
/// The slice `[start, end)` is clamped to the collection, so a page past the
/// end yields an empty slice rather than an error.
///
/// # Example
///
/// ```
/// use classroom_shared::pagination::Page;
///
/// let items = [1, 2, 3, 4, 5];
/// let page = Page::new(2, 2).unwrap();
/// assert_eq!(page.slice(&items), &[3, 4]);
/// ```

use thiserror::Error;

/// Default page size for the user listing
pub const DEFAULT_USER_PAGE_SIZE: i64 = 20;

/// Default page size for the order listing
pub const DEFAULT_ORDER_PAGE_SIZE: i64 = 10;

/// Pagination errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Page number below 1
    #[error("page must be greater than or equal to 1")]
    InvalidPage,

    /// Page size below 1
    #[error("size must be greater than or equal to 1")]
    InvalidSize,
}

/// A validated page request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: u64,
    size: u64,
}

impl Page {
    /// Builds a page request, rejecting non-positive values
    pub fn new(page: i64, size: i64) -> Result<Self, PageError> {
        if page < 1 {
            return Err(PageError::InvalidPage);
        }
        if size < 1 {
            return Err(PageError::InvalidSize);
        }

        Ok(Self {
            page: page as u64,
            size: size as u64,
        })
    }

    /// Index of the first record on this page (may be past the end)
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.size)
    }

    /// Returns this page of `items`
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let len = items.len() as u64;
        let start = self.offset().min(len);
        let end = start.saturating_add(self.size).min(len);
        &items[start as usize..end as usize]
    }
}
