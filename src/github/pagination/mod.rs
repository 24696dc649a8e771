//! Page-numbered pagination over GitHub collection endpoints.
//!
//! This module provides the request-side types (`PageSize`, `PageNumber`,
//! `PageRequest`), the `PageInfo` view used when browsing one page at a time,
//! and the [`ExhaustivePaginator`] that walks a collection until a short page
//! signals exhaustion.

mod outcome;
mod paginator;

pub use outcome::{Collected, CollectionStatus, StopReason};
pub use paginator::{CancellationFlag, ExhaustivePaginator, TerminationRule};

use super::error::FetchError;

/// Largest `per_page` value the GitHub REST API accepts.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Number of items requested per page, in `1..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(u8);

impl PageSize {
    /// Validates a page size.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidPagination` when the value is zero or
    /// exceeds [`MAX_PAGE_SIZE`].
    ///
    /// # Example
    ///
    /// ```
    /// use repopulse::github::pagination::PageSize;
    ///
    /// assert!(PageSize::new(30).is_ok());
    /// assert!(PageSize::new(0).is_err());
    /// ```
    pub fn new(value: u8) -> Result<Self, FetchError> {
        if value == 0 {
            return Err(FetchError::InvalidPagination {
                message: "per_page must be at least 1".to_owned(),
            });
        }

        if value > MAX_PAGE_SIZE {
            return Err(FetchError::InvalidPagination {
                message: format!("per_page must not exceed {MAX_PAGE_SIZE}"),
            });
        }

        Ok(Self(value))
    }

    /// The largest page size, used to minimise round trips.
    #[must_use]
    pub const fn max() -> Self {
        Self(MAX_PAGE_SIZE)
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns true when a page of `len` items is shorter than this size.
    #[must_use]
    pub fn is_short(self, len: usize) -> bool {
        len < usize::from(self.0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(30)
    }
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Validates a page number.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidPagination` when the value is zero.
    pub fn new(value: u32) -> Result<Self, FetchError> {
        if value == 0 {
            return Err(FetchError::InvalidPagination {
                message: "page must be at least 1".to_owned(),
            });
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the following page number.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

/// One page request against a collection endpoint.
///
/// The collection itself (owner and name) is carried by the caller, usually
/// through a `RepositoryLocator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageRequest {
    /// Page to fetch.
    pub page_number: PageNumber,
    /// Items per page.
    pub page_size: PageSize,
}

impl PageRequest {
    /// Creates a page request.
    #[must_use]
    pub const fn new(page_number: PageNumber, page_size: PageSize) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Renders the `page` / `per_page` query parameters.
    #[must_use]
    pub fn query_values(&self) -> (String, String) {
        (
            self.page_number.get().to_string(),
            self.page_size.get().to_string(),
        )
    }
}

/// Position of a single page within a browsed collection.
///
/// Page-numbered endpoints do not report totals, so `has_next` is inferred
/// from a full page and `has_prev` from the page number.
///
/// # Example
///
/// ```
/// use repopulse::github::pagination::{PageInfo, PageNumber, PageRequest, PageSize};
///
/// let request = PageRequest::new(
///     PageNumber::new(2).expect("valid page"),
///     PageSize::new(30).expect("valid size"),
/// );
/// let info = PageInfo::for_page(request, 30);
/// assert!(info.has_prev());
/// assert!(info.has_next());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    /// Current page number (1-based).
    current_page: u32,
    /// Items per page.
    per_page: u8,
    /// Items actually returned on this page.
    item_count: usize,
}

impl PageInfo {
    /// Describes the page returned for `request` holding `item_count` items.
    #[must_use]
    pub const fn for_page(request: PageRequest, item_count: usize) -> Self {
        Self {
            current_page: request.page_number.get(),
            per_page: request.page_size.get(),
            item_count,
        }
    }

    /// Returns the current page number (1-based).
    #[must_use]
    pub const fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Returns the number of items per page.
    #[must_use]
    pub const fn per_page(&self) -> u8 {
        self.per_page
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    /// Returns true if another page may follow.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.item_count > 0 && !PageSize(self.per_page).is_short(self.item_count)
    }

    /// Returns true if pages exist before the current one.
    #[must_use]
    pub const fn has_prev(&self) -> bool {
        self.current_page > 1
    }

    /// Returns the previous page number when one exists.
    #[must_use]
    pub const fn prev_page(&self) -> Option<u32> {
        if self.has_prev() {
            Some(self.current_page - 1)
        } else {
            None
        }
    }

    /// Returns the next page number when one may exist.
    #[must_use]
    pub fn next_page(&self) -> Option<u32> {
        self.has_next().then(|| self.current_page.saturating_add(1))
    }
}
