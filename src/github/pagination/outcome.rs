//! Result of an exhaustive pagination run.

use crate::github::error::FetchError;

use super::PageNumber;

/// Why a pagination run stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// A page shorter than the page size was returned.
    ShortPage,
    /// An empty page was returned (only under `TerminationRule::EmptyPage`).
    EmptyPage,
    /// Fetching a page failed; earlier pages were kept.
    Failed {
        /// Page whose fetch failed.
        page: PageNumber,
        /// Failure reported by the fetcher.
        error: FetchError,
    },
    /// The run was cancelled before fetching `page`.
    Cancelled {
        /// Page that would have been fetched next.
        page: PageNumber,
    },
}

/// Display-oriented summary of a [`Collected`] outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectionStatus {
    /// Every page was fetched; an empty collection is genuinely empty.
    Complete,
    /// Some pages were fetched before the run stopped early.
    Partial,
    /// Not a single page could be fetched.
    Unavailable,
}

/// Accumulated items plus how the run ended.
///
/// Items are in page order, then in within-page order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected<T> {
    items: Vec<T>,
    pages_fetched: u32,
    stop_reason: StopReason,
}

impl<T> Collected<T> {
    pub(crate) const fn new(items: Vec<T>, pages_fetched: u32, stop_reason: StopReason) -> Self {
        Self {
            items,
            pages_fetched,
            stop_reason,
        }
    }

    /// Borrow the accumulated items.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Consume the outcome and return the items.
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    /// Number of pages that were fetched successfully.
    #[must_use]
    pub const fn pages_fetched(&self) -> u32 {
        self.pages_fetched
    }

    /// Why the run stopped.
    #[must_use]
    pub const fn stop_reason(&self) -> &StopReason {
        &self.stop_reason
    }

    /// Returns true when the run stopped before the collection was exhausted.
    #[must_use]
    pub const fn truncated(&self) -> bool {
        matches!(
            self.stop_reason,
            StopReason::Failed { .. } | StopReason::Cancelled { .. }
        )
    }

    /// The failure that ended the run, if any.
    #[must_use]
    pub const fn last_error(&self) -> Option<&FetchError> {
        match &self.stop_reason {
            StopReason::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Summarises the outcome for display.
    #[must_use]
    pub const fn status(&self) -> CollectionStatus {
        if !self.truncated() {
            CollectionStatus::Complete
        } else if self.pages_fetched == 0 {
            CollectionStatus::Unavailable
        } else {
            CollectionStatus::Partial
        }
    }

    /// Maps every item, preserving order and stop reason.
    #[must_use]
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Collected<U> {
        Collected {
            items: self.items.into_iter().map(f).collect(),
            pages_fetched: self.pages_fetched,
            stop_reason: self.stop_reason,
        }
    }
}
