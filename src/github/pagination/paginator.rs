//! Exhaustive pagination driver.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::github::error::FetchError;

use super::outcome::{Collected, StopReason};
use super::{PageNumber, PageRequest, PageSize};

/// Rule deciding when a pagination run has reached the end of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TerminationRule {
    /// Stop at the first page shorter than the page size.
    ///
    /// A final page that is exactly full costs one extra request that comes
    /// back empty.
    #[default]
    ShortPage,
    /// Stop only when a page comes back empty.
    EmptyPage,
}

impl TerminationRule {
    fn stop_after(self, page_len: usize, page_size: PageSize) -> Option<StopReason> {
        match self {
            Self::ShortPage if page_size.is_short(page_len) => Some(StopReason::ShortPage),
            Self::EmptyPage if page_len == 0 => Some(StopReason::EmptyPage),
            Self::ShortPage | Self::EmptyPage => None,
        }
    }
}

/// Shared flag that asks running paginations to stop before their next page.
#[derive(Debug, Clone, Default)]
pub struct CancellationFlag(Arc<AtomicBool>);

impl CancellationFlag {
    /// Creates a flag in the not-cancelled state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Returns true once cancellation has been requested.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Walks a page-numbered collection from page 1 until it is exhausted.
///
/// Exactly one page request is in flight at a time. Failures never escape:
/// they end the run and are reported through [`Collected::stop_reason`].
///
/// # Example
///
/// ```
/// use repopulse::github::pagination::{ExhaustivePaginator, PageSize};
///
/// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
/// let paginator = ExhaustivePaginator::new(PageSize::new(2).expect("valid size"));
/// let collected = paginator
///     .collect(|request| async move {
///         let items = match request.page_number.get() {
///             1 => vec!["a", "b"],
///             2 => vec!["c"],
///             _ => vec![],
///         };
///         Ok(items)
///     })
///     .await;
/// assert_eq!(collected.items(), &["a", "b", "c"]);
/// # });
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustivePaginator {
    page_size: PageSize,
    rule: TerminationRule,
    cancellation: Option<CancellationFlag>,
}

impl ExhaustivePaginator {
    /// Creates a paginator using the short-page termination rule.
    #[must_use]
    pub const fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            rule: TerminationRule::ShortPage,
            cancellation: None,
        }
    }

    /// Selects the termination rule.
    #[must_use]
    pub const fn with_rule(mut self, rule: TerminationRule) -> Self {
        self.rule = rule;
        self
    }

    /// Attaches a cancellation flag checked before every page fetch.
    #[must_use]
    pub fn with_cancellation(mut self, flag: CancellationFlag) -> Self {
        self.cancellation = Some(flag);
        self
    }

    /// Page size used for every request.
    #[must_use]
    pub const fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Active termination rule.
    #[must_use]
    pub const fn rule(&self) -> TerminationRule {
        self.rule
    }

    fn is_cancelled(&self) -> bool {
        self.cancellation
            .as_ref()
            .is_some_and(CancellationFlag::is_cancelled)
    }

    /// Fetches pages through `fetch_page` until the collection is exhausted,
    /// a fetch fails, or the run is cancelled.
    pub async fn collect<T, F, Fut>(&self, mut fetch_page: F) -> Collected<T>
    where
        F: FnMut(PageRequest) -> Fut,
        Fut: Future<Output = Result<Vec<T>, FetchError>>,
    {
        let mut items = Vec::new();
        let mut page_number = PageNumber::FIRST;
        let mut pages_fetched: u32 = 0;

        loop {
            if self.is_cancelled() {
                tracing::debug!(page = page_number.get(), "pagination cancelled");
                return Collected::new(
                    items,
                    pages_fetched,
                    StopReason::Cancelled { page: page_number },
                );
            }

            let request = PageRequest::new(page_number, self.page_size);
            let page = match fetch_page(request).await {
                Ok(page) => page,
                Err(error) => {
                    tracing::warn!(
                        page = page_number.get(),
                        collected = items.len(),
                        "pagination stopped early: {error}"
                    );
                    return Collected::new(
                        items,
                        pages_fetched,
                        StopReason::Failed {
                            page: page_number,
                            error,
                        },
                    );
                }
            };

            pages_fetched = pages_fetched.saturating_add(1);
            let page_len = page.len();
            tracing::debug!(page = page_number.get(), items = page_len, "fetched page");
            items.extend(page);

            if let Some(reason) = self.rule.stop_after(page_len, self.page_size) {
                return Collected::new(items, pages_fetched, reason);
            }

            page_number = page_number.next();
        }
    }
}
