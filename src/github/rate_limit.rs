//! Quota snapshot attached to rate-limit failures.
//!
//! The snapshot is read from the `X-RateLimit-*` headers of the rejected
//! response. When a proxy strips those headers the gateway asks the
//! `/rate_limit` endpoint instead.

use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Core API quota for the current window.
///
/// # Example
///
/// ```
/// use repopulse::github::RateLimitInfo;
///
/// let info = RateLimitInfo::new(60, 0, 0);
/// assert!(info.is_exhausted());
/// assert_eq!(info.to_string(), "0 of 60 requests left, resets in 0s");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitInfo {
    limit: u32,
    remaining: u32,
    reset_at: u64,
}

impl RateLimitInfo {
    /// Creates a new rate limit snapshot.
    #[must_use]
    pub const fn new(limit: u32, remaining: u32, reset_at: u64) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Maximum requests allowed in the current window.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }

    /// Requests left in the current window.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Unix timestamp when the window resets.
    #[must_use]
    pub const fn reset_at(&self) -> u64 {
        self.reset_at
    }

    /// Returns true if no requests remain.
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Seconds until the window resets, or 0 if it already has.
    #[must_use]
    pub fn seconds_until_reset(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|duration| duration.as_secs())
            .unwrap_or(0);

        self.reset_at.saturating_sub(now)
    }
}

impl fmt::Display for RateLimitInfo {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "{remaining} of {limit} requests left, resets in {wait}s",
            remaining = self.remaining(),
            limit = self.limit(),
            wait = self.seconds_until_reset()
        )
    }
}
