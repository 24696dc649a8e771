//! Helpers for reading raw GitHub responses.

use http::header::HeaderMap;
use serde::Deserialize;

use crate::github::rate_limit::RateLimitInfo;

const RATE_LIMIT_LIMIT: &str = "x-ratelimit-limit";
const RATE_LIMIT_REMAINING: &str = "x-ratelimit-remaining";
const RATE_LIMIT_RESET: &str = "x-ratelimit-reset";

/// Fields GitHub places in the JSON body of an error response.
///
/// Both are absent when the body is empty, HTML or plain text, as proxies
/// and load balancers in front of the API tend to send.
#[derive(Debug, Default, Deserialize)]
pub(super) struct GitHubErrorBody {
    pub(super) message: Option<String>,
    pub(super) documentation_url: Option<String>,
}

impl GitHubErrorBody {
    pub(super) fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }

    pub(super) fn mentions_rate_limit(&self) -> bool {
        self.message
            .as_deref()
            .is_some_and(|message| message.to_lowercase().contains("rate limit"))
            || self
                .documentation_url
                .as_deref()
                .is_some_and(|url| url.contains("rate-limit"))
    }
}

fn header_number<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|raw| raw.to_str().ok())
        .and_then(|value| value.trim().parse().ok())
}

/// Reads the quota GitHub reports in the `X-RateLimit-*` headers.
pub(super) fn rate_limit_from_headers(headers: &HeaderMap) -> Option<RateLimitInfo> {
    let limit = header_number(headers, RATE_LIMIT_LIMIT)?;
    let remaining = header_number(headers, RATE_LIMIT_REMAINING)?;
    let reset_at = header_number(headers, RATE_LIMIT_RESET)?;
    Some(RateLimitInfo::new(limit, remaining, reset_at))
}
