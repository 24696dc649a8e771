//! Error mapping helpers for the Octocrab GitHub gateway implementation.

use http::StatusCode;

use crate::github::error::FetchError;
use crate::github::rate_limit::RateLimitInfo;

use super::http_utils::GitHubErrorBody;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether a rejected response is a quota rejection, either because
/// the body says so or because the headers report an exhausted window.
pub(super) fn is_rate_limit_response(
    status: StatusCode,
    body: &GitHubErrorBody,
    header_snapshot: Option<&RateLimitInfo>,
) -> bool {
    let is_rate_limit_status = matches!(
        status,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    is_rate_limit_status
        && (body.mentions_rate_limit() || header_snapshot.is_some_and(RateLimitInfo::is_exhausted))
}

/// Maps a non-success status to an authentication or API failure.
pub(super) fn map_http_error(
    operation: &str,
    status: StatusCode,
    maybe_message: Option<String>,
) -> FetchError {
    let message = maybe_message.unwrap_or_else(|| "unknown error".to_owned());
    if is_auth_failure(status) {
        FetchError::Authentication {
            message: format!("{operation} failed: GitHub returned {status} {message}"),
        }
    } else {
        FetchError::Api {
            message: format!("{operation} failed with status {status}: {message}"),
        }
    }
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> FetchError {
    if let octocrab::Error::GitHub { source, .. } = error {
        return map_http_error(operation, source.status_code, Some(source.message.clone()));
    }

    if is_network_error(error) {
        return FetchError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    FetchError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
