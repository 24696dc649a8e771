//! Error types exposed by the GitHub fetch layer.

use thiserror::Error;

use super::rate_limit::RateLimitInfo;

/// Coarse classification of a [`FetchError`].
///
/// Consumers use the kind to decide how to present a failure without matching
/// on every concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The request could not complete (connection, DNS, TLS, timeout).
    Transport,
    /// GitHub answered with a non-success status (auth, rate limit, not found).
    Rejected,
    /// The response body did not match the expected shape.
    Malformed,
    /// The failure happened locally before or after talking to GitHub.
    Local,
}

/// Errors surfaced while preparing requests or communicating with GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The supplied URL could not be parsed.
    #[error("URL is invalid: {0}")]
    InvalidUrl(String),

    /// A repository path or login was incomplete.
    #[error("repository must be given as <owner>/<repo>")]
    MissingPathSegments,

    /// The user login was blank.
    #[error("user login is required")]
    MissingUserLogin,

    /// The authentication token was missing.
    #[error("personal access token is required")]
    MissingToken,

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// Rate limit exceeded - the API returned 403/429 with a rate limit message.
    #[error("GitHub API rate limit exceeded: {message}")]
    RateLimitExceeded {
        /// Rate limit info if it could be fetched after the failure.
        rate_limit: Option<RateLimitInfo>,
        /// Error message from GitHub.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// The response body could not be decoded.
    #[error("unexpected response from GitHub: {message}")]
    Decode {
        /// Deserialisation error detail.
        message: String,
    },

    /// Invalid pagination parameters.
    #[error("invalid pagination: {message}")]
    InvalidPagination {
        /// Description of the invalid parameter.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// Configuration could not be loaded or was inconsistent.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

impl FetchError {
    /// Classifies the error into the transport / rejection / payload taxonomy.
    ///
    /// # Example
    ///
    /// ```
    /// use repopulse::github::{FailureKind, FetchError};
    ///
    /// let error = FetchError::Network {
    ///     message: "connection reset".to_owned(),
    /// };
    /// assert_eq!(error.kind(), FailureKind::Transport);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Network { .. } => FailureKind::Transport,
            Self::Authentication { .. } | Self::RateLimitExceeded { .. } | Self::Api { .. } => {
                FailureKind::Rejected
            }
            Self::Decode { .. } => FailureKind::Malformed,
            Self::InvalidUrl(_)
            | Self::MissingPathSegments
            | Self::MissingUserLogin
            | Self::MissingToken
            | Self::InvalidPagination { .. }
            | Self::Io { .. }
            | Self::Configuration { .. } => FailureKind::Local,
        }
    }
}
