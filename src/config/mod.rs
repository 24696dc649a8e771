//! Application configuration loaded from CLI, environment, and files.
//!
//! This module provides a unified configuration struct that merges values
//! from command-line arguments, environment variables, and configuration
//! files using ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.repopulse.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `REPOPULSE_OWNER`, `REPOPULSE_TOKEN`, or
//!    legacy `GITHUB_TOKEN`
//! 4. **Command-line arguments** – `--owner`/`-o`, `--token`/`-t`, ...
//!
//! # Configuration File
//!
//! ```toml
//! token = "ghp_example"
//! owner = "octocat"
//! repo = "hello-world"
//! view = "workflows"
//! per_page = 100
//! run_limit = 25
//! ```

use std::env;
use std::fmt;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::github::error::FetchError;
use crate::github::locator::{
    RepositoryLocator, UserLogin, WorkflowId, parse_api_base, public_api_base,
};
use crate::github::pagination::{PageNumber, PageSize, TerminationRule};

/// Dashboard page to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// Everyone who starred a repository.
    Stargazers,
    /// Owners of every fork of a repository.
    Forks,
    /// Repositories visible to the authenticated user.
    Repositories,
    /// Runs of one workflow with a status tally.
    Workflows,
    /// A user's public profile.
    UserProfile,
    /// Repository details, pull requests, contributors and workflows.
    Overview,
}

impl DashboardView {
    /// Name accepted by `--view`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Stargazers => "stargazers",
            Self::Forks => "forks",
            Self::Repositories => "repos",
            Self::Workflows => "workflows",
            Self::UserProfile => "user",
            Self::Overview => "overview",
        }
    }
}

impl fmt::Display for DashboardView {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DashboardView {
    type Err = FetchError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "stargazers" | "stars" => Ok(Self::Stargazers),
            "forks" => Ok(Self::Forks),
            "repos" | "repositories" => Ok(Self::Repositories),
            "workflows" | "runs" => Ok(Self::Workflows),
            "user" | "profile" => Ok(Self::UserProfile),
            "overview" => Ok(Self::Overview),
            other => Err(FetchError::Configuration {
                message: format!(
                    "unknown view `{other}` (expected stargazers, forks, repos, workflows, \
                     user or overview)"
                ),
            }),
        }
    }
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Environment Variables
///
/// - `REPOPULSE_TOKEN`, `GITHUB_TOKEN`, or `--token`: Authentication token
/// - `REPOPULSE_OWNER` or `--owner`: Repository owner
/// - `REPOPULSE_REPO` or `--repo`: Repository name
/// - `REPOPULSE_REPO_URL` or `--repo-url`: Repository URL
/// - `REPOPULSE_USER` or `--user`: User login for the profile view
/// - `REPOPULSE_VIEW` or `--view`: Dashboard view
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use repopulse::RepopulseConfig;
///
/// let config = RepopulseConfig::load().expect("failed to load configuration");
/// let view = config.dashboard_view().expect("view should be valid");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "REPOPULSE",
    discovery(
        dotfile_name = ".repopulse.toml",
        config_file_name = "repopulse.toml",
        app_name = "repopulse"
    )
)]
pub struct RepopulseConfig {
    /// Personal access token for GitHub API authentication.
    ///
    /// Can be provided via:
    /// - CLI: `--token <TOKEN>` or `-t <TOKEN>`
    /// - Environment: `REPOPULSE_TOKEN` or `GITHUB_TOKEN` (legacy)
    /// - Config file: `token = "..."`
    #[ortho_config(cli_short = 't')]
    pub token: Option<String>,

    /// Repository owner (e.g., "octocat").
    #[ortho_config(cli_short = 'o')]
    pub owner: Option<String>,

    /// Repository name (e.g., "hello-world").
    #[ortho_config(cli_short = 'r')]
    pub repo: Option<String>,

    /// Repository URL, an alternative to `owner` and `repo`.
    ///
    /// GitHub Enterprise URLs select the matching `/api/v3` host.
    #[ortho_config(cli_short = 'u')]
    pub repo_url: Option<String>,

    /// Explicit API base URL, overriding the one derived from the
    /// repository.
    #[ortho_config()]
    pub api_url: Option<String>,

    /// User login shown by the profile view.
    #[ortho_config(cli_short = 'U')]
    pub user: Option<String>,

    /// Dashboard view: `stargazers`, `forks`, `repos`, `workflows`, `user`
    /// or `overview`.
    ///
    /// When unset the view follows the other options: a user selects the
    /// profile, a repository selects the overview, and otherwise the
    /// authenticated user's repositories are listed.
    #[ortho_config(cli_short = 'v')]
    pub view: Option<String>,

    /// Items requested per page while collecting (1 to 100).
    #[ortho_config()]
    pub per_page: u8,

    /// Show a single stargazer page instead of the whole collection.
    #[ortho_config(cli_short = 'P')]
    pub page: Option<u32>,

    /// Workflow id or file name whose runs are shown.
    ///
    /// When unset, or when the numeric id is not an active workflow, the
    /// first active workflow by name is used.
    #[ortho_config(cli_short = 'w')]
    pub workflow: Option<String>,

    /// Number of recent runs tallied by the workflows view.
    #[ortho_config()]
    pub run_limit: u8,

    /// Keep paging past short pages until an empty page is returned.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so this is CLI or config file only.
    #[ortho_config()]
    pub stop_on_empty_page: bool,

    /// Emit telemetry events to stderr as JSON lines.
    #[ortho_config()]
    pub telemetry: bool,
}

const DEFAULT_PER_PAGE: u8 = 100;
const DEFAULT_RUN_LIMIT: u8 = crate::github::collect::DEFAULT_RUN_LIMIT;

impl Default for RepopulseConfig {
    fn default() -> Self {
        Self {
            token: None,
            owner: None,
            repo: None,
            repo_url: None,
            api_url: None,
            user: None,
            view: None,
            per_page: DEFAULT_PER_PAGE,
            page: None,
            workflow: None,
            run_limit: DEFAULT_RUN_LIMIT,
            stop_on_empty_page: false,
            telemetry: false,
        }
    }
}

impl RepopulseConfig {
    /// Resolves the token from configuration or the legacy `GITHUB_TOKEN`
    /// environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingToken`] when no token source provides a
    /// value.
    pub fn resolve_token(&self) -> Result<String, FetchError> {
        self.token
            .clone()
            .or_else(|| env::var("GITHUB_TOKEN").ok())
            .ok_or(FetchError::MissingToken)
    }

    /// Resolves the token when one is available; public data can be read
    /// anonymously.
    #[must_use]
    pub fn optional_token(&self) -> Option<String> {
        self.resolve_token()
            .ok()
            .filter(|token| !token.trim().is_empty())
    }

    /// Determines the dashboard view.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when `view` names no known view.
    pub fn dashboard_view(&self) -> Result<DashboardView, FetchError> {
        if let Some(view) = self.view.as_deref() {
            return view.parse();
        }

        Ok(if self.user.is_some() {
            DashboardView::UserProfile
        } else if self.has_repository() {
            DashboardView::Overview
        } else {
            DashboardView::Repositories
        })
    }

    const fn has_repository(&self) -> bool {
        self.repo_url.is_some() || (self.owner.is_some() && self.repo.is_some())
    }

    /// Builds the repository locator from `repo_url` or `owner`/`repo`,
    /// applying `api_url` when set.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when no repository is
    /// configured, or the locator's parse error when a value is malformed.
    pub fn require_repository(&self) -> Result<RepositoryLocator, FetchError> {
        let locator = match (&self.repo_url, &self.owner, &self.repo) {
            (Some(url), _, _) => RepositoryLocator::parse(url)?,
            (None, Some(owner), Some(repo)) => RepositoryLocator::from_owner_repo(owner, repo)?,
            (None, None, _) => {
                return Err(FetchError::Configuration {
                    message: "repository owner is required (use --owner or --repo-url)"
                        .to_owned(),
                });
            }
            (None, Some(_), None) => {
                return Err(FetchError::Configuration {
                    message: "repository name is required (use --repo or -r)".to_owned(),
                });
            }
        };

        match self.api_url.as_deref() {
            Some(api_url) => Ok(locator.with_api_base(parse_api_base(api_url)?)),
            None => Ok(locator),
        }
    }

    /// API base for requests that are not tied to a repository.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidUrl`] when `api_url` is malformed.
    pub fn api_base(&self) -> Result<Url, FetchError> {
        self.api_url
            .as_deref()
            .map_or_else(public_api_base, parse_api_base)
    }

    /// Returns the user login for the profile view.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::MissingUserLogin`] when no user is configured.
    pub fn require_user(&self) -> Result<UserLogin, FetchError> {
        UserLogin::new(self.user.as_deref().unwrap_or_default())
    }

    /// Validated page size for collection runs.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPagination`] when `per_page` is outside
    /// `1..=100`.
    pub fn page_size(&self) -> Result<PageSize, FetchError> {
        PageSize::new(self.per_page)
    }

    /// Single page requested for browsing, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPagination`] when `page` is zero.
    pub fn browse_page(&self) -> Result<Option<PageNumber>, FetchError> {
        self.page.map(PageNumber::new).transpose()
    }

    /// Validated number of recent runs to tally.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::InvalidPagination`] when `run_limit` is outside
    /// `1..=100`.
    pub fn run_limit(&self) -> Result<PageSize, FetchError> {
        PageSize::new(self.run_limit)
    }

    /// Configured workflow, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Configuration`] when the value is blank.
    pub fn workflow_id(&self) -> Result<Option<WorkflowId>, FetchError> {
        self.workflow.as_deref().map(WorkflowId::new).transpose()
    }

    /// Termination rule for collection runs.
    #[must_use]
    pub const fn termination_rule(&self) -> TerminationRule {
        if self.stop_on_empty_page {
            TerminationRule::EmptyPage
        } else {
            TerminationRule::ShortPage
        }
    }
}

#[cfg(test)]
mod tests;
