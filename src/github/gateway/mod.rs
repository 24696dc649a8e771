//! Gateway for loading dashboard data through Octocrab.
//!
//! The [`DashboardGateway`] trait describes one call per REST endpoint. Paged
//! endpoints take a [`PageRequest`] and return exactly the items of that page
//! so the paginator can detect a short page. The trait-based design enables
//! mocking in tests while [`OctocrabDashboardGateway`] handles real HTTP
//! requests.

mod client;
mod dashboard;
mod error_mapping;
mod http_utils;

pub use dashboard::OctocrabDashboardGateway;

use async_trait::async_trait;

use crate::github::error::FetchError;
use crate::github::locator::{RepositoryLocator, UserLogin, WorkflowId};
use crate::github::models::{
    Contributor, PullRequestSummary, RepositoryDetails, RepositorySummary, UserProfile,
    UserSummary, Workflow, WorkflowRun,
};
use crate::github::pagination::{PageRequest, PageSize};

/// Gateway that can load repository, user and workflow data.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DashboardGateway: Send + Sync {
    /// Fetch one page of users who starred the repository.
    async fn stargazers(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<Vec<UserSummary>, FetchError>;

    /// Fetch one page of forks, reduced to each fork's owner.
    async fn fork_owners(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<Vec<UserSummary>, FetchError>;

    /// Fetch one page of repositories visible to the authenticated user.
    async fn repositories(&self, request: PageRequest)
    -> Result<Vec<RepositorySummary>, FetchError>;

    /// Fetch the workflows defined in the repository.
    async fn workflows(&self, locator: &RepositoryLocator) -> Result<Vec<Workflow>, FetchError>;

    /// Fetch one page of runs for a workflow, newest first.
    async fn workflow_runs(
        &self,
        locator: &RepositoryLocator,
        workflow: &WorkflowId,
        request: PageRequest,
    ) -> Result<Vec<WorkflowRun>, FetchError>;

    /// Fetch repository details.
    async fn repository(&self, locator: &RepositoryLocator)
    -> Result<RepositoryDetails, FetchError>;

    /// Fetch up to `limit` open pull requests.
    async fn open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        limit: PageSize,
    ) -> Result<Vec<PullRequestSummary>, FetchError>;

    /// Fetch up to `limit` top contributors.
    async fn contributors(
        &self,
        locator: &RepositoryLocator,
        limit: PageSize,
    ) -> Result<Vec<Contributor>, FetchError>;

    /// Fetch a user's public profile.
    async fn user_profile(&self, login: &UserLogin) -> Result<UserProfile, FetchError>;
}
