//! High-level collection facade used by the CLI.
//!
//! [`CollectionIntake`] pairs a [`DashboardGateway`] with an
//! [`ExhaustivePaginator`] so callers can ask for "every stargazer" instead
//! of driving page requests themselves.

use super::error::FetchError;
use super::gateway::DashboardGateway;
use super::locator::{RepositoryLocator, WorkflowId};
use super::models::{RepositorySummary, UserSummary, WorkflowRun};
use super::pagination::{Collected, ExhaustivePaginator, PageInfo, PageRequest, PageSize};

/// Number of runs shown for a workflow.
pub const DEFAULT_RUN_LIMIT: u8 = 25;

/// Collects whole collections through a gateway.
///
/// # Example
///
/// ```ignore
/// use repopulse::github::{CollectionIntake, OctocrabDashboardGateway, RepositoryLocator};
/// use repopulse::github::pagination::{ExhaustivePaginator, PageSize};
///
/// let locator = RepositoryLocator::from_owner_repo("owner", "repo")?;
/// let gateway = OctocrabDashboardGateway::for_repository(&locator, None)?;
/// let intake = CollectionIntake::new(&gateway, ExhaustivePaginator::new(PageSize::max()));
/// let stargazers = intake.all_stargazers(&locator).await;
/// ```
pub struct CollectionIntake<'client, Gateway>
where
    Gateway: DashboardGateway,
{
    client: &'client Gateway,
    paginator: ExhaustivePaginator,
}

impl<'client, Gateway> CollectionIntake<'client, Gateway>
where
    Gateway: DashboardGateway,
{
    /// Create a new collection facade using the provided gateway.
    #[must_use]
    pub const fn new(client: &'client Gateway, paginator: ExhaustivePaginator) -> Self {
        Self { client, paginator }
    }

    /// Paginator driving every exhaustive collection.
    #[must_use]
    pub const fn paginator(&self) -> &ExhaustivePaginator {
        &self.paginator
    }

    /// Every user who starred the repository.
    pub async fn all_stargazers(&self, locator: &RepositoryLocator) -> Collected<UserSummary> {
        let client = self.client;
        self.paginator
            .collect(move |request| client.stargazers(locator, request))
            .await
    }

    /// The owner of every fork of the repository.
    pub async fn all_fork_owners(&self, locator: &RepositoryLocator) -> Collected<UserSummary> {
        let client = self.client;
        self.paginator
            .collect(move |request| client.fork_owners(locator, request))
            .await
    }

    /// Every repository visible to the authenticated user.
    pub async fn all_repositories(&self) -> Collected<RepositorySummary> {
        let client = self.client;
        self.paginator
            .collect(move |request| client.repositories(request))
            .await
    }

    /// One page of stargazers with its navigation state.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn stargazer_page(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<(Vec<UserSummary>, PageInfo), FetchError> {
        let users = self.client.stargazers(locator, request).await?;
        let info = PageInfo::for_page(request, users.len());
        Ok((users, info))
    }

    /// The most recent runs of a workflow, newest first.
    ///
    /// Only the first page is fetched; `limit` caps the number of runs.
    ///
    /// # Errors
    ///
    /// Propagates any failure from the underlying gateway.
    pub async fn recent_workflow_runs(
        &self,
        locator: &RepositoryLocator,
        workflow: &WorkflowId,
        limit: PageSize,
    ) -> Result<Vec<WorkflowRun>, FetchError> {
        let request = PageRequest {
            page_size: limit,
            ..PageRequest::default()
        };
        self.client.workflow_runs(locator, workflow, request).await
    }
}
