//! Repository overview: details, open pull requests, contributors and
//! workflows loaded together.

use super::error::FetchError;
use super::gateway::DashboardGateway;
use super::locator::RepositoryLocator;
use super::models::{Contributor, PullRequestSummary, RepositoryDetails, Workflow};
use super::pagination::PageSize;

/// Number of pull requests and contributors shown on the overview.
pub const OVERVIEW_LIST_LIMIT: u8 = 10;

/// Everything shown on a repository's overview page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOverview {
    /// Repository details.
    pub repository: RepositoryDetails,
    /// Most recent open pull requests.
    pub pull_requests: Vec<PullRequestSummary>,
    /// Top contributors.
    pub contributors: Vec<Contributor>,
    /// All workflows, whatever their state.
    pub workflows: Vec<Workflow>,
}

impl RepositoryOverview {
    /// Number of workflows in the `active` state.
    #[must_use]
    pub fn active_workflows(&self) -> usize {
        self.workflows
            .iter()
            .filter(|workflow| workflow.state.is_active())
            .count()
    }
}

/// Loads the overview with the four requests in flight concurrently.
///
/// # Errors
///
/// Returns the first failure; a partial overview is never produced.
pub async fn load_overview<Gateway>(
    gateway: &Gateway,
    locator: &RepositoryLocator,
) -> Result<RepositoryOverview, FetchError>
where
    Gateway: DashboardGateway + ?Sized,
{
    let limit = PageSize::new(OVERVIEW_LIST_LIMIT)?;
    let (repository, pull_requests, contributors, workflows) = tokio::try_join!(
        gateway.repository(locator),
        gateway.open_pull_requests(locator, limit),
        gateway.contributors(locator, limit),
        gateway.workflows(locator),
    )?;

    Ok(RepositoryOverview {
        repository,
        pull_requests,
        contributors,
        workflows,
    })
}
