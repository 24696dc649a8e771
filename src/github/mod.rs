//! GitHub collection fetching.
//!
//! This module wraps Octocrab to parse repository URLs, validate personal
//! access tokens, and walk page-numbered collections such as stargazers,
//! forks and workflow runs. Errors are mapped into user-friendly variants so
//! that callers can surface precise failures without exposing Octocrab
//! internals.

pub mod collect;
pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;
pub mod overview;
pub mod pagination;
pub mod rate_limit;

pub use collect::{CollectionIntake, DEFAULT_RUN_LIMIT};
pub use error::{FailureKind, FetchError};
pub use gateway::{DashboardGateway, OctocrabDashboardGateway};
pub use locator::{
    PersonalAccessToken, RepositoryLocator, RepositoryName, RepositoryOwner, UserLogin,
    WorkflowId, parse_api_base, public_api_base,
};
pub use models::{
    Contributor, PullRequestSummary, RepositoryDetails, RepositorySummary, RunConclusion,
    RunStatus, UserProfile, UserSummary, Workflow, WorkflowRun, WorkflowState,
};
pub use overview::{RepositoryOverview, load_overview};
pub use pagination::{
    CancellationFlag, Collected, CollectionStatus, ExhaustivePaginator, PageInfo, PageNumber,
    PageRequest, PageSize, StopReason, TerminationRule,
};
pub use rate_limit::RateLimitInfo;

#[cfg(test)]
pub use gateway::MockDashboardGateway;

#[cfg(test)]
mod tests;
