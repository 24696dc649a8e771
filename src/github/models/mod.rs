//! Data models for repository, user and workflow data returned by GitHub.
//!
//! Public types are the domain models handed to callers. Types prefixed with
//! `Api` are internal deserialisation targets that convert into them.

use chrono::{DateTime, Utc};
use serde::Deserialize;

mod status;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use status::{RunConclusion, RunStatus, WorkflowState};

/// Minimal user record: stargazers, fork owners.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSummary {
    /// Numeric user id.
    pub id: u64,
    /// Login name.
    pub login: String,
    /// Avatar image URL.
    pub avatar_url: Option<String>,
    /// Profile page URL.
    pub html_url: Option<String>,
}

/// Repository contributor with their commit count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contributor {
    /// Login name.
    pub login: String,
    /// Number of contributions to the repository.
    pub contributions: u64,
    /// Profile page URL.
    pub html_url: Option<String>,
}

/// Repository entry from a repository listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositorySummary {
    /// Numeric repository id.
    pub id: u64,
    /// `owner/name`.
    pub full_name: String,
    /// Repository description.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
    /// Whether the repository is itself a fork.
    pub fork: bool,
    /// Primary language.
    pub language: Option<String>,
    /// Star count.
    pub stargazers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Repository page URL.
    pub html_url: Option<String>,
    /// Last update time.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Full repository details for the overview page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RepositoryDetails {
    /// `owner/name`.
    pub full_name: String,
    /// Repository description.
    pub description: Option<String>,
    /// Whether the repository is private.
    pub private: bool,
    /// Primary language.
    pub language: Option<String>,
    /// Default branch name.
    pub default_branch: Option<String>,
    /// Star count.
    pub stargazers_count: u64,
    /// Fork count.
    pub forks_count: u64,
    /// Watcher count.
    pub watchers_count: u64,
    /// Open issues (including pull requests).
    pub open_issues_count: u64,
    /// SPDX identifier of the licence.
    pub license: Option<String>,
    /// Topic labels.
    pub topics: Vec<String>,
    /// Repository page URL.
    pub html_url: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
    /// Last push time.
    pub pushed_at: Option<DateTime<Utc>>,
}

/// Lightweight pull request summary for the overview page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PullRequestSummary {
    /// Pull request number.
    pub number: u64,
    /// Title of the pull request.
    pub title: Option<String>,
    /// Author login if present.
    pub author: Option<String>,
    /// Pull request page URL.
    pub html_url: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// GitHub Actions workflow definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workflow {
    /// Numeric workflow id.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Path of the workflow file.
    pub path: Option<String>,
    /// Enabled state.
    pub state: WorkflowState,
    /// Workflow page URL.
    pub html_url: Option<String>,
}

/// One execution of a workflow.
///
/// `status` is optional only so that malformed records can be represented
/// and skipped by the status tally.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowRun {
    /// Numeric run id.
    pub id: u64,
    /// Run display name.
    pub name: Option<String>,
    /// Sequential run number within the workflow.
    pub run_number: u64,
    /// Lifecycle status.
    pub status: Option<RunStatus>,
    /// Final verdict once completed.
    pub conclusion: Option<RunConclusion>,
    /// Triggering event (`push`, `pull_request`, ...).
    pub event: Option<String>,
    /// Branch the run was triggered on.
    pub head_branch: Option<String>,
    /// Login of the user who triggered the run.
    pub actor: Option<String>,
    /// Run page URL.
    pub html_url: Option<String>,
    /// Creation time.
    pub created_at: Option<DateTime<Utc>>,
}

/// Public profile of a GitHub user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserProfile {
    /// Numeric user id.
    pub id: u64,
    /// Login name.
    pub login: String,
    /// Display name.
    pub name: Option<String>,
    /// Company.
    pub company: Option<String>,
    /// Blog or website.
    pub blog: Option<String>,
    /// Location.
    pub location: Option<String>,
    /// Public email.
    pub email: Option<String>,
    /// Whether the user is open to hire offers.
    pub hireable: Option<bool>,
    /// Profile biography.
    pub bio: Option<String>,
    /// Twitter handle.
    pub twitter_username: Option<String>,
    /// Public repository count.
    pub public_repos: u64,
    /// Follower count.
    pub followers: u64,
    /// Following count.
    pub following: u64,
    /// Profile page URL.
    pub html_url: Option<String>,
    /// Account creation time.
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUser {
    pub(crate) id: u64,
    pub(crate) login: String,
    pub(crate) avatar_url: Option<String>,
    pub(crate) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLogin {
    pub(crate) login: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiFork {
    pub(crate) owner: ApiUser,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiContributor {
    pub(crate) login: String,
    #[serde(default)]
    pub(crate) contributions: u64,
    pub(crate) html_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiRepository {
    pub(crate) id: u64,
    pub(crate) full_name: String,
    pub(crate) description: Option<String>,
    #[serde(default)]
    pub(crate) private: bool,
    #[serde(default)]
    pub(crate) fork: bool,
    pub(crate) language: Option<String>,
    pub(crate) default_branch: Option<String>,
    #[serde(default)]
    pub(crate) stargazers_count: u64,
    #[serde(default)]
    pub(crate) forks_count: u64,
    #[serde(default)]
    pub(crate) watchers_count: u64,
    #[serde(default)]
    pub(crate) open_issues_count: u64,
    pub(crate) license: Option<ApiLicense>,
    #[serde(default)]
    pub(crate) topics: Vec<String>,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
    pub(crate) updated_at: Option<DateTime<Utc>>,
    pub(crate) pushed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiLicense {
    pub(crate) spdx_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiPullRequest {
    pub(crate) number: u64,
    pub(crate) title: Option<String>,
    pub(crate) user: Option<ApiLogin>,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiWorkflow {
    pub(crate) id: u64,
    pub(crate) name: String,
    pub(crate) path: Option<String>,
    pub(crate) state: WorkflowState,
    pub(crate) html_url: Option<String>,
}

/// Wrapped response of the workflows endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiWorkflowList {
    #[serde(default)]
    pub(crate) workflows: Vec<ApiWorkflow>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiWorkflowRun {
    pub(crate) id: u64,
    pub(crate) name: Option<String>,
    #[serde(default)]
    pub(crate) run_number: u64,
    pub(crate) status: Option<RunStatus>,
    pub(crate) conclusion: Option<RunConclusion>,
    pub(crate) event: Option<String>,
    pub(crate) head_branch: Option<String>,
    pub(crate) actor: Option<ApiLogin>,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

/// Wrapped response of the workflow runs endpoint.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiWorkflowRunList {
    #[serde(default)]
    pub(crate) workflow_runs: Vec<ApiWorkflowRun>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiUserProfile {
    pub(crate) id: u64,
    pub(crate) login: String,
    pub(crate) name: Option<String>,
    pub(crate) company: Option<String>,
    pub(crate) blog: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) email: Option<String>,
    pub(crate) hireable: Option<bool>,
    pub(crate) bio: Option<String>,
    pub(crate) twitter_username: Option<String>,
    #[serde(default)]
    pub(crate) public_repos: u64,
    #[serde(default)]
    pub(crate) followers: u64,
    #[serde(default)]
    pub(crate) following: u64,
    pub(crate) html_url: Option<String>,
    pub(crate) created_at: Option<DateTime<Utc>>,
}

impl From<ApiUser> for UserSummary {
    fn from(value: ApiUser) -> Self {
        Self {
            id: value.id,
            login: value.login,
            avatar_url: value.avatar_url,
            html_url: value.html_url,
        }
    }
}

impl From<ApiFork> for UserSummary {
    fn from(value: ApiFork) -> Self {
        value.owner.into()
    }
}

impl From<ApiContributor> for Contributor {
    fn from(value: ApiContributor) -> Self {
        Self {
            login: value.login,
            contributions: value.contributions,
            html_url: value.html_url,
        }
    }
}

impl From<ApiRepository> for RepositorySummary {
    fn from(value: ApiRepository) -> Self {
        Self {
            id: value.id,
            full_name: value.full_name,
            description: value.description,
            private: value.private,
            fork: value.fork,
            language: value.language,
            stargazers_count: value.stargazers_count,
            forks_count: value.forks_count,
            html_url: value.html_url,
            updated_at: value.updated_at,
        }
    }
}

impl From<ApiRepository> for RepositoryDetails {
    fn from(value: ApiRepository) -> Self {
        Self {
            full_name: value.full_name,
            description: value.description,
            private: value.private,
            language: value.language,
            default_branch: value.default_branch,
            stargazers_count: value.stargazers_count,
            forks_count: value.forks_count,
            watchers_count: value.watchers_count,
            open_issues_count: value.open_issues_count,
            license: value.license.and_then(|license| license.spdx_id),
            topics: value.topics,
            html_url: value.html_url,
            created_at: value.created_at,
            pushed_at: value.pushed_at,
        }
    }
}

impl From<ApiPullRequest> for PullRequestSummary {
    fn from(value: ApiPullRequest) -> Self {
        Self {
            number: value.number,
            title: value.title,
            author: value.user.and_then(|user| user.login),
            html_url: value.html_url,
            created_at: value.created_at,
        }
    }
}

impl From<ApiWorkflow> for Workflow {
    fn from(value: ApiWorkflow) -> Self {
        Self {
            id: value.id,
            name: value.name,
            path: value.path,
            state: value.state,
            html_url: value.html_url,
        }
    }
}

impl From<ApiWorkflowRun> for WorkflowRun {
    fn from(value: ApiWorkflowRun) -> Self {
        Self {
            id: value.id,
            name: value.name,
            run_number: value.run_number,
            status: value.status,
            conclusion: value
                .conclusion
                .filter(|conclusion| !conclusion.as_str().trim().is_empty()),
            event: value.event,
            head_branch: value.head_branch,
            actor: value.actor.and_then(|actor| actor.login),
            html_url: value.html_url,
            created_at: value.created_at,
        }
    }
}

impl From<ApiUserProfile> for UserProfile {
    fn from(value: ApiUserProfile) -> Self {
        Self {
            id: value.id,
            login: value.login,
            name: value.name,
            company: value.company,
            blog: value.blog,
            location: value.location,
            email: value.email,
            hireable: value.hireable,
            bio: value.bio,
            twitter_username: value.twitter_username,
            public_repos: value.public_repos,
            followers: value.followers,
            following: value.following,
            html_url: value.html_url,
            created_at: value.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::{
        ApiFork, ApiRepository, ApiWorkflowRun, ApiWorkflowRunList, RepositoryDetails, RunConclusion, RunStatus,
        UserSummary, WorkflowRun,
    };

    #[rstest]
    fn fork_converts_to_its_owner() {
        let fork: ApiFork = serde_json::from_value(json!({
            "id": 99,
            "full_name": "alice/repo",
            "owner": { "id": 7, "login": "alice", "avatar_url": null, "html_url": null }
        }))
        .expect("fork should deserialise");

        let owner = UserSummary::from(fork);
        assert_eq!(owner.login, "alice");
        assert_eq!(owner.id, 7);
    }

    #[rstest]
    fn wrapped_workflow_runs_unwrap_into_runs() {
        let list: ApiWorkflowRunList = serde_json::from_value(json!({
            "total_count": 2,
            "workflow_runs": [
                { "id": 1, "run_number": 10, "status": "completed", "conclusion": "success",
                  "actor": { "login": "octocat" } },
                { "id": 2, "run_number": 11, "status": "in_progress", "conclusion": null }
            ]
        }))
        .expect("run list should deserialise");

        let runs: Vec<WorkflowRun> = list.workflow_runs.into_iter().map(Into::into).collect();
        assert_eq!(runs.len(), 2);
        let first = runs.first().expect("first run");
        assert_eq!(first.status, Some(RunStatus::Completed));
        assert_eq!(first.conclusion, Some(RunConclusion::Success));
        assert_eq!(first.actor.as_deref(), Some("octocat"));
        let second = runs.get(1).expect("second run");
        assert_eq!(second.conclusion, None);
    }

    #[rstest]
    #[case::empty("")]
    #[case::whitespace("  ")]
    fn blank_conclusions_are_treated_as_absent(#[case] conclusion: &str) {
        let api_run: ApiWorkflowRun = serde_json::from_value(json!({
            "id": 3, "run_number": 12, "status": "queued", "conclusion": conclusion
        }))
        .expect("run should deserialise");

        let run = WorkflowRun::from(api_run);
        assert_eq!(run.conclusion, None);
        assert_eq!(run.status, Some(RunStatus::Queued));
    }

    #[rstest]
    fn repository_details_flatten_license() {
        let repository: ApiRepository = serde_json::from_value(json!({
            "id": 1,
            "full_name": "octo/repo",
            "stargazers_count": 12,
            "license": { "spdx_id": "MIT" },
            "topics": ["rust", "cli"],
            "created_at": "2024-01-01T00:00:00Z"
        }))
        .expect("repository should deserialise");

        let details = RepositoryDetails::from(repository);
        assert_eq!(details.license.as_deref(), Some("MIT"));
        assert_eq!(details.stargazers_count, 12);
        assert_eq!(details.topics, vec!["rust".to_owned(), "cli".to_owned()]);
        assert!(details.created_at.is_some(), "timestamp should parse");
    }
}
