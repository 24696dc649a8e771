//! Test helpers for constructing workflow and user fixtures.
//!
//! # Examples
//!
//! ```
//! use repopulse::github::models::test_support::{run_with, workflow};
//! use repopulse::github::models::{RunConclusion, RunStatus, WorkflowState};
//!
//! let run = run_with(1, Some(RunStatus::Completed), Some(RunConclusion::Success));
//! assert_eq!(run.id, 1);
//!
//! let ci = workflow(7, "CI", WorkflowState::Active);
//! assert!(ci.state.is_active());
//! ```

use super::{RunConclusion, RunStatus, UserSummary, Workflow, WorkflowRun, WorkflowState};

/// Constructs a `WorkflowRun` with only id, status and conclusion set.
#[must_use]
pub fn run_with(
    id: u64,
    status: Option<RunStatus>,
    conclusion: Option<RunConclusion>,
) -> WorkflowRun {
    WorkflowRun {
        id,
        run_number: id,
        status,
        conclusion,
        ..Default::default()
    }
}

/// Constructs a completed run with the given conclusion.
#[must_use]
pub fn completed_run(id: u64, conclusion: RunConclusion) -> WorkflowRun {
    run_with(id, Some(RunStatus::Completed), Some(conclusion))
}

/// Constructs a `Workflow` with the given id, name and state.
#[must_use]
pub fn workflow(id: u64, name: &str, state: WorkflowState) -> Workflow {
    Workflow {
        id,
        name: name.to_owned(),
        path: Some(format!(".github/workflows/{id}.yml")),
        state,
        html_url: None,
    }
}

/// Constructs a `UserSummary` whose login is `user{id}`.
#[must_use]
pub fn user(id: u64) -> UserSummary {
    UserSummary {
        id,
        login: format!("user{id}"),
        ..Default::default()
    }
}

/// Constructs `count` users with sequential ids starting at `first_id`.
#[must_use]
pub fn users(first_id: u64, count: u64) -> Vec<UserSummary> {
    (first_id..first_id.saturating_add(count)).map(user).collect()
}
