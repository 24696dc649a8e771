//! Workflow and workflow run state enumerations.
//!
//! GitHub adds new values from time to time, so each enum keeps unknown
//! values verbatim (lower-cased) in an `Other` variant instead of failing
//! deserialisation.

use serde::Deserialize;

/// Lifecycle status of a workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RunStatus {
    /// Waiting for a runner.
    Queued,
    /// Currently executing.
    InProgress,
    /// Finished; see the conclusion.
    Completed,
    /// Needs manual approval.
    ActionRequired,
    /// Cancelled.
    Cancelled,
    /// Failed.
    Failure,
    /// Finished without a pass or fail verdict.
    Neutral,
    /// Skipped.
    Skipped,
    /// Superseded.
    Stale,
    /// Succeeded.
    Success,
    /// Exceeded its time limit.
    TimedOut,
    /// Waiting on a deployment protection rule.
    Waiting,
    /// A value this crate does not know about.
    Other(String),
}

impl RunStatus {
    /// Returns the lower-case API value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Queued => "queued",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::ActionRequired => "action_required",
            Self::Cancelled => "cancelled",
            Self::Failure => "failure",
            Self::Neutral => "neutral",
            Self::Skipped => "skipped",
            Self::Stale => "stale",
            Self::Success => "success",
            Self::TimedOut => "timed_out",
            Self::Waiting => "waiting",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for RunStatus {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "queued" => Self::Queued,
            "in_progress" => Self::InProgress,
            "completed" => Self::Completed,
            "action_required" => Self::ActionRequired,
            "cancelled" => Self::Cancelled,
            "failure" => Self::Failure,
            "neutral" => Self::Neutral,
            "skipped" => Self::Skipped,
            "stale" => Self::Stale,
            "success" => Self::Success,
            "timed_out" => Self::TimedOut,
            "waiting" => Self::Waiting,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Final verdict of a completed workflow run.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RunConclusion {
    /// Succeeded.
    Success,
    /// Failed.
    Failure,
    /// Finished without a pass or fail verdict.
    Neutral,
    /// Cancelled.
    Cancelled,
    /// Skipped.
    Skipped,
    /// Exceeded its time limit.
    TimedOut,
    /// Needs manual approval.
    ActionRequired,
    /// A value this crate does not know about.
    Other(String),
}

impl RunConclusion {
    /// Returns the lower-case API value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Neutral => "neutral",
            Self::Cancelled => "cancelled",
            Self::Skipped => "skipped",
            Self::TimedOut => "timed_out",
            Self::ActionRequired => "action_required",
            Self::Other(value) => value.as_str(),
        }
    }
}

impl From<String> for RunConclusion {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "success" => Self::Success,
            "failure" => Self::Failure,
            "neutral" => Self::Neutral,
            "cancelled" => Self::Cancelled,
            "skipped" => Self::Skipped,
            "timed_out" => Self::TimedOut,
            "action_required" => Self::ActionRequired,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Whether a workflow is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum WorkflowState {
    /// Enabled and runnable.
    Active,
    /// Workflow file was deleted.
    Deleted,
    /// Disabled because the repository is a fork.
    DisabledFork,
    /// Disabled after a period of inactivity.
    DisabledInactivity,
    /// Disabled by a maintainer.
    DisabledManually,
    /// A value this crate does not know about.
    Other(String),
}

impl WorkflowState {
    /// Returns the lower-case API value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Deleted => "deleted",
            Self::DisabledFork => "disabled_fork",
            Self::DisabledInactivity => "disabled_inactivity",
            Self::DisabledManually => "disabled_manually",
            Self::Other(value) => value.as_str(),
        }
    }

    /// Returns true for [`WorkflowState::Active`].
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<String> for WorkflowState {
    fn from(value: String) -> Self {
        match value.to_lowercase().as_str() {
            "active" => Self::Active,
            "deleted" => Self::Deleted,
            "disabled_fork" => Self::DisabledFork,
            "disabled_inactivity" => Self::DisabledInactivity,
            "disabled_manually" => Self::DisabledManually,
            other => Self::Other(other.to_owned()),
        }
    }
}
