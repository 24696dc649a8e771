//! Frequency table of workflow run outcomes.
//!
//! Each run is counted once under its effective status: the conclusion when
//! the run has one, otherwise its lifecycle status. Keys appear in the order
//! they were first seen so the legend stays stable between refreshes.

use crate::github::models::{RunConclusion, WorkflowRun};

/// One bucket of a [`StatusTally`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TallyEntry {
    /// Lower-cased effective status, underscores preserved (`in_progress`).
    pub key: String,
    /// Human-readable form of `key` (`In progress`).
    pub label: String,
    /// Number of runs in this bucket; always at least 1.
    pub count: usize,
}

/// Ordered frequency table of effective run statuses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusTally {
    entries: Vec<TallyEntry>,
}

impl StatusTally {
    /// Buckets in first-seen order.
    #[must_use]
    pub fn entries(&self) -> &[TallyEntry] {
        &self.entries
    }

    /// Returns true when no run was counted.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all bucket counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|entry| entry.count).sum()
    }

    /// Count for `key`, or zero when absent.
    #[must_use]
    pub fn count(&self, key: &str) -> usize {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map_or(0, |entry| entry.count)
    }

    fn increment(&mut self, key: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.key == key) {
            entry.count = entry.count.saturating_add(1);
            return;
        }

        self.entries.push(TallyEntry {
            key: key.to_owned(),
            label: display_label(key),
            count: 1,
        });
    }
}

/// Tallies runs by effective status.
///
/// Runs without a status are skipped. A blank conclusion counts as absent,
/// so the run falls back to its status.
///
/// # Example
///
/// ```
/// use repopulse::github::models::test_support::{completed_run, run_with};
/// use repopulse::github::models::{RunConclusion, RunStatus};
/// use repopulse::workflow::tally_run_statuses;
///
/// let runs = vec![
///     completed_run(1, RunConclusion::Success),
///     run_with(2, Some(RunStatus::InProgress), None),
/// ];
/// let tally = tally_run_statuses(&runs);
/// assert_eq!(tally.count("success"), 1);
/// assert_eq!(tally.count("in_progress"), 1);
/// ```
#[must_use]
pub fn tally_run_statuses(runs: &[WorkflowRun]) -> StatusTally {
    let mut tally = StatusTally::default();
    for run in runs {
        let Some(status) = run.status.as_ref() else {
            tracing::debug!(run_id = run.id, "skipping run without status");
            continue;
        };
        let key = run
            .conclusion
            .as_ref()
            .map(RunConclusion::as_str)
            .filter(|conclusion| !conclusion.trim().is_empty())
            .unwrap_or_else(|| status.as_str());
        tally.increment(key);
    }
    tally
}

/// `in_progress` becomes `In progress`.
fn display_label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{display_label, tally_run_statuses};
    use crate::github::models::test_support::{completed_run, run_with};
    use crate::github::models::{RunConclusion, RunStatus, WorkflowRun};

    fn keyed(runs: &[WorkflowRun]) -> Vec<(String, usize)> {
        tally_run_statuses(runs)
            .entries()
            .iter()
            .map(|entry| (entry.key.clone(), entry.count))
            .collect()
    }

    #[rstest]
    fn conclusion_wins_over_status_in_first_seen_order() {
        let runs = vec![
            completed_run(1, RunConclusion::Success),
            completed_run(2, RunConclusion::Success),
            run_with(3, Some(RunStatus::InProgress), None),
        ];

        assert_eq!(
            keyed(&runs),
            vec![("success".to_owned(), 2), ("in_progress".to_owned(), 1)]
        );
    }

    #[rstest]
    fn empty_input_yields_empty_tally() {
        let tally = tally_run_statuses(&[]);
        assert!(tally.is_empty(), "expected no entries");
        assert_eq!(tally.total(), 0);
    }

    #[rstest]
    fn tallying_is_deterministic() {
        let runs = vec![
            run_with(1, Some(RunStatus::Queued), None),
            completed_run(2, RunConclusion::Failure),
            completed_run(3, RunConclusion::TimedOut),
            run_with(4, Some(RunStatus::Queued), None),
        ];

        assert_eq!(tally_run_statuses(&runs), tally_run_statuses(&runs));
    }

    #[rstest]
    fn blank_conclusion_falls_back_to_status() {
        let runs = vec![
            run_with(1, Some(RunStatus::Queued), Some(RunConclusion::Other(String::new()))),
            run_with(2, Some(RunStatus::Completed), Some(RunConclusion::Other(" ".to_owned()))),
        ];

        assert_eq!(
            keyed(&runs),
            vec![("queued".to_owned(), 1), ("completed".to_owned(), 1)]
        );
    }

    #[rstest]
    fn runs_without_status_are_skipped() {
        let runs = vec![
            run_with(1, None, Some(RunConclusion::Success)),
            completed_run(2, RunConclusion::Cancelled),
        ];

        let tally = tally_run_statuses(&runs);
        assert_eq!(tally.total(), 1, "only the well-formed run counts");
        assert_eq!(tally.count("cancelled"), 1);
        assert_eq!(tally.count("success"), 0);
    }

    #[rstest]
    fn unknown_values_get_their_own_bucket() {
        let runs = vec![run_with(
            1,
            Some(RunStatus::Completed),
            Some(RunConclusion::from("Startup_Failure".to_owned())),
        )];

        let tally = tally_run_statuses(&runs);
        let entry = tally.entries().first().expect("one entry expected");
        assert_eq!(entry.key, "startup_failure");
        assert_eq!(entry.label, "Startup failure");
    }

    #[rstest]
    #[case("success", "Success")]
    #[case("in_progress", "In progress")]
    #[case("action_required", "Action required")]
    #[case("", "")]
    fn labels_are_humanised(#[case] key: &str, #[case] expected: &str) {
        assert_eq!(display_label(key), expected);
    }
}
