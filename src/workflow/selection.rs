//! Picking which workflow's runs to show.

use crate::github::models::Workflow;

/// Active workflows sorted by name, ignoring case.
///
/// Names differing only in case keep a stable order by their raw spelling.
#[must_use]
pub fn active_workflows(workflows: &[Workflow]) -> Vec<&Workflow> {
    let mut active: Vec<&Workflow> = workflows
        .iter()
        .filter(|workflow| workflow.state.is_active())
        .collect();
    active.sort_by(|left, right| {
        left.name
            .to_lowercase()
            .cmp(&right.name.to_lowercase())
            .then_with(|| left.name.cmp(&right.name))
    });
    active
}

/// Chooses the workflow to display.
///
/// The preferred id wins when it names an active workflow; otherwise the
/// first active workflow by name is used. Returns `None` when no workflow is
/// active.
#[must_use]
pub fn select_workflow(workflows: &[Workflow], preferred: Option<u64>) -> Option<&Workflow> {
    let active = active_workflows(workflows);
    preferred
        .and_then(|id| active.iter().copied().find(|workflow| workflow.id == id))
        .or_else(|| active.first().copied())
}
