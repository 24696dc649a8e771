//! Workflow run analysis: status tallies and workflow selection.

pub mod selection;
pub mod tally;

pub use selection::{active_workflows, select_workflow};
pub use tally::{StatusTally, TallyEntry, tally_run_statuses};
