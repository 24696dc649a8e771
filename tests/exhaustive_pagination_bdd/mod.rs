//! Support modules for the exhaustive pagination BDD tests.

pub(crate) mod state;

pub(crate) use state::{PaginationState, STARGAZERS_PATH, runs_path};
