//! repopulse library crate for GitHub repository dashboards.
//!
//! The library wraps Octocrab to walk page-numbered collections such as
//! stargazers, forks and repositories until they are exhausted, tallies
//! workflow run outcomes, and surfaces friendly errors that can be displayed
//! in the CLI.

pub mod config;
pub mod github;
pub mod telemetry;
pub mod workflow;

pub use config::{DashboardView, RepopulseConfig};
pub use github::{
    CollectionIntake, CollectionStatus, DashboardGateway, ExhaustivePaginator, FetchError,
    OctocrabDashboardGateway, PersonalAccessToken, RepositoryLocator,
};
pub use workflow::{StatusTally, tally_run_statuses};
