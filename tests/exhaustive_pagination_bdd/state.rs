//! Scenario state for the exhaustive pagination BDD tests.

use repopulse::github::models::UserSummary;
use repopulse::github::{
    Collected, CollectionIntake, ExhaustivePaginator, OctocrabDashboardGateway, PageSize,
    RepositoryLocator, TerminationRule, WorkflowId,
};
use repopulse::{StatusTally, tally_run_statuses};
use rstest_bdd::Slot;
use rstest_bdd_macros::ScenarioState;
use wiremock::MockServer;

use crate::support::runtime::{SharedRuntime, ensure_runtime_and_server};

/// Stargazers endpoint of `owner/repo` behind the mock API base.
pub(crate) const STARGAZERS_PATH: &str = "/api/v3/repos/owner/repo/stargazers";

/// Runs endpoint of `workflow` in `owner/repo` behind the mock API base.
pub(crate) fn runs_path(workflow: u64) -> String {
    format!("/api/v3/repos/owner/repo/actions/workflows/{workflow}/runs")
}

#[derive(ScenarioState, Default)]
pub(crate) struct PaginationState {
    pub(crate) runtime: Slot<SharedRuntime>,
    pub(crate) server: Slot<MockServer>,
    pub(crate) collected: Slot<Collected<UserSummary>>,
    pub(crate) tally: Slot<StatusTally>,
}

impl PaginationState {
    /// Runtime shared by every step, starting the mock server on first use.
    pub(crate) fn runtime(&self) -> SharedRuntime {
        ensure_runtime_and_server(&self.runtime, &self.server)
    }

    fn locator(&self) -> RepositoryLocator {
        let server_url = self
            .server
            .with_ref(MockServer::uri)
            .unwrap_or_else(|| panic!("mock server URL missing"));
        RepositoryLocator::parse(&format!("{server_url}/owner/repo"))
            .unwrap_or_else(|error| panic!("mock repository URL should parse: {error}"))
    }

    fn gateway(&self, locator: &RepositoryLocator) -> OctocrabDashboardGateway {
        // Octocrab spawns its client worker, so build inside the runtime.
        self.runtime()
            .block_on(async { OctocrabDashboardGateway::for_repository(locator, None) })
            .unwrap_or_else(|error| panic!("gateway should build: {error}"))
    }

    /// Collects every stargazer of `owner/repo`.
    pub(crate) fn collect_stargazers(&self, per_page: u8, rule: TerminationRule) {
        let runtime = self.runtime();
        let locator = self.locator();
        let gateway = self.gateway(&locator);
        let page_size = PageSize::new(per_page)
            .unwrap_or_else(|error| panic!("page size should be valid: {error}"));
        let intake = CollectionIntake::new(
            &gateway,
            ExhaustivePaginator::new(page_size).with_rule(rule),
        );

        let collected = runtime.block_on(intake.all_stargazers(&locator));
        self.collected.set(collected);
    }

    /// Fetches the recent runs of `workflow` and tallies their statuses.
    pub(crate) fn tally_recent_runs(&self, workflow: u64) {
        let runtime = self.runtime();
        let locator = self.locator();
        let gateway = self.gateway(&locator);
        let intake = CollectionIntake::new(&gateway, ExhaustivePaginator::new(PageSize::max()));
        let limit = PageSize::new(repopulse::github::DEFAULT_RUN_LIMIT)
            .unwrap_or_else(|error| panic!("run limit should be valid: {error}"));

        let runs = runtime
            .block_on(intake.recent_workflow_runs(&locator, &WorkflowId::from(workflow), limit))
            .unwrap_or_else(|error| panic!("workflow runs should load: {error}"));
        self.tally.set(tally_run_statuses(&runs));
    }

    /// Number of requests the mock server received for `path`.
    pub(crate) fn requests_to(&self, path: &str) -> usize {
        let runtime = self.runtime();
        let requests = self
            .server
            .with_ref(|server| runtime.block_on(server.received_requests()))
            .flatten()
            .unwrap_or_else(|| panic!("request recording should be enabled"));
        requests
            .iter()
            .filter(|request| request.url.path() == path)
            .count()
    }
}
