//! Shared test utilities for CLI tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use repopulse::github::models::{
    Contributor, PullRequestSummary, RepositoryDetails, RepositorySummary, UserProfile,
    UserSummary, Workflow, WorkflowRun,
};
use repopulse::github::{
    DashboardGateway, FetchError, PageRequest, PageSize, RepositoryLocator, UserLogin,
    WorkflowId,
};

type PageQueue<T> = Arc<Mutex<VecDeque<Result<Vec<T>, FetchError>>>>;

/// A gateway that replays scripted pages and records every call.
///
/// Paged endpoints pop the next scripted page; once the queue is drained they
/// return an empty page.
#[derive(Clone, Default)]
pub struct ScriptedGateway {
    /// Pages returned by `stargazers` and `fork_owners`.
    pub user_pages: PageQueue<UserSummary>,
    /// Pages returned by `repositories`.
    pub repository_pages: PageQueue<RepositorySummary>,
    /// Workflows returned by `workflows`.
    pub workflows: Vec<Workflow>,
    /// Runs returned by `workflow_runs`, truncated to the requested size.
    pub runs: Vec<WorkflowRun>,
    /// Details returned by `repository`.
    pub details: RepositoryDetails,
    /// Profile returned by `user_profile`.
    pub profile: UserProfile,
    /// Calls observed so far, e.g. `stargazers owner/repo page=1 per_page=100`.
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedGateway {
    /// Queues a page for the user collections.
    #[must_use]
    pub fn with_user_page(self, page: Result<Vec<UserSummary>, FetchError>) -> Self {
        self.user_pages
            .lock()
            .expect("user pages mutex should be available")
            .push_back(page);
        self
    }

    /// Queues a page for the repository collection.
    #[must_use]
    pub fn with_repository_page(self, page: Result<Vec<RepositorySummary>, FetchError>) -> Self {
        self.repository_pages
            .lock()
            .expect("repository pages mutex should be available")
            .push_back(page);
        self
    }

    /// Calls recorded so far.
    #[must_use]
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .clone()
    }

    fn record(&self, call: String) {
        self.calls
            .lock()
            .expect("calls mutex should be available")
            .push(call);
    }

    fn next_page<T>(queue: &PageQueue<T>) -> Result<Vec<T>, FetchError> {
        queue
            .lock()
            .expect("page queue mutex should be available")
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }
}

fn describe(request: PageRequest) -> String {
    format!(
        "page={} per_page={}",
        request.page_number.get(),
        request.page_size.get()
    )
}

#[async_trait]
impl DashboardGateway for ScriptedGateway {
    async fn stargazers(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<Vec<UserSummary>, FetchError> {
        self.record(format!("stargazers {} {}", locator.slug(), describe(request)));
        Self::next_page(&self.user_pages)
    }

    async fn fork_owners(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<Vec<UserSummary>, FetchError> {
        self.record(format!("forks {} {}", locator.slug(), describe(request)));
        Self::next_page(&self.user_pages)
    }

    async fn repositories(
        &self,
        request: PageRequest,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        self.record(format!("repositories {}", describe(request)));
        Self::next_page(&self.repository_pages)
    }

    async fn workflows(&self, locator: &RepositoryLocator) -> Result<Vec<Workflow>, FetchError> {
        self.record(format!("workflows {}", locator.slug()));
        Ok(self.workflows.clone())
    }

    async fn workflow_runs(
        &self,
        locator: &RepositoryLocator,
        workflow: &WorkflowId,
        request: PageRequest,
    ) -> Result<Vec<WorkflowRun>, FetchError> {
        self.record(format!(
            "runs {} {} {}",
            locator.slug(),
            workflow.as_str(),
            describe(request)
        ));
        Ok(self
            .runs
            .iter()
            .take(usize::from(request.page_size.get()))
            .cloned()
            .collect())
    }

    async fn repository(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryDetails, FetchError> {
        self.record(format!("repository {}", locator.slug()));
        Ok(self.details.clone())
    }

    async fn open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        limit: PageSize,
    ) -> Result<Vec<PullRequestSummary>, FetchError> {
        self.record(format!("pulls {} limit={}", locator.slug(), limit.get()));
        Ok(Vec::new())
    }

    async fn contributors(
        &self,
        locator: &RepositoryLocator,
        limit: PageSize,
    ) -> Result<Vec<Contributor>, FetchError> {
        self.record(format!("contributors {} limit={}", locator.slug(), limit.get()));
        Ok(Vec::new())
    }

    async fn user_profile(&self, login: &UserLogin) -> Result<UserProfile, FetchError> {
        self.record(format!("profile {}", login.as_str()));
        Ok(self.profile.clone())
    }
}
