//! Octocrab-backed implementation of the dashboard gateway.

use async_trait::async_trait;
use http::Uri;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use url::Url;

use crate::github::error::FetchError;
use crate::github::locator::{PersonalAccessToken, RepositoryLocator, UserLogin, WorkflowId};
use crate::github::models::{
    ApiContributor, ApiFork, ApiPullRequest, ApiRepository, ApiUser, ApiUserProfile,
    ApiWorkflowList, ApiWorkflowRunList, Contributor, PullRequestSummary, RepositoryDetails,
    RepositorySummary, UserProfile, UserSummary, Workflow, WorkflowRun,
};
use crate::github::pagination::{PageRequest, PageSize};
use crate::github::rate_limit::RateLimitInfo;

use super::DashboardGateway;
use super::client::build_octocrab_client;
use super::error_mapping::{is_rate_limit_response, map_http_error, map_octocrab_error};
use super::http_utils::{GitHubErrorBody, rate_limit_from_headers};


const USER_REPOSITORIES_PATH: &str = "/user/repos";
const REPOSITORY_AFFILIATION: &str = "owner,collaborator,organization_member";

/// Octocrab-backed dashboard gateway.
pub struct OctocrabDashboardGateway {
    client: Octocrab,
}

impl OctocrabDashboardGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds a gateway for the given API base, authenticated when a token
    /// is supplied.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` when the base URI cannot be parsed or
    /// `FetchError::Api` when Octocrab fails to construct a client.
    pub fn connect(
        api_base: &Url,
        token: Option<&PersonalAccessToken>,
    ) -> Result<Self, FetchError> {
        let octocrab = build_octocrab_client(token, api_base.as_str())?;
        Ok(Self::new(octocrab))
    }

    /// Builds a gateway for the API host serving `locator`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`OctocrabDashboardGateway::connect`].
    pub fn for_repository(
        locator: &RepositoryLocator,
        token: Option<&PersonalAccessToken>,
    ) -> Result<Self, FetchError> {
        Self::connect(locator.api_base(), token)
    }

    async fn fetch_page<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        request: PageRequest,
        extra_params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let (page, per_page) = request.query_values();
        let mut query_params: Vec<(&str, &str)> = extra_params.to_vec();
        query_params.push(("per_page", per_page.as_str()));
        query_params.push(("page", page.as_str()));

        tracing::debug!(
            operation,
            path,
            page = request.page_number.get(),
            per_page = request.page_size.get(),
            "requesting page"
        );

        self.fetch_json(operation, path, &query_params).await
    }

    async fn fetch_limited<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        limit: PageSize,
        extra_params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let per_page = limit.get().to_string();
        let mut query_params: Vec<(&str, &str)> = extra_params.to_vec();
        query_params.push(("per_page", per_page.as_str()));

        self.fetch_json(operation, path, &query_params).await
    }

    async fn fetch_one<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
    ) -> Result<T, FetchError> {
        self.fetch_json(operation, path, &[]).await
    }

    /// Issues the GET and checks the status before decoding, so an HTML or
    /// empty error page is reported as a rejection rather than a bad body.
    async fn fetch_json<T: DeserializeOwned>(
        &self,
        operation: &str,
        path: &str,
        query_params: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let uri = request_uri(path, query_params)?;
        let response = self
            .client
            ._get(uri)
            .await
            .map_err(|error| map_octocrab_error(operation, &error))?;
        let status = response.status();

        if status.is_success() {
            let body = self
                .client
                .body_to_string(response)
                .await
                .map_err(|error| map_octocrab_error(operation, &error))?;
            return serde_json::from_str(&body).map_err(|error| FetchError::Decode {
                message: format!("{operation} failed: {error}"),
            });
        }

        let header_snapshot = rate_limit_from_headers(response.headers());
        let body = self
            .client
            .body_to_string(response)
            .await
            .unwrap_or_default();
        let error_body = GitHubErrorBody::parse(&body);

        if is_rate_limit_response(status, &error_body, header_snapshot.as_ref()) {
            return Err(self
                .rate_limit_error(operation, error_body.message, header_snapshot)
                .await);
        }

        Err(map_http_error(operation, status, error_body.message))
    }

    async fn rate_limit_error(
        &self,
        operation: &str,
        maybe_message: Option<String>,
        header_snapshot: Option<RateLimitInfo>,
    ) -> FetchError {
        let rate_limit = match header_snapshot {
            Some(info) => Some(info),
            None => self.fetch_rate_limit_info().await,
        };
        let reason = maybe_message.unwrap_or_else(|| "rate limit exceeded".to_owned());
        let base_message = format!("{operation} failed: {reason}");
        let message = rate_limit.map_or_else(
            || base_message.clone(),
            |info| format!("{base_message} ({info})"),
        );

        tracing::warn!(operation, %message, "GitHub rate limit reached");

        FetchError::RateLimitExceeded {
            rate_limit,
            message,
        }
    }

    async fn fetch_rate_limit_info(&self) -> Option<RateLimitInfo> {
        let rate = self.client.ratelimit().get().await.ok()?.rate;
        let Ok(limit) = u32::try_from(rate.limit) else {
            return None;
        };
        let Ok(remaining) = u32::try_from(rate.remaining) else {
            return None;
        };
        Some(RateLimitInfo::new(limit, remaining, rate.reset))
    }
}

fn request_uri(path: &str, query_params: &[(&str, &str)]) -> Result<Uri, FetchError> {
    let target = if query_params.is_empty() {
        path.to_owned()
    } else {
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(query_params)
            .finish();
        format!("{path}?{query}")
    };
    target
        .parse::<Uri>()
        .map_err(|error| FetchError::InvalidUrl(error.to_string()))
}

#[async_trait]
impl DashboardGateway for OctocrabDashboardGateway {
    async fn stargazers(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<Vec<UserSummary>, FetchError> {
        let users: Vec<ApiUser> = self
            .fetch_page("list stargazers", &locator.stargazers_path(), request, &[])
            .await?;
        Ok(users.into_iter().map(UserSummary::from).collect())
    }

    async fn fork_owners(
        &self,
        locator: &RepositoryLocator,
        request: PageRequest,
    ) -> Result<Vec<UserSummary>, FetchError> {
        let forks: Vec<ApiFork> = self
            .fetch_page("list forks", &locator.forks_path(), request, &[])
            .await?;
        Ok(forks.into_iter().map(UserSummary::from).collect())
    }

    async fn repositories(
        &self,
        request: PageRequest,
    ) -> Result<Vec<RepositorySummary>, FetchError> {
        let repositories: Vec<ApiRepository> = self
            .fetch_page(
                "list repositories",
                USER_REPOSITORIES_PATH,
                request,
                &[
                    ("visibility", "all"),
                    ("affiliation", REPOSITORY_AFFILIATION),
                ],
            )
            .await?;
        Ok(repositories
            .into_iter()
            .map(RepositorySummary::from)
            .collect())
    }

    async fn workflows(&self, locator: &RepositoryLocator) -> Result<Vec<Workflow>, FetchError> {
        let list: ApiWorkflowList = self
            .fetch_one("list workflows", &locator.workflows_path())
            .await?;
        Ok(list.workflows.into_iter().map(Workflow::from).collect())
    }

    async fn workflow_runs(
        &self,
        locator: &RepositoryLocator,
        workflow: &WorkflowId,
        request: PageRequest,
    ) -> Result<Vec<WorkflowRun>, FetchError> {
        let list: ApiWorkflowRunList = self
            .fetch_page(
                "list workflow runs",
                &locator.workflow_runs_path(workflow),
                request,
                &[],
            )
            .await?;
        Ok(list
            .workflow_runs
            .into_iter()
            .map(WorkflowRun::from)
            .collect())
    }

    async fn repository(
        &self,
        locator: &RepositoryLocator,
    ) -> Result<RepositoryDetails, FetchError> {
        let repository: ApiRepository = self
            .fetch_one("get repository", &locator.repository_path())
            .await?;
        Ok(repository.into())
    }

    async fn open_pull_requests(
        &self,
        locator: &RepositoryLocator,
        limit: PageSize,
    ) -> Result<Vec<PullRequestSummary>, FetchError> {
        let pulls: Vec<ApiPullRequest> = self
            .fetch_limited(
                "list open pull requests",
                &locator.pulls_path(),
                limit,
                &[("state", "open")],
            )
            .await?;
        Ok(pulls.into_iter().map(PullRequestSummary::from).collect())
    }

    async fn contributors(
        &self,
        locator: &RepositoryLocator,
        limit: PageSize,
    ) -> Result<Vec<Contributor>, FetchError> {
        let contributors: Vec<ApiContributor> = self
            .fetch_limited(
                "list contributors",
                &locator.contributors_path(),
                limit,
                &[("anon", "false")],
            )
            .await?;
        Ok(contributors.into_iter().map(Contributor::from).collect())
    }

    async fn user_profile(&self, login: &UserLogin) -> Result<UserProfile, FetchError> {
        let profile: ApiUserProfile = self
            .fetch_one("get user profile", &login.profile_path())
            .await?;
        Ok(profile.into())
    }
}
