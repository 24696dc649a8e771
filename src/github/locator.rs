//! URL parsing and identity wrappers for repository, user and workflow targets.

use url::Url;

use super::error::FetchError;

const PUBLIC_API_BASE: &str = "https://api.github.com";

/// Repository owner wrapper to avoid stringly typed parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryOwner(String);

impl RepositoryOwner {
    pub(crate) fn new(value: &str) -> Result<Self, FetchError> {
        if value.is_empty() {
            return Err(FetchError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the owner value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// Repository name wrapper to prevent parameter mix-ups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryName(String);

impl RepositoryName {
    pub(crate) fn new(value: &str) -> Result<Self, FetchError> {
        if value.is_empty() {
            return Err(FetchError::MissingPathSegments);
        }
        Ok(Self(value.to_owned()))
    }

    /// Borrow the repository name.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

/// GitHub user login, used for profile lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserLogin(String);

impl UserLogin {
    /// Validates that the login is non-blank and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingUserLogin` when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, FetchError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FetchError::MissingUserLogin);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the login value.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub(crate) fn profile_path(&self) -> String {
        format!("/users/{}", self.0)
    }
}

/// Workflow identifier: either the numeric id or the workflow file name
/// (for example `ci.yml`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowId(String);

impl WorkflowId {
    /// Parses a workflow id or file name.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Configuration` when the value is blank.
    pub fn new(value: impl AsRef<str>) -> Result<Self, FetchError> {
        let trimmed = value.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FetchError::Configuration {
                message: "workflow id must not be blank".to_owned(),
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the identifier.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<u64> for WorkflowId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

/// Personal access token wrapper enforcing presence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalAccessToken(String);

impl PersonalAccessToken {
    /// Validates that the token is non-empty and trims whitespace.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingToken` when the supplied string is blank.
    pub fn new(token: impl AsRef<str>) -> Result<Self, FetchError> {
        let trimmed = token.as_ref().trim();
        if trimmed.is_empty() {
            return Err(FetchError::MissingToken);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Borrow the token value.
    #[must_use]
    pub const fn value(&self) -> &str {
        self.0.as_str()
    }
}

impl AsRef<str> for PersonalAccessToken {
    fn as_ref(&self) -> &str {
        self.value()
    }
}

/// Returns the public GitHub API base URL.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` if the constant cannot be parsed.
pub fn public_api_base() -> Result<Url, FetchError> {
    Url::parse(PUBLIC_API_BASE).map_err(|error| FetchError::InvalidUrl(error.to_string()))
}

/// Parses an explicit API base URL such as `https://ghe.example.com/api/v3`.
///
/// # Errors
///
/// Returns `FetchError::InvalidUrl` when the value is not an absolute URL with
/// a host.
pub fn parse_api_base(input: &str) -> Result<Url, FetchError> {
    let parsed = Url::parse(input).map_err(|error| FetchError::InvalidUrl(error.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(FetchError::InvalidUrl("URL must include a host".to_owned()));
    }
    Ok(parsed)
}

/// Derives the GitHub API base URL from a host string.
fn derive_api_base_from_host(
    scheme: &str,
    host: &str,
    port: Option<u16>,
) -> Result<Url, FetchError> {
    if host.eq_ignore_ascii_case("github.com") {
        public_api_base()
    } else {
        let authority = if host.contains(':') {
            format!("[{host}]")
        } else {
            host.to_owned()
        };
        let mut api_url = Url::parse(&format!("{scheme}://{authority}"))
            .map_err(|error| FetchError::InvalidUrl(error.to_string()))?;

        api_url
            .set_port(port)
            .map_err(|()| FetchError::InvalidUrl("invalid port".to_owned()))?;
        api_url.set_path("api/v3");
        Ok(api_url)
    }
}

fn derive_api_base(parsed: &Url) -> Result<Url, FetchError> {
    let host = parsed
        .host_str()
        .ok_or_else(|| FetchError::InvalidUrl("URL must include a host".to_owned()))?;

    derive_api_base_from_host(parsed.scheme(), host, parsed.port())
}

/// Repository identity with the API base it is served from.
///
/// This carries the collection owner and collection name that every
/// page request targets.
///
/// # Example
///
/// ```
/// use repopulse::github::RepositoryLocator;
///
/// let locator = RepositoryLocator::parse("https://github.com/octo/repo")
///     .expect("should parse repository URL");
/// assert_eq!(locator.owner().as_str(), "octo");
/// assert_eq!(locator.repository().as_str(), "repo");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryLocator {
    api_base: Url,
    owner: RepositoryOwner,
    repository: RepositoryName,
}

impl RepositoryLocator {
    /// Creates a repository locator from owner and repository name strings.
    ///
    /// Uses the public GitHub API as the default host.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingPathSegments` when owner or repo is empty.
    pub fn from_owner_repo(owner: &str, repo: &str) -> Result<Self, FetchError> {
        let validated_owner = RepositoryOwner::new(owner)?;
        let repository = RepositoryName::new(repo)?;

        Ok(Self {
            api_base: public_api_base()?,
            owner: validated_owner,
            repository,
        })
    }

    /// Parses a `<owner>/<repo>` slug as shown on dashboard links.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingPathSegments` when either half is missing.
    pub fn from_slug(slug: &str) -> Result<Self, FetchError> {
        let (owner, repo) = slug
            .trim()
            .trim_matches('/')
            .split_once('/')
            .ok_or(FetchError::MissingPathSegments)?;
        if repo.contains('/') {
            return Err(FetchError::MissingPathSegments);
        }
        Self::from_owner_repo(owner, repo)
    }

    /// Parses a GitHub repository URL in the form
    /// `https://github.com/<owner>/<repo>`.
    ///
    /// GitHub Enterprise hosts map to `https://<host>/api/v3`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidUrl` when parsing fails or
    /// `MissingPathSegments` when the URL path is not `/owner/repo`.
    pub fn parse(input: &str) -> Result<Self, FetchError> {
        let parsed =
            Url::parse(input).map_err(|error| FetchError::InvalidUrl(error.to_string()))?;

        let mut segments = parsed
            .path_segments()
            .ok_or(FetchError::MissingPathSegments)?;

        let owner_segment = segments.next().ok_or(FetchError::MissingPathSegments)?;
        let repository_segment = segments.next().ok_or(FetchError::MissingPathSegments)?;

        let owner = RepositoryOwner::new(owner_segment)?;
        let repository = RepositoryName::new(repository_segment)?;
        let api_base = derive_api_base(&parsed)?;

        Ok(Self {
            api_base,
            owner,
            repository,
        })
    }

    /// Replaces the API base, for callers that configure it explicitly.
    #[must_use]
    pub fn with_api_base(mut self, api_base: Url) -> Self {
        self.api_base = api_base;
        self
    }

    /// API base URL derived from the repository host.
    #[must_use]
    pub const fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// Repository owner.
    #[must_use]
    pub const fn owner(&self) -> &RepositoryOwner {
        &self.owner
    }

    /// Repository name.
    #[must_use]
    pub const fn repository(&self) -> &RepositoryName {
        &self.repository
    }

    /// Returns `owner/repo` for display.
    #[must_use]
    pub fn slug(&self) -> String {
        format!("{}/{}", self.owner.as_str(), self.repository.as_str())
    }

    pub(crate) fn repository_path(&self) -> String {
        format!("/repos/{}", self.slug())
    }

    pub(crate) fn stargazers_path(&self) -> String {
        format!("{}/stargazers", self.repository_path())
    }

    pub(crate) fn forks_path(&self) -> String {
        format!("{}/forks", self.repository_path())
    }

    pub(crate) fn pulls_path(&self) -> String {
        format!("{}/pulls", self.repository_path())
    }

    pub(crate) fn contributors_path(&self) -> String {
        format!("{}/contributors", self.repository_path())
    }

    pub(crate) fn workflows_path(&self) -> String {
        format!("{}/actions/workflows", self.repository_path())
    }

    pub(crate) fn workflow_runs_path(&self, workflow: &WorkflowId) -> String {
        format!("{}/{}/runs", self.workflows_path(), workflow.as_str())
    }
}
