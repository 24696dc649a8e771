//! Tests for [`RepositoryLocator`] and the identity wrappers.

use rstest::rstest;

use crate::github::{
    FetchError, PersonalAccessToken, RepositoryLocator, UserLogin, WorkflowId, parse_api_base,
};

#[rstest]
fn parses_repository_url() {
    let locator = RepositoryLocator::parse("https://github.com/octo/repo")
        .expect("should parse repository URL");
    assert_eq!(locator.owner().as_str(), "octo", "owner mismatch");
    assert_eq!(locator.repository().as_str(), "repo", "repository mismatch");
    assert_eq!(
        locator.api_base().as_str(),
        "https://api.github.com/",
        "api base mismatch"
    );
}

#[rstest]
fn parses_repository_url_with_trailing_path() {
    let locator = RepositoryLocator::parse("https://github.com/octo/repo/actions")
        .expect("should parse repository URL with trailing path");
    assert_eq!(locator.slug(), "octo/repo", "slug mismatch");
}

#[rstest]
#[case::plain("https://ghe.example.com/foo/bar", "https://ghe.example.com/api/v3")]
#[case::with_port(
    "https://ghe.example.com:8443/foo/bar",
    "https://ghe.example.com:8443/api/v3"
)]
fn parses_enterprise_repository_url(#[case] input: &str, #[case] expected_base: &str) {
    let locator = RepositoryLocator::parse(input).expect("should parse enterprise URL");
    assert_eq!(
        locator.api_base().as_str(),
        expected_base,
        "enterprise api base mismatch"
    );
}

#[rstest]
fn slug_builds_collection_paths() {
    let locator = RepositoryLocator::from_slug("octo/repo").expect("should parse slug");
    let workflow = WorkflowId::new("ci.yml").expect("workflow id should be valid");

    assert_eq!(locator.stargazers_path(), "/repos/octo/repo/stargazers");
    assert_eq!(locator.forks_path(), "/repos/octo/repo/forks");
    assert_eq!(locator.contributors_path(), "/repos/octo/repo/contributors");
    assert_eq!(
        locator.workflow_runs_path(&workflow),
        "/repos/octo/repo/actions/workflows/ci.yml/runs"
    );
}

#[rstest]
#[case::empty_owner("", "repo")]
#[case::empty_repo("octo", "")]
fn rejects_empty_segment(#[case] owner: &str, #[case] repo: &str) {
    let result = RepositoryLocator::from_owner_repo(owner, repo);
    assert!(
        matches!(result, Err(FetchError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
#[case::no_separator("octo")]
#[case::too_many("octo/repo/extra")]
#[case::blank_owner("/repo")]
fn rejects_malformed_slug(#[case] slug: &str) {
    let result = RepositoryLocator::from_slug(slug);
    assert!(
        matches!(result, Err(FetchError::MissingPathSegments)),
        "expected MissingPathSegments, got {result:?}"
    );
}

#[rstest]
fn rejects_invalid_url() {
    let result = RepositoryLocator::parse("octo/repo");
    assert!(
        matches!(result, Err(FetchError::InvalidUrl(_))),
        "expected InvalidUrl for malformed URL, got {result:?}"
    );
}

#[rstest]
fn explicit_api_base_overrides_derived_one() {
    let api_base = parse_api_base("https://ghe.internal/api/v3").expect("base should parse");
    let locator = RepositoryLocator::from_owner_repo("octo", "repo")
        .expect("should create locator")
        .with_api_base(api_base.clone());
    assert_eq!(locator.api_base(), &api_base);
}

#[rstest]
fn rejects_empty_token() {
    let result = PersonalAccessToken::new("   ");
    assert!(
        matches!(result, Err(FetchError::MissingToken)),
        "expected MissingToken, got {result:?}"
    );
}

#[rstest]
fn user_login_is_trimmed() {
    let login = UserLogin::new("  octocat ").expect("login should be valid");
    assert_eq!(login.as_str(), "octocat");
    assert_eq!(login.profile_path(), "/users/octocat");
    assert!(
        matches!(UserLogin::new(""), Err(FetchError::MissingUserLogin)),
        "blank login should be rejected"
    );
}

#[rstest]
fn workflow_id_rejects_blank() {
    let result = WorkflowId::new(" ");
    assert!(
        matches!(result, Err(FetchError::Configuration { .. })),
        "expected Configuration, got {result:?}"
    );
    assert_eq!(WorkflowId::from(42).as_str(), "42");
}
