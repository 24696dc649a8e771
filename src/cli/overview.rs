//! Repository overview view.

use std::io::{self, Write};

use repopulse::github::{
    DashboardGateway, FetchError, OctocrabDashboardGateway, PersonalAccessToken, load_overview,
};
use repopulse::RepopulseConfig;
use url::Url;

use super::optional_token;
use super::output::write_overview;

/// Shows repository details, open pull requests, contributors and workflows.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] if no repository is configured.
/// Returns the first gateway error when any part of the overview fails.
pub async fn run(config: &RepopulseConfig) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabDashboardGateway::connect, &mut stdout).await
}

/// Shows the overview using a custom gateway builder.
///
/// This function is exposed for testing with scripted gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &RepopulseConfig,
    build_gateway: F,
    writer: &mut W,
) -> Result<(), FetchError>
where
    G: DashboardGateway,
    F: FnOnce(&Url, Option<&PersonalAccessToken>) -> Result<G, FetchError>,
    W: Write,
{
    let locator = config.require_repository()?;
    let token = optional_token(config)?;
    let gateway = build_gateway(locator.api_base(), token.as_ref())?;

    let overview = load_overview(&gateway, &locator).await?;
    write_overview(writer, &overview)
}

#[cfg(test)]
mod tests {
    use repopulse::github::models::RepositoryDetails;
    use repopulse::github::models::test_support::workflow;
    use repopulse::github::{FetchError, WorkflowState};
    use repopulse::RepopulseConfig;
    use rstest::rstest;

    use super::run_with_gateway_builder;
    use crate::cli::test_utils::ScriptedGateway;

    #[rstest]
    #[tokio::test]
    async fn overview_uses_enterprise_api_base_and_writes_summary() {
        let config = RepopulseConfig {
            repo_url: Some("https://ghe.example.com/octo/repo".to_owned()),
            token: Some("ghp_example".to_owned()),
            ..Default::default()
        };
        let gateway = ScriptedGateway {
            details: RepositoryDetails {
                full_name: "octo/repo".to_owned(),
                stargazers_count: 42,
                ..Default::default()
            },
            workflows: vec![
                workflow(1, "CI", WorkflowState::Active),
                workflow(2, "Old", WorkflowState::Deleted),
            ],
            ..Default::default()
        };
        let mut buffer = Vec::new();

        let scripted = gateway.clone();
        run_with_gateway_builder(
            &config,
            move |api_base, token| {
                assert_eq!(api_base.as_str(), "https://ghe.example.com/api/v3");
                assert_eq!(token.map(|value| value.value()), Some("ghp_example"));
                Ok(scripted)
            },
            &mut buffer,
        )
        .await
        .expect("overview should succeed");

        let calls = gateway.calls();
        assert!(calls.contains(&"pulls octo/repo limit=10".to_owned()), "{calls:?}");
        assert!(calls.contains(&"contributors octo/repo limit=10".to_owned()), "{calls:?}");

        let output = String::from_utf8(buffer).expect("output should be valid UTF-8");
        assert!(output.contains("Stars: 42"), "missing counts: {output}");
        assert!(output.contains("Workflows: 2 (1 active)"), "missing workflows: {output}");
    }

    #[rstest]
    #[tokio::test]
    async fn overview_requires_a_repository() {
        let mut buffer = Vec::new();
        let result = run_with_gateway_builder(
            &RepopulseConfig::default(),
            |_, _| Ok(ScriptedGateway::default()),
            &mut buffer,
        )
        .await;

        assert!(
            matches!(result, Err(FetchError::Configuration { .. })),
            "expected Configuration, got {result:?}"
        );
    }
}
