//! Workflow runs view with a status tally.

use std::io::{self, Write};

use repopulse::github::{
    CollectionIntake, DashboardGateway, FetchError, OctocrabDashboardGateway,
    PersonalAccessToken, Workflow, WorkflowId,
};
use repopulse::workflow::{active_workflows, select_workflow, tally_run_statuses};
use repopulse::RepopulseConfig;
use url::Url;

use super::output::{write_active_workflows, write_workflow_runs};
use super::{optional_token, paginator};

/// Shows the recent runs of one workflow and tallies their outcomes.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] if required configuration is missing.
/// Returns the gateway error when the workflows or runs cannot be loaded.
pub async fn run(config: &RepopulseConfig) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabDashboardGateway::connect, &mut stdout).await
}

/// Shows workflow runs using a custom gateway builder.
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
    let limit = config.run_limit()?;
    let configured = config.workflow_id()?;
    let token = optional_token(config)?;

    let gateway = build_gateway(locator.api_base(), token.as_ref())?;
    let workflows = gateway.workflows(&locator).await?;
    let active = active_workflows(&workflows);
    write_active_workflows(writer, &active)?;

    let Some((workflow_id, label)) = choose_workflow(&workflows, configured) else {
        return Ok(());
    };

    let intake = CollectionIntake::new(&gateway, paginator(config)?);
    let runs = intake
        .recent_workflow_runs(&locator, &workflow_id, limit)
        .await?;
    let tally = tally_run_statuses(&runs);
    write_workflow_runs(writer, &label, &runs, &tally)
}

/// Resolves the workflow to show and the label used in the heading.
///
/// A numeric id is matched against the active workflows, falling back to the
/// first by name. Any other value is a workflow file name and is used as is.
fn choose_workflow(
    workflows: &[Workflow],
    configured: Option<WorkflowId>,
) -> Option<(WorkflowId, String)> {
    if let Some(file_name) = configured
        .as_ref()
        .filter(|id| id.as_str().parse::<u64>().is_err())
    {
        return Some((file_name.clone(), file_name.as_str().to_owned()));
    }

    let preferred = configured.and_then(|id| id.as_str().parse::<u64>().ok());
    select_workflow(workflows, preferred)
        .map(|workflow| (WorkflowId::from(workflow.id), workflow.name.clone()))
}
