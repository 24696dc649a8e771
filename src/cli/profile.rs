//! User profile view.

use std::io::{self, Write};

use repopulse::github::{
    DashboardGateway, FetchError, OctocrabDashboardGateway, PersonalAccessToken,
};
use repopulse::RepopulseConfig;
use url::Url;

use super::optional_token;
use super::output::write_profile;

/// Shows a user's public profile.
///
/// # Errors
///
/// Returns [`FetchError::MissingUserLogin`] if no user is configured.
/// Returns the gateway error when the profile cannot be loaded.
pub async fn run(config: &RepopulseConfig) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(config, OctocrabDashboardGateway::connect, &mut stdout).await
}

/// Shows a profile using a custom gateway builder.
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
    let login = config.require_user()?;
    let token = optional_token(config)?;
    let gateway = build_gateway(&config.api_base()?, token.as_ref())?;

    let profile = gateway.user_profile(&login).await?;
    write_profile(writer, &profile)
}
