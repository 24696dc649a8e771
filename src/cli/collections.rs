//! Exhaustive collection views: stargazers, fork owners and repositories.

use std::io::{self, Write};

use repopulse::github::{
    CollectionIntake, DashboardGateway, FetchError, OctocrabDashboardGateway, PageRequest,
    PersonalAccessToken,
};
use repopulse::telemetry::{TelemetryEvent, TelemetrySink};
use repopulse::RepopulseConfig;
use url::Url;

use super::output::{write_repository_listing, write_stargazer_page, write_user_listing};
use super::{optional_token, paginator};

/// Collection listed by [`run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    /// Users who starred the configured repository.
    Stargazers,
    /// Owners of the configured repository's forks.
    Forks,
    /// Repositories visible to the authenticated user.
    Repositories,
}

impl Collection {
    const fn telemetry_name(self) -> &'static str {
        match self {
            Self::Stargazers => "stargazers",
            Self::Forks => "forks",
            Self::Repositories => "repositories",
        }
    }
}

/// Lists every item of a collection.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] if required configuration is missing
/// or `--page` is given for a view other than stargazers. A collection that
/// fails while paging is reported in the output rather than as an error.
pub async fn run(
    config: &RepopulseConfig,
    collection: Collection,
    sink: &dyn TelemetrySink,
) -> Result<(), FetchError> {
    let mut stdout = io::stdout().lock();
    run_with_gateway_builder(
        config,
        collection,
        OctocrabDashboardGateway::connect,
        sink,
        &mut stdout,
    )
    .await
}

/// Lists a collection using a custom gateway builder.
///
/// This function is exposed for testing with scripted gateways.
pub async fn run_with_gateway_builder<G, F, W>(
    config: &RepopulseConfig,
    collection: Collection,
    build_gateway: F,
    sink: &dyn TelemetrySink,
    writer: &mut W,
) -> Result<(), FetchError>
where
    G: DashboardGateway,
    F: FnOnce(&Url, Option<&PersonalAccessToken>) -> Result<G, FetchError>,
    W: Write,
{
    let paginator = paginator(config)?;
    let browse_page = config.browse_page()?;

    if browse_page.is_some() && collection != Collection::Stargazers {
        return Err(FetchError::Configuration {
            message: format!(
                "--page is only supported by the stargazers view, not {}",
                collection.telemetry_name()
            ),
        });
    }

    if collection == Collection::Repositories {
        let token = PersonalAccessToken::new(config.resolve_token()?)?;
        let gateway = build_gateway(&config.api_base()?, Some(&token))?;
        let intake = CollectionIntake::new(&gateway, paginator);
        let repositories = intake.all_repositories().await;
        sink.record(TelemetryEvent::collection_fetched(
            collection.telemetry_name(),
            &repositories,
        ));
        return write_repository_listing(writer, &repositories);
    }

    let locator = config.require_repository()?;
    let token = optional_token(config)?;
    let gateway = build_gateway(locator.api_base(), token.as_ref())?;
    let intake = CollectionIntake::new(&gateway, paginator);
    let slug = locator.slug();

    if collection == Collection::Stargazers
        && let Some(page) = browse_page
    {
        let request = PageRequest::new(page, intake.paginator().page_size());
        let (users, info) = intake.stargazer_page(&locator, request).await?;
        return write_stargazer_page(writer, &slug, &users, &info);
    }

    let (heading, users) = if collection == Collection::Forks {
        (
            format!("Fork owners of {slug}"),
            intake.all_fork_owners(&locator).await,
        )
    } else {
        (
            format!("Stargazers of {slug}"),
            intake.all_stargazers(&locator).await,
        )
    };
    sink.record(TelemetryEvent::collection_fetched(
        collection.telemetry_name(),
        &users,
    ));
    write_user_listing(writer, &heading, &users)
}
