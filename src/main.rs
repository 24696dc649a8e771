//! Repopulse CLI entrypoint for the GitHub dashboard views.

use std::io::{self, Write};
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use repopulse::{DashboardView, FetchError, RepopulseConfig};

mod cli;

use cli::collections::Collection;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), FetchError> {
    let config = load_config()?;
    let sink = cli::telemetry_sink(&config);

    match config.dashboard_view()? {
        DashboardView::Stargazers => {
            cli::collections::run(&config, Collection::Stargazers, sink.as_ref()).await
        }
        DashboardView::Forks => {
            cli::collections::run(&config, Collection::Forks, sink.as_ref()).await
        }
        DashboardView::Repositories => {
            cli::collections::run(&config, Collection::Repositories, sink.as_ref()).await
        }
        DashboardView::Workflows => cli::workflows::run(&config).await,
        DashboardView::UserProfile => cli::profile::run(&config).await,
        DashboardView::Overview => cli::overview::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`FetchError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<RepopulseConfig, FetchError> {
    RepopulseConfig::load().map_err(|error| FetchError::Configuration {
        message: error.to_string(),
    })
}
