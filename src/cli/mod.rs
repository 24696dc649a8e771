//! CLI view handlers.
//!
//! This module contains one handler per dashboard view:
//! - [`collections`]: Stargazers, fork owners and the user's repositories
//! - [`workflows`]: Recent runs of a workflow with a status tally
//! - [`overview`]: Repository overview
//! - [`profile`]: A user's public profile
//!
//! Output formatting utilities are in [`output`].

use repopulse::github::{ExhaustivePaginator, FetchError, PersonalAccessToken};
use repopulse::telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetrySink};
use repopulse::RepopulseConfig;

pub mod collections;
pub mod output;
pub mod overview;
pub mod profile;
pub mod workflows;

#[cfg(test)]
pub mod test_utils;

/// Builds the paginator described by the configuration.
pub(crate) fn paginator(config: &RepopulseConfig) -> Result<ExhaustivePaginator, FetchError> {
    Ok(ExhaustivePaginator::new(config.page_size()?).with_rule(config.termination_rule()))
}

/// Token for views that also work anonymously.
pub(crate) fn optional_token(
    config: &RepopulseConfig,
) -> Result<Option<PersonalAccessToken>, FetchError> {
    config
        .optional_token()
        .map(PersonalAccessToken::new)
        .transpose()
}

/// Selects the telemetry sink requested by the configuration.
#[must_use]
pub fn telemetry_sink(config: &RepopulseConfig) -> Box<dyn TelemetrySink> {
    if config.telemetry {
        Box::new(StderrJsonlTelemetrySink)
    } else {
        Box::new(NoopTelemetrySink)
    }
}
