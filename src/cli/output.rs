//! Output formatting utilities for CLI views.

use std::io::{self, Write};

use repopulse::github::models::{
    RepositorySummary, UserProfile, UserSummary, Workflow, WorkflowRun,
};
use repopulse::github::{
    Collected, CollectionStatus, FetchError, PageInfo, RepositoryOverview, StopReason,
};
use repopulse::workflow::StatusTally;

/// Writes the "could not load" line or the truncation note for `collected`.
///
/// Returns `false` when nothing could be loaded and the caller should not
/// render a listing.
pub fn write_collection_status<W: Write, T>(
    writer: &mut W,
    what: &str,
    collected: &Collected<T>,
) -> Result<bool, FetchError> {
    match collected.status() {
        CollectionStatus::Complete => Ok(true),
        CollectionStatus::Unavailable => {
            let reason = stop_description(collected.stop_reason());
            writeln!(writer, "Could not load {what}: {reason}").map_err(|e| io_error(&e))?;
            Ok(false)
        }
        CollectionStatus::Partial => {
            let reason = stop_description(collected.stop_reason());
            writeln!(
                writer,
                "Showing {count} {what} from {pages} page(s); stopped early: {reason}",
                count = collected.items().len(),
                pages = collected.pages_fetched(),
            )
            .map_err(|e| io_error(&e))?;
            Ok(true)
        }
    }
}

fn stop_description(reason: &StopReason) -> String {
    match reason {
        StopReason::Failed { page, error } => format!("page {} failed: {error}", page.get()),
        StopReason::Cancelled { page } => format!("cancelled before page {}", page.get()),
        StopReason::ShortPage | StopReason::EmptyPage => "collection exhausted".to_owned(),
    }
}

/// Writes a user listing such as stargazers or fork owners.
pub fn write_user_listing<W: Write>(
    writer: &mut W,
    heading: &str,
    collected: &Collected<UserSummary>,
) -> Result<(), FetchError> {
    writeln!(writer, "{heading}:").map_err(|e| io_error(&e))?;
    if !write_collection_status(writer, "users", collected)? {
        return Ok(());
    }

    for user in collected.items() {
        writeln!(writer, "  @{}", user.login).map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "Total: {}", collected.items().len()).map_err(|e| io_error(&e))
}

/// Writes one page of stargazers with navigation hints.
pub fn write_stargazer_page<W: Write>(
    writer: &mut W,
    slug: &str,
    users: &[UserSummary],
    info: &PageInfo,
) -> Result<(), FetchError> {
    writeln!(writer, "Stargazers of {slug} (page {}):", info.current_page())
        .map_err(|e| io_error(&e))?;
    for user in users {
        writeln!(writer, "  @{}", user.login).map_err(|e| io_error(&e))?;
    }

    writeln!(
        writer,
        "{} user(s) shown, {} per page",
        info.item_count(),
        info.per_page()
    )
    .map_err(|e| io_error(&e))?;
    if let Some(prev) = info.prev_page() {
        writeln!(writer, "Previous page: {prev}").map_err(|e| io_error(&e))?;
    }
    if let Some(next) = info.next_page() {
        writeln!(writer, "Next page: {next}").map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes the authenticated user's repositories.
pub fn write_repository_listing<W: Write>(
    writer: &mut W,
    collected: &Collected<RepositorySummary>,
) -> Result<(), FetchError> {
    writeln!(writer, "Repositories:").map_err(|e| io_error(&e))?;
    if !write_collection_status(writer, "repositories", collected)? {
        return Ok(());
    }

    for repository in collected.items() {
        let visibility = if repository.private { "private" } else { "public" };
        let language = repository.language.as_deref().unwrap_or("-");
        writeln!(
            writer,
            "  {} [{visibility}] {language} ★{} ⑂{}",
            repository.full_name, repository.stargazers_count, repository.forks_count
        )
        .map_err(|e| io_error(&e))?;
    }
    writeln!(writer, "Total: {}", collected.items().len()).map_err(|e| io_error(&e))
}

/// Writes a workflow's recent runs and the status legend.
pub fn write_workflow_runs<W: Write>(
    writer: &mut W,
    workflow: &str,
    runs: &[WorkflowRun],
    tally: &StatusTally,
) -> Result<(), FetchError> {
    writeln!(writer, "Recent runs of {workflow}:").map_err(|e| io_error(&e))?;
    for run in runs {
        let status = run
            .conclusion
            .as_ref()
            .map(|conclusion| conclusion.as_str())
            .or_else(|| run.status.as_ref().map(|status| status.as_str()))
            .unwrap_or("unknown");
        let branch = run.head_branch.as_deref().unwrap_or("-");
        let actor = run.actor.as_deref().unwrap_or("unknown");
        writeln!(
            writer,
            "  #{} [{status}] {branch} (@{actor})",
            run.run_number
        )
        .map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    if tally.is_empty() {
        return writeln!(writer, "No runs to summarise.").map_err(|e| io_error(&e));
    }
    writeln!(writer, "Status summary ({} runs):", tally.total()).map_err(|e| io_error(&e))?;
    for entry in tally.entries() {
        writeln!(
            writer,
            "  {}: {} ({})",
            entry.label,
            entry.count,
            format_share(entry.count, tally.total())
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Share of `count` in `total` in tenths of a percent, rounded half up.
///
/// Returns `None` for an empty total or on overflow.
fn share_per_mille(count: usize, total: usize) -> Option<usize> {
    let half = total.checked_div(2)?;
    count
        .checked_mul(1000)?
        .checked_add(half)?
        .checked_div(total)
}

/// Renders a share as `66.7%`.
fn format_share(count: usize, total: usize) -> String {
    share_per_mille(count, total)
        .and_then(|per_mille| {
            let whole = per_mille.checked_div(10)?;
            let tenth = per_mille.checked_rem(10)?;
            Some(format!("{whole}.{tenth}%"))
        })
        .unwrap_or_else(|| "-".to_owned())
}

/// Writes the list of active workflows the runs were chosen from.
pub fn write_active_workflows<W: Write>(
    writer: &mut W,
    workflows: &[&Workflow],
) -> Result<(), FetchError> {
    if workflows.is_empty() {
        return writeln!(writer, "No active workflows.").map_err(|e| io_error(&e));
    }
    writeln!(writer, "Active workflows:").map_err(|e| io_error(&e))?;
    for workflow in workflows {
        writeln!(writer, "  {} ({})", workflow.name, workflow.id).map_err(|e| io_error(&e))?;
    }
    writeln!(writer).map_err(|e| io_error(&e))
}

/// Writes the repository overview.
pub fn write_overview<W: Write>(
    writer: &mut W,
    overview: &RepositoryOverview,
) -> Result<(), FetchError> {
    let repository = &overview.repository;
    writeln!(writer, "{}", repository.full_name).map_err(|e| io_error(&e))?;
    if let Some(description) = repository.description.as_deref() {
        writeln!(writer, "{description}").map_err(|e| io_error(&e))?;
    }
    writeln!(
        writer,
        "Stars: {}  Forks: {}  Watchers: {}  Open issues: {}",
        repository.stargazers_count,
        repository.forks_count,
        repository.watchers_count,
        repository.open_issues_count
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Language: {}  Licence: {}  Default branch: {}",
        repository.language.as_deref().unwrap_or("-"),
        repository.license.as_deref().unwrap_or("-"),
        repository.default_branch.as_deref().unwrap_or("-")
    )
    .map_err(|e| io_error(&e))?;
    writeln!(
        writer,
        "Workflows: {} ({} active)",
        overview.workflows.len(),
        overview.active_workflows()
    )
    .map_err(|e| io_error(&e))?;

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "Open pull requests:").map_err(|e| io_error(&e))?;
    if overview.pull_requests.is_empty() {
        writeln!(writer, "  none").map_err(|e| io_error(&e))?;
    }
    for pull in &overview.pull_requests {
        let title = pull.title.as_deref().unwrap_or("(no title)");
        let author = pull.author.as_deref().unwrap_or("unknown");
        writeln!(writer, "  #{} {title} (@{author})", pull.number).map_err(|e| io_error(&e))?;
    }

    writeln!(writer).map_err(|e| io_error(&e))?;
    writeln!(writer, "Top contributors:").map_err(|e| io_error(&e))?;
    for contributor in &overview.contributors {
        writeln!(
            writer,
            "  @{} ({} contributions)",
            contributor.login, contributor.contributions
        )
        .map_err(|e| io_error(&e))?;
    }
    Ok(())
}

/// Writes a user's public profile.
pub fn write_profile<W: Write>(writer: &mut W, profile: &UserProfile) -> Result<(), FetchError> {
    let heading = profile.name.as_deref().map_or_else(
        || format!("@{}", profile.login),
        |name| format!("{name} (@{})", profile.login),
    );
    writeln!(writer, "{heading}").map_err(|e| io_error(&e))?;

    if let Some(bio) = profile.bio.as_deref() {
        writeln!(writer, "{bio}").map_err(|e| io_error(&e))?;
    }
    let details = [
        ("Company", profile.company.as_deref()),
        ("Location", profile.location.as_deref()),
        ("Blog", profile.blog.as_deref()),
        ("Email", profile.email.as_deref()),
        ("Twitter", profile.twitter_username.as_deref()),
    ];
    for (label, value) in details {
        if let Some(value) = value.filter(|value| !value.is_empty()) {
            writeln!(writer, "{label}: {value}").map_err(|e| io_error(&e))?;
        }
    }
    writeln!(
        writer,
        "Repositories: {}  Followers: {}  Following: {}",
        profile.public_repos, profile.followers, profile.following
    )
    .map_err(|e| io_error(&e))
}

/// Converts an I/O error to a [`FetchError::Io`].
pub(crate) fn io_error(error: &io::Error) -> FetchError {
    FetchError::Io {
        message: error.to_string(),
    }
}
