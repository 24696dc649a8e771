//! Shared test utilities.

pub mod runtime;

use serde_json::{Value, json};

/// Stargazer payloads with logins `user{first}`, `user{first + 1}`, ...
pub fn stargazer_payloads(first: u64, count: u64) -> Vec<Value> {
    (first..first.saturating_add(count))
        .map(|id| {
            json!({
                "id": id,
                "login": format!("user{id}"),
                "avatar_url": format!("https://avatars.example.com/u/{id}"),
                "html_url": format!("https://github.com/user{id}")
            })
        })
        .collect()
}

/// A workflow run payload.
///
/// `outcome` is either `status/conclusion` (e.g. `completed/success`) or a
/// bare status for runs that have not finished.
pub fn workflow_run_payload(id: u64, outcome: &str) -> Value {
    let (status, conclusion) = outcome
        .split_once('/')
        .map_or((outcome, None), |(status, conclusion)| {
            (status, Some(conclusion))
        });
    json!({
        "id": id,
        "name": "CI",
        "run_number": id,
        "status": status,
        "conclusion": conclusion,
        "event": "push",
        "head_branch": "main",
        "actor": { "login": "octocat" },
        "created_at": "2024-01-01T00:00:00Z"
    })
}

/// Standard GitHub error body.
pub fn error_body(message: &str) -> Value {
    json!({
        "message": message,
        "documentation_url": "https://docs.github.com/rest"
    })
}
