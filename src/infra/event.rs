use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::domain::snapshot::PullRequestSnapshot;
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    body: Option<String>,
    head: HeadRef,
}

#[derive(Deserialize)]
struct HeadRef {
    #[serde(rename = "ref")]
    branch: String,
}

/// Read the runner's event payload and build a snapshot of the triggering
/// pull request. `Ok(None)` means the event carries no pull request, which
/// is a valid no-op trigger.
///
/// `repository` is the runner's `owner/repo` coordinate pair; title and
/// body may be absent or null in the payload and default to empty.
pub fn load_snapshot(
    event_path: &Path,
    repository: &str,
) -> AppResult<Option<PullRequestSnapshot>> {
    let raw = fs::read_to_string(event_path)?;
    let payload: EventPayload = serde_json::from_str(&raw)
        .map_err(|err| AppError::Event(format!("malformed event payload: {err}")))?;

    let Some(pull_request) = payload.pull_request else {
        return Ok(None);
    };

    let (owner, repo) = repository
        .split_once('/')
        .ok_or_else(|| AppError::Event(format!("malformed repository value: {repository:?}")))?;

    Ok(Some(PullRequestSnapshot {
        number: pull_request.number,
        title: pull_request.title.unwrap_or_default(),
        body: pull_request.body.unwrap_or_default(),
        owner: owner.to_string(),
        repo: repo.to_string(),
        head_ref: pull_request.head.branch,
    }))
}
