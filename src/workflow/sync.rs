use tracing::{debug, error, info};

use crate::context::AppContext;
use crate::domain::link::{LinkBlock, existing_link_pattern};
use crate::domain::reconcile::reconcile;
use crate::domain::snapshot::PullRequestSnapshot;
use crate::domain::ticket::TicketExtractor;
use crate::error::AppResult;

const HTTP_STATUS_SUCCESS: u16 = 200;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Description already carries the right link state; nothing submitted.
    Unchanged,
    Updated,
    UpdateFailed(u16),
}

/// One full evaluation for one pull-request event: derive the ticket link
/// from the title, reconcile the description, submit the update only when
/// the body actually changed.
pub async fn run(ctx: &AppContext, snapshot: &PullRequestSnapshot) -> AppResult<SyncOutcome> {
    let extractor = TicketExtractor::new(&ctx.config.ticket_pattern)?;

    let link = if extractor.detect(&snapshot.title) {
        extractor
            .extract_identifier(&snapshot.title)
            .map(|ticket| LinkBlock::build(&ctx.config.jira_account, &ticket))
    } else {
        None
    };
    debug!(
        pull_number = snapshot.number,
        link_found = link.is_some(),
        "evaluated title"
    );

    let existing = existing_link_pattern(&ctx.config.jira_account)?;
    let reconciled = reconcile(&snapshot.body, link.as_ref(), &existing);

    if !reconciled.changed {
        debug!(pull_number = snapshot.number, "description already up to date");
        return Ok(SyncOutcome::Unchanged);
    }

    let status = ctx
        .pull_requests
        .update_description(snapshot, &reconciled.body)
        .await?;

    if status == HTTP_STATUS_SUCCESS {
        info!(pull_number = snapshot.number, "description updated");
        Ok(SyncOutcome::Updated)
    } else {
        error!("Updating the pull request has failed with {status}");
        Ok(SyncOutcome::UpdateFailed(status))
    }
}
