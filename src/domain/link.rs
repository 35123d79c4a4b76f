use regex::Regex;

use crate::domain::ticket::TicketIdentifier;
use crate::error::{AppError, AppResult};

/// Fixed label of the canonical link; uniqueness in a body is keyed on it.
pub const JIRA_LINK_TEXT: &str = "Jira ticket";

/// Canonical markdown snippet embedding a ticket key as a clickable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkBlock(String);

impl LinkBlock {
    pub fn build(account: &str, ticket: &TicketIdentifier) -> Self {
        Self(format!(
            "**[{JIRA_LINK_TEXT}](https://{account}.atlassian.net/browse/{})**",
            ticket.as_str()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Pattern matching any previously inserted link block for the given
/// account, whichever ticket it encodes.
pub fn existing_link_pattern(account: &str) -> AppResult<Regex> {
    let escaped = regex::escape(account);
    let pattern = format!(
        r"\*\*\[{JIRA_LINK_TEXT}\]\(https://{escaped}\.atlassian\.net/browse/[A-Z]+-\d+\)\*\*"
    );
    Regex::new(&pattern)
        .map_err(|err| AppError::Configuration(format!("invalid jira-account input: {err}")))
}
