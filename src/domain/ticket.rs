use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{AppError, AppResult};

lazy_static! {
    /// Fixed shape of a Jira ticket key, e.g. `ABC-1234`.
    static ref IDENTIFIER_SHAPE: Regex = Regex::new(r"[A-Z]+-\d+").unwrap();
}

/// Canonical short code naming an issue-tracker item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicketIdentifier(String);

impl TicketIdentifier {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Decides whether a title references a ticket and pulls out its key.
///
/// Two separate patterns on purpose: the user-configured detection pattern
/// only answers "is a ticket referenced at all" and may match non-ticket
/// markers such as `WIP`; the fixed shape pattern supplies the identifier.
pub struct TicketExtractor {
    detection: Regex,
}

impl TicketExtractor {
    pub fn new(pattern: &str) -> AppResult<Self> {
        let detection = Regex::new(pattern).map_err(|err| {
            AppError::Configuration(format!("invalid ticket-regex input: {err}"))
        })?;
        Ok(Self { detection })
    }

    /// Unanchored search with the detection pattern.
    pub fn detect(&self, title: &str) -> bool {
        self.detection.is_match(title)
    }

    /// First well-shaped ticket key anywhere in the title, if any.
    pub fn extract_identifier(&self, title: &str) -> Option<TicketIdentifier> {
        IDENTIFIER_SHAPE
            .find(title)
            .map(|m| TicketIdentifier(m.as_str().to_string()))
    }
}
