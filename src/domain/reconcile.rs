use regex::Regex;

use crate::domain::link::LinkBlock;

/// Output of one reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledBody {
    pub body: String,
    pub changed: bool,
}

/// Ensure the description contains at most one up-to-date link block.
///
/// The decision table runs exactly once per invocation; only the first
/// match of `existing` is considered since at most one block is expected
/// to exist. A stale block is never deleted, only replaced.
pub fn reconcile(body: &str, link: Option<&LinkBlock>, existing: &Regex) -> ReconciledBody {
    match (existing.find(body), link) {
        (Some(found), Some(link)) => {
            let changed = found.as_str() != link.as_str();
            let mut updated = String::with_capacity(body.len() + link.as_str().len());
            updated.push_str(&body[..found.start()]);
            updated.push_str(link.as_str());
            updated.push_str(&body[found.end()..]);
            ReconciledBody {
                body: updated,
                changed,
            }
        }
        (None, Some(link)) => {
            let updated = if body.is_empty() {
                link.as_str().to_string()
            } else {
                format!("{body}\n\n{}", link.as_str())
            };
            ReconciledBody {
                body: updated,
                changed: true,
            }
        }
        (_, None) => ReconciledBody {
            body: body.to_string(),
            changed: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::link::existing_link_pattern;
    use crate::domain::ticket::TicketExtractor;

    fn link(key: &str) -> LinkBlock {
        let ticket = TicketExtractor::new(r"[A-Z]+-\d+")
            .unwrap()
            .extract_identifier(key)
            .unwrap();
        LinkBlock::build("acct", &ticket)
    }

    fn pattern() -> Regex {
        existing_link_pattern("acct").unwrap()
    }

    #[test]
    fn appends_to_empty_body_without_leading_blank_line() {
        let result = reconcile("", Some(&link("ABC-1234")), &pattern());
        assert!(result.changed);
        assert_eq!(
            result.body,
            "**[Jira ticket](https://acct.atlassian.net/browse/ABC-1234)**"
        );
    }

    #[test]
    fn appends_after_blank_line_when_body_has_content() {
        let result = reconcile("More details", Some(&link("ABC-1234")), &pattern());
        assert!(result.changed);
        assert_eq!(
            result.body,
            "More details\n\n**[Jira ticket](https://acct.atlassian.net/browse/ABC-1234)**"
        );
    }

    #[test]
    fn replaces_stale_link_and_preserves_surrounding_text() {
        let body = "body\n\n**[Jira ticket](https://acct.atlassian.net/browse/DELTA-123)**\n\ntrailer";
        let result = reconcile(body, Some(&link("ABC-1234")), &pattern());
        assert!(result.changed);
        assert_eq!(
            result.body,
            "body\n\n**[Jira ticket](https://acct.atlassian.net/browse/ABC-1234)**\n\ntrailer"
        );
    }

    #[test]
    fn same_link_is_a_no_op() {
        let body = "**[Jira ticket](https://acct.atlassian.net/browse/ABC-1234)**\n\nMore details";
        let result = reconcile(body, Some(&link("ABC-1234")), &pattern());
        assert!(!result.changed);
        assert_eq!(result.body, body);
    }

    #[test]
    fn keeps_stale_link_when_title_lost_its_ticket() {
        let body = "body\n\n**[Jira ticket](https://acct.atlassian.net/browse/DELTA-123)**";
        let result = reconcile(body, None, &pattern());
        assert!(!result.changed);
        assert_eq!(result.body, body);
    }

    #[test]
    fn no_link_and_no_match_leaves_body_alone() {
        let result = reconcile("just a description", None, &pattern());
        assert!(!result.changed);
        assert_eq!(result.body, "just a description");
    }

    #[test]
    fn reconciliation_is_idempotent() {
        let bodies = ["", "More details", "body\n\n**[Jira ticket](https://acct.atlassian.net/browse/DELTA-123)**"];
        for body in bodies {
            let once = reconcile(body, Some(&link("ABC-1234")), &pattern());
            let twice = reconcile(&once.body, Some(&link("ABC-1234")), &pattern());
            assert!(!twice.changed, "second pass changed body {body:?}");
            assert_eq!(twice.body, once.body);
        }
    }

    #[test]
    fn only_first_existing_block_is_replaced() {
        let body = "**[Jira ticket](https://acct.atlassian.net/browse/DELTA-1)**\n\n\
                    **[Jira ticket](https://acct.atlassian.net/browse/DELTA-2)**";
        let result = reconcile(body, Some(&link("ABC-1234")), &pattern());
        assert!(result.changed);
        assert_eq!(
            result.body,
            "**[Jira ticket](https://acct.atlassian.net/browse/ABC-1234)**\n\n\
             **[Jira ticket](https://acct.atlassian.net/browse/DELTA-2)**"
        );
    }
}
