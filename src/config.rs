use std::env;

pub const INPUT_GITHUB_TOKEN: &str = "github-token";
pub const INPUT_JIRA_ACCOUNT: &str = "jira-account";
pub const INPUT_TICKET_REGEX: &str = "ticket-regex";

/// Validated action configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub github_token: String,
    pub jira_account: String,
    pub ticket_pattern: String,
}

/// Action inputs as delivered by the runner, before validation.
///
/// The runner exposes input `x` as env var `INPUT_X` (uppercased, dashes
/// preserved); an absent variable and an empty one are equivalent.
#[derive(Debug, Clone, Default)]
pub struct RawInputs {
    pub github_token: String,
    pub jira_account: String,
    pub ticket_pattern: String,
}

impl RawInputs {
    pub fn from_env() -> Self {
        Self {
            github_token: read_input(INPUT_GITHUB_TOKEN),
            jira_account: read_input(INPUT_JIRA_ACCOUNT),
            ticket_pattern: read_input(INPUT_TICKET_REGEX),
        }
    }

    /// Names of required inputs that are empty, in declaration order. The
    /// token is not required here; an empty token surfaces later as an API
    /// failure.
    pub fn missing(&self) -> Vec<&'static str> {
        let required = [
            (INPUT_JIRA_ACCOUNT, &self.jira_account),
            (INPUT_TICKET_REGEX, &self.ticket_pattern),
        ];
        required
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn into_config(self) -> AppConfig {
        AppConfig {
            github_token: self.github_token,
            jira_account: self.jira_account,
            ticket_pattern: self.ticket_pattern,
        }
    }
}

pub fn missing_inputs_message(names: &[&str]) -> String {
    let plural = if names.len() > 1 { "s" } else { "" };
    format!("Missing required input{plural}: {}", names.join(", "))
}

fn read_input(name: &str) -> String {
    let key = format!("INPUT_{}", name.to_uppercase());
    env::var(key).unwrap_or_default()
}
