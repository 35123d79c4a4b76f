use async_trait::async_trait;
use reqwest::{
    Client,
    header::{ACCEPT, USER_AGENT},
};
use serde::Serialize;

use crate::domain::snapshot::PullRequestSnapshot;
use crate::error::{AppError, AppResult};
use crate::services::PullRequestService;

const API_BASE_URL: &str = "https://api.github.com";

pub struct GitHubClient {
    http: Client,
    token: String,
}

impl GitHubClient {
    pub fn new(token: String) -> Self {
        Self {
            http: Client::new(),
            token,
        }
    }

    fn pull_endpoint(&self, snapshot: &PullRequestSnapshot) -> String {
        format!(
            "{API_BASE_URL}/repos/{}/{}/pulls/{}",
            snapshot.owner, snapshot.repo, snapshot.number
        )
    }
}

#[async_trait]
impl PullRequestService for GitHubClient {
    async fn update_description(
        &self,
        snapshot: &PullRequestSnapshot,
        body: &str,
    ) -> AppResult<u16> {
        let request_body = UpdatePullRequest { body };

        let response = self
            .http
            .patch(self.pull_endpoint(snapshot))
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, "pr-jira-link")
            .json(&request_body)
            .send()
            .await
            .map_err(|err| AppError::PullRequestApi(format!("failed to call GitHub: {err}")))?;

        Ok(response.status().as_u16())
    }
}

#[derive(Serialize)]
struct UpdatePullRequest<'a> {
    body: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_pull_endpoint_from_snapshot() {
        let client = GitHubClient::new("abc123".to_string());
        let snapshot = PullRequestSnapshot {
            number: 123,
            title: String::new(),
            body: String::new(),
            owner: "Someone".to_string(),
            repo: "repo".to_string(),
            head_ref: "a".to_string(),
        };
        assert_eq!(
            client.pull_endpoint(&snapshot),
            "https://api.github.com/repos/Someone/repo/pulls/123"
        );
    }

    #[test]
    fn update_request_serializes_only_the_body_field() {
        let request = UpdatePullRequest { body: "new body" };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"body":"new body"}"#
        );
    }
}
