use async_trait::async_trait;

use crate::domain::snapshot::PullRequestSnapshot;
use crate::error::AppResult;

#[async_trait]
pub trait PullRequestService: Send + Sync {
    /// Submit a new description for the pull request and return the HTTP
    /// status of the update call. Transport failures are errors; a
    /// non-success status is a value for the caller to judge.
    async fn update_description(
        &self,
        snapshot: &PullRequestSnapshot,
        body: &str,
    ) -> AppResult<u16>;
}
