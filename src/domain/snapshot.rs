/// Immutable view of the pull request that triggered this run.
///
/// Built once from the event payload and the repository coordinates;
/// the reconciliation core never mutates it.
#[derive(Debug, Clone)]
pub struct PullRequestSnapshot {
    pub number: u64,
    pub title: String,
    pub body: String,
    pub owner: String,
    pub repo: String,
    pub head_ref: String,
}
