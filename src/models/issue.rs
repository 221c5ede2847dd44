use serde::{Deserialize, Serialize};

use super::ProviderRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum IssueOrPullRequestType {
    #[serde(rename = "issue")]
    Issue,
    #[serde(rename = "pullrequest")]
    PullRequest,
}

/// A work item resolved against an external tracker, with known open/closed
/// state and timestamps. Timestamps are RFC 3339 strings as delivered by the
/// resolution service.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueOrPullRequest {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(rename = "type")]
    pub item_type: IssueOrPullRequestType,
    pub closed: bool,
    pub date: String,
    pub closed_date: Option<String>,
    pub provider: ProviderRef,
}

impl IssueOrPullRequest {
    /// The timestamp the item should be presented under: when it was closed
    /// if it has been, otherwise when it was opened.
    pub fn relevant_date(&self) -> &str {
        self.closed_date.as_deref().unwrap_or(&self.date)
    }
}
