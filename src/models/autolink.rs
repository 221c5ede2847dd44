use serde::{Deserialize, Serialize};

/// What kind of tracker item an autolink pattern claims to point at, when the
/// pattern itself carries that information (e.g. a PR-only link format).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum AutolinkType {
    #[serde(rename = "issue")]
    Issue,
    #[serde(rename = "pullrequest")]
    PullRequest,
}

/// A reference to an external provider (GitHub, Jira, ...) by display name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProviderRef {
    pub name: String,
}

/// A textual pattern match (e.g. `JIRA-123`) detected in a commit message but
/// not resolved against any tracker. Produced by the autolink detector
/// upstream; immutable once constructed.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Autolink {
    pub id: String,
    pub prefix: String,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub link_type: Option<AutolinkType>,
    pub provider: Option<ProviderRef>,
}
