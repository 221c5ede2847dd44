pub mod autolink;
pub mod issue;

// Re-export commonly used types
pub use autolink::{Autolink, AutolinkType, ProviderRef};
pub use issue::{IssueOrPullRequest, IssueOrPullRequestType};

use serde::{Deserialize, Serialize};

/// An item that appears under an "autolinks" tree node: either a resolved
/// tracker item or a bare pattern match.
///
/// Deserialization tries the resolved variant first, so incoming JSON is
/// discriminated by the full resolved attribute set (`closed`, `title`,
/// `date`, `provider`) rather than by the presence of any single field. An
/// autolink that later gains a boolean field cannot satisfy that set, so it
/// cannot be misclassified.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum AutolinkedItem {
    Resolved(IssueOrPullRequest),
    Autolink(Autolink),
}

impl AutolinkedItem {
    pub fn id(&self) -> &str {
        match self {
            AutolinkedItem::Resolved(item) => &item.id,
            AutolinkedItem::Autolink(link) => &link.id,
        }
    }

    pub fn url(&self) -> &str {
        match self {
            AutolinkedItem::Resolved(item) => &item.url,
            AutolinkedItem::Autolink(link) => &link.url,
        }
    }
}
