use crate::constants::{ICON_ISSUES, ICON_ISSUE_CLOSED, ICON_LINK, ICON_PULL_REQUEST};
use crate::models::{AutolinkType, IssueOrPullRequest, IssueOrPullRequestType};

use super::tree_item::ThemeIcon;

/// Icon for an unresolved autolink, keyed by whatever type the pattern
/// itself declares.
pub fn autolink_icon(link_type: Option<AutolinkType>) -> ThemeIcon {
    match link_type {
        None => ThemeIcon::new(ICON_LINK),
        Some(AutolinkType::PullRequest) => ThemeIcon::new(ICON_PULL_REQUEST),
        Some(AutolinkType::Issue) => ThemeIcon::new(ICON_ISSUES),
    }
}

/// Icon for a resolved item, keyed by type and open/closed state.
pub fn theme_icon(item: &IssueOrPullRequest) -> ThemeIcon {
    match (item.item_type, item.closed) {
        (IssueOrPullRequestType::PullRequest, true) => {
            ThemeIcon::colored(ICON_PULL_REQUEST, "pullRequests.closed")
        }
        (IssueOrPullRequestType::PullRequest, false) => {
            ThemeIcon::colored(ICON_PULL_REQUEST, "pullRequests.open")
        }
        (IssueOrPullRequestType::Issue, true) => {
            ThemeIcon::colored(ICON_ISSUE_CLOSED, "issues.closed")
        }
        (IssueOrPullRequestType::Issue, false) => ThemeIcon::colored(ICON_ISSUES, "issues.open"),
    }
}

/// Inline icon token for tooltip markup, in `$(id)` form.
pub fn markdown_icon(item: &IssueOrPullRequest) -> String {
    format!("$({})", theme_icon(item).id)
}
