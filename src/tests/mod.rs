mod config_tests;
mod error_tests;
mod model_tests;
mod theme_tests;

use crate::models::{
    Autolink, AutolinkType, IssueOrPullRequest, IssueOrPullRequestType, ProviderRef,
};

pub fn autolink(id: &str, link_type: Option<AutolinkType>) -> Autolink {
    Autolink {
        id: id.to_string(),
        prefix: "#".to_string(),
        url: format!("https://x/{}", id),
        title: None,
        description: None,
        link_type,
        provider: None,
    }
}

pub fn pull_request(id: &str, title: &str, closed: bool) -> IssueOrPullRequest {
    IssueOrPullRequest {
        id: id.to_string(),
        title: title.to_string(),
        url: format!("https://x/{}", id),
        item_type: IssueOrPullRequestType::PullRequest,
        closed,
        date: "2020-01-01T00:00:00Z".to_string(),
        closed_date: if closed {
            Some("2021-06-01T00:00:00Z".to_string())
        } else {
            None
        },
        provider: ProviderRef {
            name: "GitHub".to_string(),
        },
    }
}
