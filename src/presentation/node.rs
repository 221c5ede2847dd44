use crate::constants::CUSTOM_PROVIDER_LABEL;
use crate::models::{Autolink, AutolinkType, AutolinkedItem, IssueOrPullRequest, IssueOrPullRequestType};

use super::icons::{autolink_icon, markdown_icon, theme_icon};
use super::markdown::{MarkdownString, HARD_BREAK};
use super::time::from_now;
use super::tree_item::{CollapsibleState, ContextValue, TreeItem};

/// A single autolinked reference shown under a commit or comparison node.
/// Always a leaf; presenting it is a pure function of the item.
pub struct AutolinkedItemNode {
    repo_path: String,
    parent_id: String,
    item: AutolinkedItem,
}

impl AutolinkedItemNode {
    pub fn new(
        repo_path: impl Into<String>,
        parent_id: impl Into<String>,
        item: AutolinkedItem,
    ) -> Self {
        AutolinkedItemNode {
            repo_path: repo_path.into(),
            parent_id: parent_id.into(),
            item,
        }
    }

    /// Composite identifier, unique within the parent: `<parentId>:item(<id>)`.
    pub fn id(&self) -> String {
        format!("{}:item({})", self.parent_id, self.item.id())
    }

    pub fn item(&self) -> &AutolinkedItem {
        &self.item
    }

    pub fn repo_path(&self) -> &str {
        &self.repo_path
    }

    /// What a copy action should put on the clipboard: the item URL, for both
    /// variants.
    pub fn to_clipboard(&self) -> &str {
        self.item.url()
    }

    pub fn children(&self) -> Vec<AutolinkedItemNode> {
        Vec::new()
    }

    pub fn tree_item(&self) -> TreeItem {
        match &self.item {
            AutolinkedItem::Autolink(link) => self.autolink_item(link),
            AutolinkedItem::Resolved(item) => self.resolved_item(item),
        }
    }

    fn autolink_item(&self, link: &Autolink) -> TreeItem {
        let description = link
            .provider
            .as_ref()
            .map(|p| p.name.clone())
            .unwrap_or_else(|| CUSTOM_PROVIDER_LABEL.to_string());

        let heading = match (&link.description, link.link_type) {
            (Some(description), _) => format!("Autolinked {}", description),
            (None, None) => format!("Autolinked {}{}", link.prefix, link.id),
            (None, Some(AutolinkType::PullRequest)) => {
                format!("Autolinked Pull Request {}{}", link.prefix, link.id)
            }
            (None, Some(AutolinkType::Issue)) => {
                format!("Autolinked Issue {}{}", link.prefix, link.id)
            }
        };
        let link_title = match &link.title {
            Some(title) => format!(" \"{}\"", title),
            None => String::new(),
        };
        let tooltip = MarkdownString::plain(format!(
            "{}{}[{}]({}{})",
            heading, HARD_BREAK, link.url, link.url, link_title
        ));

        TreeItem {
            id: self.id(),
            label: format!("{}{}", link.prefix, link.id),
            description: Some(description),
            icon: autolink_icon(link.link_type),
            context_value: ContextValue::AutolinkedItem,
            tooltip,
            collapsible_state: CollapsibleState::None,
            resource_path: Some(self.repo_path.clone()),
        }
    }

    fn resolved_item(&self, item: &IssueOrPullRequest) -> TreeItem {
        let relative_time = from_now(item.relevant_date());

        let (type_label, context_value) = match item.item_type {
            IssueOrPullRequestType::PullRequest => ("Pull Request", ContextValue::PullRequest),
            IssueOrPullRequestType::Issue => ("Issue", ContextValue::AutolinkedIssue),
        };

        // Hover title shared by both links in the tooltip. `#` is escaped so
        // the markdown renderer does not treat it as a heading marker.
        let link_title = format!(
            " \"Open {} \\#{} on {}\"",
            type_label, item.id, item.provider.name
        );
        let tooltip = MarkdownString::trusted(format!(
            "{} [**{}**]({}{}){}[#{}]({}{}) was {} {}",
            markdown_icon(item),
            item.title.trim(),
            item.url,
            link_title,
            HARD_BREAK,
            item.id,
            item.url,
            link_title,
            if item.closed { "closed" } else { "opened" },
            relative_time,
        ));

        TreeItem {
            id: self.id(),
            label: format!("{}: {}", item.id, item.title),
            description: Some(relative_time),
            icon: theme_icon(item),
            context_value,
            tooltip,
            collapsible_state: CollapsibleState::None,
            resource_path: Some(self.repo_path.clone()),
        }
    }
}
