use super::markdown::MarkdownString;

/// Whether a tree row can be expanded. Autolinked items are always leaves,
/// but the record type covers the general tree contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollapsibleState {
    None,
    Collapsed,
    Expanded,
}

/// A theme icon reference: an icon id the host resolves against its icon
/// font, with an optional theme color id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeIcon {
    pub id: &'static str,
    pub color: Option<&'static str>,
}

impl ThemeIcon {
    pub fn new(id: &'static str) -> Self {
        ThemeIcon { id, color: None }
    }

    pub fn colored(id: &'static str, color: &'static str) -> Self {
        ThemeIcon {
            id,
            color: Some(color),
        }
    }
}

/// Context tag the host uses to decide which actions apply to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextValue {
    AutolinkedItem,
    AutolinkedIssue,
    PullRequest,
}

impl ContextValue {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContextValue::AutolinkedItem => "autolinks:item",
            ContextValue::AutolinkedIssue => "autolinks:issue",
            ContextValue::PullRequest => "autolinks:pullrequest",
        }
    }
}

/// One renderable row of the tree: an immutable record the adapter layer maps
/// onto whatever UI is in use. The presenter returns it fully populated and
/// never touches it again.
#[derive(Debug, Clone)]
pub struct TreeItem {
    pub id: String,
    pub label: String,
    pub description: Option<String>,
    pub icon: ThemeIcon,
    pub context_value: ContextValue,
    pub tooltip: MarkdownString,
    pub collapsible_state: CollapsibleState,
    /// Repository the item was detected in, when known.
    pub resource_path: Option<String>,
}
