/// Markdown hard line break, as understood by the host's markdown renderer.
pub const HARD_BREAK: &str = " \\\n";

/// Rich hover markup plus the flags telling the host how far it may go when
/// rendering it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownString {
    pub value: String,
    pub is_trusted: bool,
    pub support_html: bool,
}

impl MarkdownString {
    /// Plain markup: commands and raw HTML are not honored by the host.
    pub fn plain(value: impl Into<String>) -> Self {
        MarkdownString {
            value: value.into(),
            is_trusted: false,
            support_html: false,
        }
    }

    /// Trusted markup: the host may render embedded HTML and command links
    /// without further sanitization.
    ///
    /// This is the only place in the crate where trust is granted. Callers
    /// must only pass content assembled from provider-resolved items, never
    /// from raw commit text.
    pub fn trusted(value: impl Into<String>) -> Self {
        MarkdownString {
            value: value.into(),
            is_trusted: true,
            support_html: true,
        }
    }
}
