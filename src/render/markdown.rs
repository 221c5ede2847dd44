use colored::*;
use regex::Regex;

use crate::presentation::MarkdownString;
use crate::render::theme::helpers::icon_glyph;

/// Renders tooltip markup to ANSI text for the terminal.
///
/// `allow_trusted` is the renderer-side switch: when false, even markup the
/// presenter marked trusted is treated as plain and any embedded HTML is
/// stripped. Untrusted markup always has its HTML stripped.
pub fn render_tooltip(tooltip: &MarkdownString, allow_trusted: bool) -> String {
    let mut text = tooltip.value.clone();

    if !(tooltip.is_trusted && tooltip.support_html && allow_trusted) {
        text = strip_html(&text);
    }

    text = replace_icon_tokens(&text);
    text = render_links(&text);
    text = render_bold(&text);

    // Markdown hard breaks and escapes
    text = text.replace(" \\\n", "\n");
    text.replace("\\#", "#")
}

/// Replaces `$(id)` icon tokens with terminal glyphs.
fn replace_icon_tokens(text: &str) -> String {
    let token_regex = Regex::new(r"\$\(([a-z-]+)\)").unwrap();
    let mut result = text.to_string();

    for cap in token_regex.captures_iter(text) {
        result = result.replace(&cap[0], icon_glyph(&cap[1]));
    }

    result
}

fn render_links(text: &str) -> String {
    // Optional quoted hover title after the href
    let link_regex = Regex::new(r#"\[([^\]]+)\]\(([^)\s]+)(?:\s+"([^"]*)")?\)"#).unwrap();
    let mut result = text.to_string();

    for cap in link_regex.captures_iter(text) {
        let link_text = &cap[1];
        let link_url = &cap[2];
        let formatted = if link_text == link_url {
            format!("{}", link_url.blue().underline())
        } else {
            format!("{} ({})", link_text.blue().underline(), link_url.dimmed())
        };
        result = result.replace(&cap[0], &formatted);
    }

    result
}

fn render_bold(text: &str) -> String {
    let bold_regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    let mut result = text.to_string();

    for cap in bold_regex.captures_iter(text) {
        let formatted = cap[1].bold().to_string();
        result = result.replace(&cap[0], &formatted);
    }

    result
}

fn strip_html(text: &str) -> String {
    let tag_regex = Regex::new(r"</?[a-zA-Z][^>]*>").unwrap();
    tag_regex.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_html_removes_tags() {
        assert_eq!(strip_html("a <span style=\"x\">b</span> c"), "a b c");
        assert_eq!(strip_html("no tags"), "no tags");
    }

    #[test]
    fn test_untrusted_tooltip_is_stripped() {
        let md = MarkdownString::plain("hi <b>there</b>");
        assert_eq!(render_tooltip(&md, true), "hi there");
    }

    #[test]
    fn test_trusted_tooltip_keeps_html_when_allowed() {
        let md = MarkdownString::trusted("hi <b>there</b>");
        assert!(render_tooltip(&md, true).contains("<b>there</b>"));
        assert_eq!(render_tooltip(&md, false), "hi there");
    }

    #[test]
    fn test_hard_break_and_escape() {
        let md = MarkdownString::plain("one \\\ntwo \\#3");
        assert_eq!(render_tooltip(&md, true), "one\ntwo #3");
    }
}
