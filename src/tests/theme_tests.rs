use crate::presentation::ContextValue;
use crate::render::theme::helpers::{context_color, icon_glyph};
use crate::render::theme::{theme_color, ColorTheme, SemanticColor, ThemedColorize};
use colored::Color;

#[test]
fn test_default_theme() {
    let theme = ColorTheme::new();

    assert_eq!(theme.get(SemanticColor::PullRequest), Color::Magenta);
    assert_eq!(theme.get(SemanticColor::IssueOpen), Color::Green);
    assert_eq!(theme.get(SemanticColor::IssueClosed), Color::Red);
    assert_eq!(theme.get(SemanticColor::Link), Color::Blue);
}

#[test]
fn test_context_color_helper() {
    assert_eq!(
        context_color(ContextValue::AutolinkedItem),
        SemanticColor::AutolinkedItem
    );
    assert_eq!(
        context_color(ContextValue::PullRequest),
        SemanticColor::PullRequest
    );
    assert_eq!(
        context_color(ContextValue::AutolinkedIssue),
        SemanticColor::IssueOpen
    );
}

#[test]
fn test_icon_glyph_helper() {
    assert_eq!(icon_glyph("link"), "∞");
    assert_eq!(icon_glyph("git-pull-request"), "⇄");
    assert_eq!(icon_glyph("issues"), "○");
    assert_eq!(icon_glyph("pass"), "✓");
    assert_eq!(icon_glyph("something-else"), "•");
}

#[test]
fn test_themed_colorize() {
    let text = "PR row";
    let colored = text.with_theme(SemanticColor::PullRequest);

    assert!(format!("{}", colored).contains("PR row"));
}

#[test]
fn test_theme_color_function() {
    assert_eq!(theme_color(SemanticColor::Error), Color::Red);
}
