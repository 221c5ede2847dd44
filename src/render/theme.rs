use colored::{Color, Colorize};
use lazy_static::lazy_static;
use std::collections::HashMap;
use std::sync::RwLock;

use crate::constants::{ICON_ISSUES, ICON_ISSUE_CLOSED, ICON_LINK, ICON_PULL_REQUEST};
use crate::presentation::ContextValue;

/// Semantic color definitions for consistent theming
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SemanticColor {
    // Item categories
    AutolinkedItem,
    PullRequest,
    IssueOpen,
    IssueClosed,

    // UI colors
    Header,
    Border,
    Error,

    // Text colors
    Primary,
    Muted,
    Link,
    Provider,
}

/// Theme configuration for the renderer
#[derive(Debug, Clone)]
pub struct ColorTheme {
    colors: HashMap<SemanticColor, Color>,
}

impl ColorTheme {
    pub fn new() -> Self {
        let mut colors = HashMap::new();

        colors.insert(SemanticColor::AutolinkedItem, Color::Blue);
        colors.insert(SemanticColor::PullRequest, Color::Magenta);
        colors.insert(SemanticColor::IssueOpen, Color::Green);
        colors.insert(SemanticColor::IssueClosed, Color::Red);

        colors.insert(SemanticColor::Header, Color::TrueColor { r: 21, g: 76, b: 121 });
        colors.insert(SemanticColor::Border, Color::TrueColor { r: 120, g: 120, b: 120 });
        colors.insert(SemanticColor::Error, Color::Red);

        colors.insert(SemanticColor::Primary, Color::White);
        colors.insert(SemanticColor::Muted, Color::TrueColor { r: 90, g: 90, b: 90 });
        colors.insert(SemanticColor::Link, Color::Blue);
        colors.insert(SemanticColor::Provider, Color::Cyan);

        Self { colors }
    }

    /// Get a color for a semantic meaning
    pub fn get(&self, semantic: SemanticColor) -> Color {
        self.colors.get(&semantic).copied().unwrap_or(Color::White)
    }

    /// Set a color for a semantic meaning
    pub fn set(&mut self, semantic: SemanticColor, color: Color) {
        self.colors.insert(semantic, color);
    }
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self::new()
    }
}

lazy_static! {
    /// Global theme instance
    static ref THEME: RwLock<ColorTheme> = RwLock::new(ColorTheme::new());
}

pub fn current_theme() -> ColorTheme {
    THEME.read().unwrap().clone()
}

pub fn set_theme(theme: ColorTheme) {
    *THEME.write().unwrap() = theme;
}

pub fn theme_color(semantic: SemanticColor) -> Color {
    THEME.read().unwrap().get(semantic)
}

/// Extension trait for colorizing strings with semantic colors
pub trait ThemedColorize {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString;
}

impl ThemedColorize for &str {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

impl ThemedColorize for String {
    fn with_theme(&self, semantic: SemanticColor) -> colored::ColoredString {
        self.color(theme_color(semantic))
    }
}

/// Helper functions for common color applications
pub mod helpers {
    use super::*;

    /// Row color by the item's context tag.
    pub fn context_color(context: ContextValue) -> SemanticColor {
        match context {
            ContextValue::AutolinkedItem => SemanticColor::AutolinkedItem,
            ContextValue::PullRequest => SemanticColor::PullRequest,
            ContextValue::AutolinkedIssue => SemanticColor::IssueOpen,
        }
    }

    /// Terminal glyph standing in for a theme icon id.
    pub fn icon_glyph(icon_id: &str) -> &'static str {
        match icon_id {
            ICON_LINK => "∞",
            ICON_PULL_REQUEST => "⇄",
            ICON_ISSUES => "○",
            ICON_ISSUE_CLOSED => "✓",
            _ => "•",
        }
    }
}
