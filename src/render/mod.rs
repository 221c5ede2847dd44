pub mod markdown;
pub mod terminal;
pub mod theme;

pub use markdown::render_tooltip;
pub use terminal::{print_items, print_tooltip, record_to_json};
pub use theme::{current_theme, set_theme, theme_color, ColorTheme, SemanticColor, ThemedColorize};
