pub mod icons;
pub mod markdown;
pub mod node;
pub mod time;
pub mod tree_item;

pub use icons::{autolink_icon, markdown_icon, theme_icon};
pub use markdown::{MarkdownString, HARD_BREAK};
pub use node::AutolinkedItemNode;
pub use time::from_now;
pub use tree_item::{CollapsibleState, ContextValue, ThemeIcon, TreeItem};
