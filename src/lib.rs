// Module declarations
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod presentation;
pub mod render;

// Re-export commonly used items
pub use config::{load_config, save_config, Config};
pub use error::{AutolinkError, AutolinkResult};
pub use models::*;
pub use presentation::{AutolinkedItemNode, MarkdownString, TreeItem};

#[cfg(test)]
mod tests;
