pub mod copy;
pub mod inspect;
pub mod preview;

use std::fs;

use crate::error::AutolinkResult;
use crate::models::AutolinkedItem;
use crate::presentation::AutolinkedItemNode;

/// Reads a JSON array of autolinked items, as produced by the upstream
/// detector/resolver.
pub fn load_items(path: &str) -> AutolinkResult<Vec<AutolinkedItem>> {
    let data = fs::read_to_string(path)?;
    let items = serde_json::from_str(&data)?;
    Ok(items)
}

/// Identifier of the tree node the items hang under.
pub fn root_id(repo_path: &str) -> String {
    format!("autolinks({})", repo_path)
}

pub fn build_nodes(repo_path: &str, items: Vec<AutolinkedItem>) -> Vec<AutolinkedItemNode> {
    let parent = root_id(repo_path);
    items
        .into_iter()
        .map(|item| AutolinkedItemNode::new(repo_path, parent.as_str(), item))
        .collect()
}
