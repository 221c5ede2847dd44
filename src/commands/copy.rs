use crate::error::{AutolinkError, AutolinkResult};

use super::{build_nodes, load_items};

/// Prints the clipboard text for one item: its URL, whichever variant it is.
/// Stdout stands in for the host clipboard action.
pub fn run(file: &str, repo: &str, item_id: &str) -> AutolinkResult<()> {
    let nodes = build_nodes(repo, load_items(file)?);

    let node = nodes
        .iter()
        .find(|node| node.item().id() == item_id)
        .ok_or_else(|| AutolinkError::ItemNotFound(item_id.to_string()))?;

    println!("{}", node.to_clipboard());

    Ok(())
}
