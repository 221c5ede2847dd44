use colored::*;

use crate::error::{AutolinkError, AutolinkResult};
use crate::render::print_tooltip;

use super::{build_nodes, load_items};

pub fn run(file: &str, repo: &str, item_id: &str, allow_trusted: bool) -> AutolinkResult<()> {
    let nodes = build_nodes(repo, load_items(file)?);

    let node = nodes
        .iter()
        .find(|node| node.item().id() == item_id)
        .ok_or_else(|| AutolinkError::ItemNotFound(item_id.to_string()))?;

    let record = node.tree_item();
    print_tooltip(&record, allow_trusted);
    println!();
    println!("{}: {}", "Id".dimmed(), record.id);
    println!("{}: {}", "Context".dimmed(), record.context_value.as_str());

    Ok(())
}
