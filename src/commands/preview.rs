use crate::error::AutolinkResult;
use crate::logging::log_info;
use crate::presentation::TreeItem;
use crate::render::print_items;

use super::{build_nodes, load_items};

pub fn run(file: &str, repo: &str, format: &str) -> AutolinkResult<()> {
    let items = load_items(file)?;
    log_info(&format!(
        "Previewing {} autolinked item(s) from {} for repo {}",
        items.len(),
        file,
        repo
    ));

    let nodes = build_nodes(repo, items);
    let records: Vec<TreeItem> = nodes.iter().map(|node| node.tree_item()).collect();
    print_items(&records, format);

    Ok(())
}
