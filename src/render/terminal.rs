use colored::*;
use serde_json::json;

use crate::presentation::{CollapsibleState, TreeItem};
use crate::render::theme::helpers::{context_color, icon_glyph};
use crate::render::theme::ThemedColorize;

use super::markdown::render_tooltip;

/// Maps a display record to a JSON value in the shape a host tree renderer
/// consumes.
pub fn record_to_json(item: &TreeItem) -> serde_json::Value {
    let collapsible_state = match item.collapsible_state {
        CollapsibleState::None => "none",
        CollapsibleState::Collapsed => "collapsed",
        CollapsibleState::Expanded => "expanded",
    };

    json!({
        "id": item.id,
        "label": item.label,
        "description": item.description,
        "icon": { "id": item.icon.id, "color": item.icon.color },
        "contextValue": item.context_value.as_str(),
        "tooltip": {
            "value": item.tooltip.value,
            "isTrusted": item.tooltip.is_trusted,
            "supportHtml": item.tooltip.support_html,
        },
        "collapsibleState": collapsible_state,
        "resourcePath": item.resource_path,
    })
}

pub fn print_items(items: &[TreeItem], format: &str) {
    if items.is_empty() {
        println!("{}", "No autolinked items found.".dimmed());
        return;
    }

    match format {
        "json" => {
            let records: Vec<serde_json::Value> = items.iter().map(record_to_json).collect();
            println!("{}", serde_json::to_string_pretty(&records).unwrap());
        }
        "table" => {
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<24} {:<44} {:<14} {:<16}",
                "Label".bold(),
                "Description".bold(),
                "Icon".bold(),
                "Context".bold()
            );
            println!("{}", "─".repeat(100).dimmed());

            for item in items {
                println!(
                    "{:<24} {:<44} {:<14} {:<16}",
                    item.label.with_theme(context_color(item.context_value)),
                    item.description.as_deref().unwrap_or("").dimmed(),
                    item.icon.id,
                    item.context_value.as_str().dimmed()
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            for item in items {
                println!(
                    "{} {} {}",
                    icon_glyph(item.icon.id),
                    item.label.with_theme(context_color(item.context_value)),
                    item.description.as_deref().unwrap_or("").dimmed()
                );
            }
        }
    }
}

pub fn print_tooltip(item: &TreeItem, allow_trusted: bool) {
    println!("{}", item.label.bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}", render_tooltip(&item.tooltip, allow_trusted));
}
