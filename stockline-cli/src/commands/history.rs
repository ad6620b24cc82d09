//! History command - show the transaction ledger

use anyhow::Result;
use colored::Colorize;

use stockline_core::services::EntryKind;

use super::{get_context, resolve_owner};
use crate::output;

pub async fn run(limit: Option<usize>, json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let owner = resolve_owner(&ctx, user).await?;

    let mut entries = ctx.history.history(&owner).await?;
    if let Some(limit) = limit {
        entries.truncate(limit);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No history yet".dimmed());
        return Ok(());
    }

    let mut table = output::create_table();
    table.set_header(vec!["Time", "Type", "Description"]);
    for entry in &entries {
        table.add_row(vec![
            entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            colorize_type(&entry.event_type, entry.kind),
            entry.description.clone(),
        ]);
    }
    println!("{}", table);
    Ok(())
}

fn colorize_type(event_type: &str, kind: EntryKind) -> String {
    match kind {
        EntryKind::Added => event_type.green().to_string(),
        EntryKind::Removed => event_type.red().to_string(),
        EntryKind::Edited => event_type.yellow().to_string(),
        _ => event_type.dimmed().to_string(),
    }
}
