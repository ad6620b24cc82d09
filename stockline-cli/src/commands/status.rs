//! Status command - show stock totals

use anyhow::Result;
use colored::Colorize;

use stockline_core::domain::currency::format_amount;

use super::{get_context, resolve_owner};
use crate::output;

pub async fn run(json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let owner = resolve_owner(&ctx, user).await?;

    let summary = ctx.inventory.summary(&owner).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{}", "Stock Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Categories", &summary.category_count.to_string()]);
    table.add_row(vec!["Products", &summary.product_count.to_string()]);
    table.add_row(vec!["Total units", &summary.total_units.to_string()]);
    table.add_row(vec![
        "Stock value",
        &format_amount(summary.total_stock_value),
    ]);
    println!("{}", table);

    let records = ctx.ledger.count(&owner).await?;
    println!();
    println!("Transactions recorded: {}", records);
    Ok(())
}
