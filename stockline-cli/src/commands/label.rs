//! Label command - generate label data for products

use anyhow::Result;
use colored::Colorize;

use super::{get_context, resolve_owner};
use crate::output;

pub async fn run(id: Option<String>, json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let owner = resolve_owner(&ctx, user).await?;

    match id {
        Some(id) => {
            let stub = ctx.label.build(&owner, &id).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stub)?);
            } else {
                println!("{}", stub.product_name.bold());
                println!("  Code: {}", stub.code);
                println!("  Payload: {}", stub.payload);
            }
        }
        None => {
            let stubs = ctx.label.build_all(&owner).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&stubs)?);
                return Ok(());
            }

            if stubs.is_empty() {
                println!("{}", "No products yet".dimmed());
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Product", "Code"]);
            for stub in &stubs {
                table.add_row(vec![&stub.product_id, &stub.product_name, &stub.code]);
            }
            println!("{}", table);
        }
    }
    Ok(())
}
