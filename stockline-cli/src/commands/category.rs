//! Category command - manage product categories

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;

use super::{get_context, prompt_text, resolve_owner};
use crate::output;

#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Add a category
    Add {
        /// Category name
        name: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a category
    Rm {
        /// Category ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

pub async fn run(command: CategoryCommands, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let owner = resolve_owner(&ctx, user).await?;

    match command {
        CategoryCommands::Add { name, json } => {
            let name = match name {
                Some(n) => n,
                None => prompt_text("Category name")?,
            };

            let category = ctx.inventory.add_category(&owner, &name).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&category)?);
            } else {
                output::success(&format!("Category '{}' added", category.name));
                println!("  ID: {}", category.id);
            }
            Ok(())
        }

        CategoryCommands::List { json } => {
            let categories = ctx.inventory.list_categories(&owner).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&categories)?);
                return Ok(());
            }

            if categories.is_empty() {
                println!("{}", "No categories yet".dimmed());
                return Ok(());
            }

            let mut table = output::create_table();
            table.set_header(vec!["ID", "Name"]);
            for category in &categories {
                table.add_row(vec![&category.id, &category.name]);
            }
            println!("{}", table);
            Ok(())
        }

        CategoryCommands::Rm { id, force } => {
            if !force {
                println!(
                    "\n{}",
                    "This will delete the category. Products keep their reference and show as uncategorized.".yellow()
                );

                if !Confirm::new()
                    .with_prompt("Are you sure?")
                    .default(false)
                    .interact()?
                {
                    println!("{}\n", "Cancelled".dimmed());
                    return Ok(());
                }
            }

            ctx.inventory.delete_category(&owner, &id).await?;
            output::success("Category deleted");
            Ok(())
        }
    }
}
