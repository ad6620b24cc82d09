//! Product command - manage products

use anyhow::Result;
use clap::Subcommand;
use colored::Colorize;
use dialoguer::Confirm;
use rust_decimal::Decimal;

use stockline_core::domain::currency::{
    cents_to_amount, format_amount, parse_currency_input_to_cents,
};
use stockline_core::services::category_label;
use stockline_core::{Product, StocklineContext};

use super::{get_context, prompt_text, resolve_owner};
use crate::output;

#[derive(Subcommand)]
pub enum ProductCommands {
    /// Add a product
    Add {
        /// Product name
        name: Option<String>,
        /// Quantity in stock
        #[arg(short, long)]
        quantity: Option<i64>,
        /// Unit price (e.g. "1500.00")
        #[arg(short, long)]
        price: Option<String>,
        /// Category ID
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List products
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one product
    Show {
        /// Product ID
        id: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit a product (unspecified fields keep their current value)
    Edit {
        /// Product ID
        id: String,
        /// New product name
        #[arg(long)]
        name: Option<String>,
        /// New quantity
        #[arg(short, long)]
        quantity: Option<i64>,
        /// New unit price
        #[arg(short, long)]
        price: Option<String>,
        /// New category ID
        #[arg(short, long)]
        category: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete a product
    Rm {
        /// Product ID
        id: String,
        /// Skip confirmation prompt
        #[arg(long, short)]
        force: bool,
    },
}

pub async fn run(command: ProductCommands, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let owner = resolve_owner(&ctx, user).await?;

    match command {
        ProductCommands::Add {
            name,
            quantity,
            price,
            category,
            json,
        } => run_add(&ctx, &owner, name, quantity, price, category, json).await,
        ProductCommands::List { json } => run_list(&ctx, &owner, json).await,
        ProductCommands::Show { id, json } => run_show(&ctx, &owner, &id, json).await,
        ProductCommands::Edit {
            id,
            name,
            quantity,
            price,
            category,
            json,
        } => run_edit(&ctx, &owner, &id, name, quantity, price, category, json).await,
        ProductCommands::Rm { id, force } => run_rm(&ctx, &owner, &id, force).await,
    }
}

async fn run_add(
    ctx: &StocklineContext,
    owner: &str,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    let name = match name {
        Some(n) => n,
        None => prompt_text("Product name")?,
    };
    let quantity = match quantity {
        Some(q) => q,
        None => prompt_text("Quantity")?
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("Invalid quantity"))?,
    };
    let price = match price {
        Some(p) => p,
        None => prompt_text("Unit price")?,
    };
    let category = match category {
        Some(c) => c,
        None => prompt_text("Category ID")?,
    };

    let unit_price = parse_price(&price);
    let product = ctx
        .inventory
        .add_product(owner, &name, quantity, unit_price, &category)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        output::success(&format!("Product '{}' added", product.name));
        println!("  ID: {}", product.id);
        println!("  Quantity: {}", product.quantity);
        println!("  Unit price: {}", format_amount(product.unit_price));
    }
    Ok(())
}

async fn run_list(ctx: &StocklineContext, owner: &str, json: bool) -> Result<()> {
    let products = ctx.inventory.list_products(owner).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&products)?);
        return Ok(());
    }

    if products.is_empty() {
        println!("{}", "No products yet".dimmed());
        return Ok(());
    }

    let categories = ctx.inventory.list_categories(owner).await?;
    let mut table = output::create_table();
    table.set_header(vec!["ID", "Name", "Qty", "Unit price", "Category"]);
    for product in &products {
        table.add_row(vec![
            product.id.clone(),
            product.name.clone(),
            product.quantity.to_string(),
            format_amount(product.unit_price),
            category_label(&categories, &product.category_id),
        ]);
    }
    println!("{}", table);
    Ok(())
}

async fn run_show(ctx: &StocklineContext, owner: &str, id: &str, json: bool) -> Result<()> {
    let product = ctx.inventory.get_product(owner, id).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
        return Ok(());
    }

    let categories = ctx.inventory.list_categories(owner).await?;
    println!("{}", product.name.bold());
    println!("  ID: {}", product.id);
    println!("  Quantity: {}", product.quantity);
    println!("  Unit price: {}", format_amount(product.unit_price));
    println!(
        "  Category: {}",
        category_label(&categories, &product.category_id)
    );
    println!("  Stock value: {}", format_amount(product.stock_value()));
    Ok(())
}

async fn run_edit(
    ctx: &StocklineContext,
    owner: &str,
    id: &str,
    name: Option<String>,
    quantity: Option<i64>,
    price: Option<String>,
    category: Option<String>,
    json: bool,
) -> Result<()> {
    // Fetch first so omitted flags fall back to current values
    let current: Product = ctx.inventory.get_product(owner, id).await?;

    let name = name.unwrap_or(current.name);
    let quantity = quantity.unwrap_or(current.quantity);
    let unit_price = match price {
        Some(p) => parse_price(&p),
        None => current.unit_price,
    };
    let category = category.unwrap_or(current.category_id);

    let product = ctx
        .inventory
        .edit_product(owner, id, &name, quantity, unit_price, &category)
        .await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&product)?);
    } else {
        output::success(&format!("Product '{}' updated", product.name));
        println!("  Quantity: {}", product.quantity);
        println!("  Unit price: {}", format_amount(product.unit_price));
    }
    Ok(())
}

async fn run_rm(ctx: &StocklineContext, owner: &str, id: &str, force: bool) -> Result<()> {
    if !force {
        let product = ctx.inventory.get_product(owner, id).await?;
        println!(
            "\n{}",
            format!(
                "This will delete '{}' ({} un.) from stock.",
                product.name, product.quantity
            )
            .yellow()
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

    ctx.inventory.delete_product(owner, id).await?;
    output::success("Product deleted");
    Ok(())
}

/// Lenient price parsing: keep digits only, treat the result as cents
fn parse_price(text: &str) -> Decimal {
    cents_to_amount(parse_currency_input_to_cents(text))
}
