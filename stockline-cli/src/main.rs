//! Stockline CLI - Inventory tracking in your terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod output;

use commands::{category, export, history, label, product, status};

/// Stockline - inventory tracking in your terminal
#[derive(Parser)]
#[command(name = "sl", version, about, long_about = None)]
struct Cli {
    /// Act as this user (overrides STOCKLINE_USER and the configured default)
    #[arg(long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage product categories
    Category {
        #[command(subcommand)]
        command: category::CategoryCommands,
    },

    /// Manage products
    Product {
        #[command(subcommand)]
        command: product::ProductCommands,
    },

    /// Show the transaction history
    History {
        /// Maximum number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Export a stock report
    Export {
        /// Output format (html, csv)
        #[arg(long, default_value = "html")]
        format: String,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
        /// Output the report data as JSON instead of rendering
        #[arg(long)]
        json: bool,
    },

    /// Generate label data for products
    Label {
        /// Product ID (all products if not specified)
        id: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stock totals
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = run(cli).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let user = cli.user;
    match cli.command {
        Commands::Category { command } => category::run(command, user).await,
        Commands::Product { command } => product::run(command, user).await,
        Commands::History { limit, json } => history::run(limit, json, user).await,
        Commands::Export { format, out, json } => export::run(&format, out, json, user).await,
        Commands::Label { id, json } => label::run(id, json, user).await,
        Commands::Status { json } => status::run(json, user).await,
    }
}
