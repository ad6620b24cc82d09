//! CLI command implementations

pub mod category;
pub mod export;
pub mod history;
pub mod label;
pub mod product;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use dialoguer::Input;
use stockline_core::StocklineContext;

/// Get the stockline directory from environment or default
pub fn get_stockline_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("STOCKLINE_DIR") {
        PathBuf::from(dir)
    } else {
        dirs::home_dir()
            .expect("Could not find home directory")
            .join(".stockline")
    }
}

/// Get or create stockline context
pub fn get_context() -> Result<StocklineContext> {
    let stockline_dir = get_stockline_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&stockline_dir)
        .with_context(|| format!("Failed to create stockline directory: {:?}", stockline_dir))?;

    StocklineContext::new(&stockline_dir)
        .with_context(|| format!("Failed to open stockline data in {:?}", stockline_dir))
}

/// Resolve the acting user
///
/// Priority: --user flag > identity provider (STOCKLINE_USER, then the
/// configured default user)
pub async fn resolve_owner(ctx: &StocklineContext, user: Option<String>) -> Result<String> {
    if let Some(user) = user {
        if !user.trim().is_empty() {
            return Ok(user);
        }
    }

    let session = ctx.identity.session().await?;
    let owner = session.require_user().map_err(|_| {
        anyhow::anyhow!("No user configured. Pass --user, or set STOCKLINE_USER or defaultUser in settings.json")
    })?;
    Ok(owner.to_string())
}

/// Prompt for a missing value, or fail when stdin is not a terminal
pub fn prompt_text(prompt: &str) -> Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        anyhow::bail!("{} is required when not running interactively", prompt);
    }
    Ok(Input::new().with_prompt(prompt).interact_text()?)
}
