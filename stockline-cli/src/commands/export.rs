//! Export command - render the stock report

use std::path::PathBuf;

use anyhow::Result;

use super::{get_context, resolve_owner};
use crate::output;

pub async fn run(format: &str, out: Option<PathBuf>, json: bool, user: Option<String>) -> Result<()> {
    let ctx = get_context()?;
    let owner = resolve_owner(&ctx, user).await?;

    let report = ctx.report.build(&owner).await?;
    let rendered = if json {
        serde_json::to_string_pretty(&report)?
    } else {
        match format {
            "html" => ctx.report.to_html(&report),
            "csv" => ctx.report.to_csv(&report)?,
            other => anyhow::bail!("Unknown format '{}'. Supported: html, csv", other),
        }
    };

    match out {
        Some(path) => {
            std::fs::write(&path, rendered)?;
            output::success(&format!("Report written to {}", path.display()));
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
