//! Search command

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use crate::ops::{self, Context as OpContext};
use crate::ui::Output;
use crate::ui::table::candidate_table;

/// Search the artifact index and print the top matches
pub async fn search(index_url: &str, query: &str, json: bool) -> Result<()> {
    let ctx = OpContext::new(index_url)?;
    tracing::debug!("Searching {index_url} for {query}");
    let results = ops::search::search(&ctx, query).await?;

    if json {
        let out = serde_json::to_string_pretty(&results).context("Failed to encode results")?;
        println!("{out}");
        return Ok(());
    }

    if results.is_empty() {
        Output::new().info(&format!("No artifacts found matching '{}'", query.white()));
        return Ok(());
    }

    println!("{}", candidate_table(&results));
    Ok(())
}
