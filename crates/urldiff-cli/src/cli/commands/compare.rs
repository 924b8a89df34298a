//! `urldiff compare` – compare two URLs and print the rows.

use anyhow::Result;
use urldiff_core::compare;
use urldiff_core::config::{OutputFormat, UrlDiffConfig};

use crate::cli::render::{render_json, render_table};

/// Unparsable input is not an error here: it prints "nothing to show" and succeeds.
pub fn run_compare(url1: &str, url2: &str, format: OutputFormat, cfg: &UrlDiffConfig) -> Result<()> {
    let rows = compare(url1, url2);
    tracing::info!(url1, url2, rows = rows.len(), "compare");
    match format {
        OutputFormat::Table => print!("{}", render_table(&rows, &cfg.empty_placeholder)),
        OutputFormat::Json => println!("{}", render_json(&rows)?),
    }
    Ok(())
}
