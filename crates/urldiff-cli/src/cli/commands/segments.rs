//! `urldiff segments` – print a URL split on `&`.

use anyhow::Result;
use urldiff_core::url_segments;

pub fn run_segments(url: &str) -> Result<()> {
    for segment in url_segments(url) {
        println!("{segment}");
    }
    Ok(())
}
