//! Field-by-field comparison of two absolute URLs.
//!
//! Rows come out in a fixed order: `protocol`, `host`, `pathname`, then one row
//! per query parameter name found in either URL, sorted ascending.

mod components;
mod row;

pub use components::{param_names_union, UrlComponents};
pub use row::{summarize, ComparisonRow, ComparisonSummary, QUERY_PARAM_PREFIX};

use crate::error::{CompareError, UrlSide};

/// Compares two URLs and returns the rows, or the parse failure of either side.
pub fn try_compare(url1: &str, url2: &str) -> Result<Vec<ComparisonRow>, CompareError> {
    let a = parse_side(url1, UrlSide::First)?;
    let b = parse_side(url2, UrlSide::Second)?;

    let names = param_names_union(&a, &b);
    let mut rows = Vec::with_capacity(3 + names.len());
    rows.push(ComparisonRow::field("protocol", &a.protocol, &b.protocol));
    rows.push(ComparisonRow::field("host", &a.host, &b.host));
    rows.push(ComparisonRow::field("pathname", &a.pathname, &b.pathname));
    for key in names {
        rows.push(ComparisonRow::query_param(key, a.param(key), b.param(key)));
    }

    tracing::debug!(url1, url2, rows = rows.len(), "compared urls");
    Ok(rows)
}

/// Compares two URLs; an unparsable input yields an empty result and a warning log.
pub fn compare(url1: &str, url2: &str) -> Vec<ComparisonRow> {
    match try_compare(url1, url2) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!(side = %e.side(), "invalid URL: {e}");
            Vec::new()
        }
    }
}

fn parse_side(input: &str, side: UrlSide) -> Result<UrlComponents, CompareError> {
    UrlComponents::parse(input).map_err(|source| CompareError::UnparsableUrl {
        side,
        input: input.to_string(),
        source,
    })
}
