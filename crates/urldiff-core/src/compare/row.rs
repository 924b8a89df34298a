//! Comparison row and summary types.

use serde::Serialize;

/// Prefix of the `name` of every query parameter row.
pub const QUERY_PARAM_PREFIX: &str = "Query Param: ";

/// One compared field of the two URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    /// `protocol`, `host`, `pathname` or `Query Param: <key>`.
    pub name: String,
    /// Value from the first URL (`""` if absent).
    pub value1: String,
    /// Value from the second URL (`""` if absent).
    pub value2: String,
    #[serde(rename = "isSame")]
    pub is_same: bool,
}

impl ComparisonRow {
    /// Row for a structural field: same iff the strings are equal, empty included.
    pub(crate) fn field(name: &str, value1: &str, value2: &str) -> Self {
        Self {
            name: name.to_string(),
            value1: value1.to_string(),
            value2: value2.to_string(),
            is_same: value1 == value2,
        }
    }

    /// Row for a query parameter: same only if both values are non-empty and equal.
    /// A parameter missing on both sides never produces a row, but an empty value
    /// on either side always reads as different.
    pub(crate) fn query_param(key: &str, value1: &str, value2: &str) -> Self {
        Self {
            name: format!("{QUERY_PARAM_PREFIX}{key}"),
            value1: value1.to_string(),
            value2: value2.to_string(),
            is_same: !value1.is_empty() && !value2.is_empty() && value1 == value2,
        }
    }

    pub fn is_query_param(&self) -> bool {
        self.name.starts_with(QUERY_PARAM_PREFIX)
    }

    /// Parameter name for query rows, `None` for structural rows.
    pub fn param_name(&self) -> Option<&str> {
        self.name.strip_prefix(QUERY_PARAM_PREFIX)
    }
}

/// Counts over a comparison result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ComparisonSummary {
    pub total: usize,
    pub same: usize,
    pub different: usize,
}

pub fn summarize(rows: &[ComparisonRow]) -> ComparisonSummary {
    let same = rows.iter().filter(|r| r.is_same).count();
    ComparisonSummary {
        total: rows.len(),
        same,
        different: rows.len() - same,
    }
}
