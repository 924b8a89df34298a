//! Text and JSON rendering of comparison rows.

use anyhow::Result;
use urldiff_core::{summarize, ComparisonRow};

const HEADERS: [&str; 4] = ["Parameter", "URL 1", "URL 2", "Status"];

fn status(row: &ComparisonRow) -> &'static str {
    if row.is_same {
        "Same"
    } else {
        "Different"
    }
}

fn cell<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn push_line(out: &mut String, cells: [&str; 4], widths: [usize; 4]) {
    let mut line = String::new();
    for (i, (c, w)) in cells.iter().zip(widths).enumerate() {
        if i + 1 == cells.len() {
            line.push_str(c);
        } else {
            line.push_str(c);
            line.push_str(&" ".repeat(w - width(c) + 2));
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Renders rows as an aligned table followed by a summary line.
/// Empty values show as `placeholder`.
pub fn render_table(rows: &[ComparisonRow], placeholder: &str) -> String {
    if rows.is_empty() {
        return "No comparison to display.\n".to_string();
    }

    let lines: Vec<[&str; 4]> = rows
        .iter()
        .map(|r| {
            [
                r.name.as_str(),
                cell(&r.value1, placeholder),
                cell(&r.value2, placeholder),
                status(r),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(width);
    for l in &lines {
        for (w, c) in widths.iter_mut().zip(l) {
            *w = (*w).max(width(c));
        }
    }

    let mut out = String::new();
    push_line(&mut out, HEADERS, widths);
    let rule = widths.map(|w| "-".repeat(w));
    push_line(&mut out, rule.each_ref().map(String::as_str), widths);
    for l in lines {
        push_line(&mut out, l, widths);
    }

    let s = summarize(rows);
    out.push_str(&format!(
        "\n{} fields compared: {} same, {} different\n",
        s.total, s.same, s.different
    ));
    out
}

/// Renders rows as a pretty-printed JSON array.
pub fn render_json(rows: &[ComparisonRow]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use urldiff_core::compare;

    #[test]
    fn empty_rows_message() {
        assert_eq!(render_table(&[], "—"), "No comparison to display.\n");
    }

    #[test]
    fn table_has_header_rows_and_summary() {
        let rows = compare("https://a.com/p?q=1", "https://a.com/p");
        let table = render_table(&rows, "—");
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[0].starts_with("Parameter"));
        assert!(lines[0].ends_with("Status"));
        assert!(lines[1].starts_with("---------"));
        assert!(lines[2].starts_with("protocol"));
        assert!(lines[2].ends_with("Same"));
        assert!(lines[5].starts_with("Query Param: q"));
        assert!(lines[5].contains("—"));
        assert!(lines[5].ends_with("Different"));
        assert_eq!(lines.last(), Some(&"4 fields compared: 3 same, 1 different"));
    }

    #[test]
    fn columns_aligned() {
        let rows = compare("https://a.com/p?long_parameter=1", "https://b.com/p");
        let table = render_table(&rows, "-");
        let lines: Vec<&str> = table.lines().take(6).collect();
        let col = lines[0].find("URL 1").unwrap();
        for l in &lines[2..] {
            assert_eq!(l.chars().nth(col - 1), Some(' '), "{l}");
        }
    }

    #[test]
    fn json_uses_is_same_key() {
        let rows = compare("https://a.com/", "https://a.com/");
        let json = render_json(&rows).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.as_array().unwrap().len(), 3);
        assert_eq!(parsed[0]["name"], "protocol");
        assert_eq!(parsed[0]["isSame"], true);
    }
}
