//! Delimited (CSV/TSV) export of raw grids.
//!
//! A grid exports with no header row of its own; its header rows are
//! ordinary data rows.

use crate::types::Grid;

/// Field delimiter for export.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimiter {
    Comma,
    Tab,
}

impl Delimiter {
    pub(crate) fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Tab => '\t',
        }
    }
}

/// Render a grid as delimited text, one line per row, trailing newline.
#[must_use]
pub fn write_delimited(grid: &Grid, delim: Delimiter) -> String {
    let sep = delim.as_char();
    let mut out = String::new();
    for row in &grid.rows {
        let line: Vec<String> = row.iter().map(|field| quote_field(field, sep)).collect();
        out.push_str(&line.join(&sep.to_string()));
        out.push('\n');
    }
    out
}

/// Quote a field when it contains the separator, a quote, or a newline.
pub(crate) fn quote_field(field: &str, sep: char) -> String {
    if field.contains(sep) || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split one delimited line back into fields, respecting quoted fields.
///
/// The inverse of [`write_delimited`] for a single line; used by round-trip
/// tests and by callers re-reading exported grids.
#[must_use]
pub fn split_line(line: &str, delim: Delimiter) -> Vec<String> {
    let sep = delim.as_char();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == '"' {
            in_quotes = true;
        } else if ch == sep {
            fields.push(current.clone());
            current.clear();
        } else {
            current.push(ch);
        }
    }
    fields.push(current);
    fields
}
