//! LaTeX tabular rendering with merge spans and positional emphasis.

use crate::error::Result;
use crate::merge::{detect_merges, MergePlan, Orientation};
use crate::synth::TableSet;
use crate::types::{Grid, PLACEHOLDER};

use super::summary::condition_string;

/// Render one grid as a `tabular` block: centered columns with vertical
/// rules, merge commands for detected spans, and position-based bold.
///
/// # Errors
/// Returns [`crate::GridtexError::MalformedGrid`] when the grid is not
/// rectangular.
pub fn render_table(grid: &Grid) -> Result<String> {
    let merges = detect_merges(grid)?;
    Ok(render_with_merges(grid, &merges))
}

fn render_with_merges(grid: &Grid, merges: &MergePlan) -> String {
    let rows = grid.num_rows();
    let cols = grid.num_cols();

    let mut out = String::new();
    out.push_str("\\begin{tabular}{|");
    for _ in 0..cols {
        out.push_str("c|");
    }
    out.push_str("}\n\\hline\n");

    for (row_idx, _) in grid.rows.iter().enumerate() {
        let mut parts: Vec<String> = Vec::new();
        let mut col = 0;
        while col < cols {
            if merges.is_skipped(row_idx, col) {
                col += 1;
                continue;
            }
            if merges.is_blank(row_idx, col) {
                parts.push(String::new());
                col += 1;
                continue;
            }

            let raw = grid.cell(row_idx, col).unwrap_or_default().trim();
            let mut text = escape(raw);
            if should_emphasize(row_idx, col, merges.data_start_row, raw) {
                text = format!("\\textbf{{{text}}}");
            }

            match merges.span_at(row_idx, col) {
                Some(span) if span.orientation == Orientation::Horizontal => {
                    parts.push(format!("\\multicolumn{{{}}}{{c|}}{{{text}}}", span.len));
                    col += span.len;
                }
                Some(span) if span.orientation == Orientation::Vertical => {
                    parts.push(format!("\\multirow{{{}}}{{*}}{{{text}}}", span.len));
                    col += 1;
                }
                _ => {
                    parts.push(text);
                    col += 1;
                }
            }
        }

        out.push_str(&parts.join(" & "));
        out.push_str(" \\\\\n");

        // Rule after the very first row, and again before the first data
        // row when the header region extends further.
        let after_first = row_idx == 0;
        let before_data = row_idx + 1 == merges.data_start_row && merges.data_start_row < rows;
        if after_first || before_data {
            out.push_str("\\hline\n");
        }
    }

    out.push_str("\\hline\n\\end{tabular}");
    out
}

/// Bold rule: header-region text, and column-0 text in the data region.
/// Numbers, placeholders, and empty cells are never bold.
fn should_emphasize(row: usize, col: usize, data_start_row: usize, text: &str) -> bool {
    if text.is_empty() || text == PLACEHOLDER || text.parse::<f64>().is_ok() {
        return false;
    }
    row < data_start_row || col == 0
}

/// Render the full report fragment for a table set: a subsection for the
/// test, one subsubsection per grid titled with its condition string, and
/// the centered tabular blocks.
///
/// # Errors
/// Returns [`crate::GridtexError::MalformedGrid`] when any grid is not
/// rectangular.
pub fn render_section(set: &TableSet) -> Result<String> {
    let mut out = String::new();
    out.push_str("\\newpage\n");
    out.push_str(&format!(
        "\\subsection{{{}}}\n\n",
        escape(&set.basic_info.test_name)
    ));

    for (idx, grid) in set.grids.iter().enumerate() {
        let conditions = condition_string(&set.table_conditions, &grid.table_condition_values);
        let heading = if conditions.is_empty() {
            format!("Table {}", idx + 1)
        } else {
            escape(&conditions)
        };
        out.push_str(&format!("\\subsubsection{{{heading}}}\n\n"));
        out.push_str("\\begin{center}\n");
        out.push_str(&render_table(grid)?);
        out.push_str("\n\\end{center}\n\n\\vspace{1em}\n\n");
    }

    Ok(out)
}

/// Minimal escaping for the characters that break tabular content.
/// Backslashes and braces pass through so cells may carry markup.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("\\&"),
            '%' => out.push_str("\\%"),
            '#' => out.push_str("\\#"),
            '_' => out.push_str("\\_"),
            _ => out.push(c),
        }
    }
    out
}
