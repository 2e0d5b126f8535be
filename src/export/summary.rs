//! Summary index: one row per grid, linking exported files back to the
//! test and the table-condition coordinate they represent.

use serde::Serialize;

use super::csv::quote_field;
use crate::synth::TableSet;
use crate::types::{format_label, ConditionBlock};

/// One line of the summary table.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    /// Exported grid filename, `table<N>.csv` numbered from 1 in
    /// enumeration order.
    pub filename: String,
    pub category: String,
    pub test_name: String,
    /// Rendered coordinate, e.g. `"Temperature (C) = 25, Load = 10"`.
    pub conditions: String,
}

/// Render a grid's coordinate as
/// `"name (unit) = value, name2 (unit2) = value2, …"`. Names without units
/// render as `"name = value"`. Empty for a zero-dimensional table set.
#[must_use]
pub fn condition_string(block: &ConditionBlock, values: &[String]) -> String {
    block
        .names
        .iter()
        .zip(values)
        .enumerate()
        .map(|(idx, (name, value))| {
            let unit = block.units.get(idx).map(String::as_str).unwrap_or("");
            format!("{} = {}", format_label(name, unit), value)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Build one summary row per grid.
#[must_use]
pub fn summary_rows(set: &TableSet) -> Vec<SummaryRow> {
    set.grids
        .iter()
        .enumerate()
        .map(|(idx, grid)| SummaryRow {
            filename: format!("table{}.csv", idx + 1),
            category: set.basic_info.category.clone(),
            test_name: set.basic_info.test_name.clone(),
            conditions: condition_string(&set.table_conditions, &grid.table_condition_values),
        })
        .collect()
}

/// Render summary rows as CSV with a header line.
#[must_use]
pub fn write_summary(rows: &[SummaryRow]) -> String {
    let mut out = String::from("filename,category,test_name,conditions\n");
    for row in rows {
        let fields = [
            quote_field(&row.filename, ','),
            quote_field(&row.category, ','),
            quote_field(&row.test_name, ','),
            quote_field(&row.conditions, ','),
        ];
        out.push_str(&fields.join(","));
        out.push('\n');
    }
    out
}
