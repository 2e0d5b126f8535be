//! Builds one rectangular grid for one table-condition coordinate.

use std::collections::BTreeMap;

use tracing::trace;

use super::calc::CalcColumns;
use crate::error::Result;
use crate::parser::TestPlan;
use crate::types::{Grid, PLACEHOLDER};

/// Synthesize one grid for the given table-condition values.
///
/// Layout order: column-condition header rows, result rows, calculation
/// column insertion, row-condition rows (sized to the post-insertion width),
/// then calculation label and equation placement.
pub(crate) fn build_grid(
    plan: &TestPlan,
    title: &str,
    table_condition_values: Vec<String>,
) -> Result<Grid> {
    let total_columns = total_columns(plan);
    let mut rows: Vec<Vec<String>> = Vec::new();

    if !plan.column_conditions.is_empty() {
        rows.extend(column_header_rows(plan, total_columns));
    }
    if !plan.results.names.is_empty() {
        rows.extend(result_rows(plan, total_columns));
    }

    // Calculation columns go in before row-condition rows so those rows are
    // built at the final width.
    let calc_columns = CalcColumns::insert(plan, &mut rows);

    let width = rows.first().map(Vec::len).unwrap_or(total_columns);
    rows.extend(row_condition_rows(plan, width));

    let mut formulas = BTreeMap::new();
    calc_columns.place(plan, &mut rows, &mut formulas);

    let grid = Grid {
        title: title.to_string(),
        table_condition_values,
        rows,
        formulas,
    };
    grid.ensure_rectangular()?;
    trace!(
        rows = grid.num_rows(),
        cols = grid.num_cols(),
        coordinate = ?grid.table_condition_values,
        "built grid"
    );
    Ok(grid)
}

/// Total column count before calculation insertion: two row-condition
/// columns when row conditions exist, one column per column-condition value
/// (or per result name when no column conditions exist), and one per
/// specification name. Never less than one.
pub(crate) fn total_columns(plan: &TestPlan) -> usize {
    let mut total = 0;

    if !plan.row_conditions.is_empty() {
        total += 2;
    }

    if plan.column_conditions.is_empty() {
        total += plan.results.names.len();
    } else {
        total += plan.column_conditions.total_value_count();
    }

    total += plan.specifications.names.len();

    total.max(1)
}

/// First body column: column-condition groups and result labels start after
/// the two row-condition columns when row conditions exist.
fn start_col(plan: &TestPlan) -> usize {
    if plan.row_conditions.is_empty() {
        0
    } else {
        2
    }
}

/// The two column-condition header rows: names repeated across each group's
/// width, then the individual values aligned to the same columns.
fn column_header_rows(plan: &TestPlan, total_columns: usize) -> Vec<Vec<String>> {
    let mut name_row = vec![PLACEHOLDER.to_string(); total_columns];
    let mut value_row = vec![PLACEHOLDER.to_string(); total_columns];

    let mut col = start_col(plan);
    for (idx, values) in plan.column_conditions.values.iter().enumerate() {
        let label = plan.column_conditions.label(idx).unwrap_or_default();
        for value in values {
            if let Some(cell) = name_row.get_mut(col) {
                *cell = label.clone();
            }
            if let Some(cell) = value_row.get_mut(col) {
                *cell = value.clone();
            }
            col += 1;
        }
    }

    vec![name_row, value_row]
}

/// Result rows. With column conditions, one row per result with the label
/// repeated across every column-condition group. Without, a single row
/// listing the result labels as column headers.
fn result_rows(plan: &TestPlan, total_columns: usize) -> Vec<Vec<String>> {
    let start = start_col(plan);

    if !plan.column_conditions.is_empty() {
        let mut out = Vec::with_capacity(plan.results.names.len());
        for idx in 0..plan.results.names.len() {
            let label = plan.results.label(idx).unwrap_or_default();
            let mut row = vec![PLACEHOLDER.to_string(); total_columns];
            let mut col = start;
            for group in &plan.column_conditions.values {
                for _ in group {
                    if let Some(cell) = row.get_mut(col) {
                        *cell = label.clone();
                    }
                    col += 1;
                }
            }
            out.push(row);
        }
        return out;
    }

    let mut row = vec![PLACEHOLDER.to_string(); total_columns];
    let mut col = start;
    for idx in 0..plan.results.names.len() {
        let label = plan.results.label(idx).unwrap_or_default();
        if let Some(cell) = row.get_mut(col) {
            *cell = label;
        }
        col += 1;
    }
    vec![row]
}

/// Row-condition rows: one row per condition value, label in column 0 and
/// the value in column 1. Without row conditions, a single placeholder row
/// so the body region is never empty.
fn row_condition_rows(plan: &TestPlan, width: usize) -> Vec<Vec<String>> {
    if plan.row_conditions.is_empty() {
        return vec![vec![PLACEHOLDER.to_string(); width]];
    }

    let mut out = Vec::new();
    for idx in 0..plan.row_conditions.names.len() {
        let label = plan.row_conditions.label(idx).unwrap_or_default();
        for value in plan.row_conditions.values_for(idx) {
            let mut row = vec![PLACEHOLDER.to_string(); width];
            if let Some(cell) = row.get_mut(0) {
                *cell = label.clone();
            }
            if let Some(cell) = row.get_mut(1) {
                *cell = value.clone();
            }
            out.push(row);
        }
    }
    out
}
