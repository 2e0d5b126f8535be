//! Insertion of derived calculation columns and later placement of their
//! labels and equation text.

use std::collections::BTreeMap;

use tracing::debug;

use crate::parser::TestPlan;
use crate::types::{format_label, ConnectionKind, Grid, PLACEHOLDER};

/// Calculation columns assigned during the insertion pass.
///
/// Carries each calculation's final column index forward to the label
/// placement step so positions are never recomputed. Scoped to one grid's
/// synthesis; grids share no calculation state.
#[derive(Debug, Default)]
pub(crate) struct CalcColumns {
    /// `(calculation index, assigned column)` in insertion order.
    columns: Vec<(usize, usize)>,
}

impl CalcColumns {
    /// Insert one placeholder column per `CN` calculation whose target
    /// matches a header cell, shifting later columns right.
    ///
    /// Runs after header and result rows are built, before row-condition
    /// rows are appended. The match is searched in the first header row as
    /// it stood before this pass; a running offset accounts for columns
    /// already inserted. Unmatched calculations are skipped silently.
    pub(crate) fn insert(plan: &TestPlan, rows: &mut Vec<Vec<String>>) -> Self {
        let mut columns = Vec::new();
        if plan.calculations.is_empty() || rows.is_empty() {
            return Self { columns };
        }

        let header = rows.first().cloned().unwrap_or_default();
        let mut inserted = 0usize;

        for (idx, calc) in plan.calculations.iter().enumerate() {
            let Some(connection) = &calc.connection else {
                continue;
            };
            match connection.kind {
                ConnectionKind::ColumnName => {}
                // Recognized kinds with no insertion behavior.
                ConnectionKind::ColumnValue | ConnectionKind::RowName => continue,
            }

            let target = if connection.target.is_empty() {
                calc.name.as_str()
            } else {
                connection.target.as_str()
            };

            let Some(matched) = rightmost_matching_column(&header, target) else {
                debug!(calculation = %calc.name, wanted = target, "no matching column, skipped");
                continue;
            };

            let insert_at = matched + 1 + inserted;
            Grid::insert_column(rows, insert_at);
            columns.push((idx, insert_at));
            inserted += 1;
        }

        Self { columns }
    }

    /// Place each calculation's `"name (unit)"` label in the row directly
    /// above the first row-condition data row and fill its equation text
    /// into every row below, recording each filled cell in the formula map.
    ///
    /// Without row conditions there is no label row and nothing is placed.
    pub(crate) fn place(
        &self,
        plan: &TestPlan,
        rows: &mut [Vec<String>],
        formulas: &mut BTreeMap<(usize, usize), String>,
    ) {
        if self.columns.is_empty() || plan.row_conditions.is_empty() {
            return;
        }

        let total_rows = rows.len();
        let value_count = plan.row_conditions.total_value_count();
        let Some(label_row) = total_rows.checked_sub(value_count + 1) else {
            return;
        };

        for &(calc_idx, col) in &self.columns {
            let Some(calc) = plan.calculations.get(calc_idx) else {
                continue;
            };
            let label = format_label(&calc.name, &calc.unit);
            if let Some(cell) = rows.get_mut(label_row).and_then(|r| r.get_mut(col)) {
                *cell = label;
            }
            if calc.equation.is_empty() {
                continue;
            }
            for row_idx in (label_row + 1)..total_rows {
                if let Some(cell) = rows.get_mut(row_idx).and_then(|r| r.get_mut(col)) {
                    *cell = calc.equation.clone();
                    formulas.insert((row_idx, col), calc.equation.clone());
                }
            }
        }
    }
}

/// Strip a trailing parenthesized unit suffix from a header cell,
/// e.g. `"Frequency (Hz)"` becomes `"Frequency"`. The last `(` wins when
/// several are present.
pub(crate) fn normalize_header(text: &str) -> &str {
    if text.contains('(') && text.contains(')') {
        if let Some(pos) = text.rfind('(') {
            return text.get(..pos).unwrap_or(text).trim();
        }
    }
    text.trim()
}

/// Index of the rightmost header cell whose normalized text equals the
/// target, or starts with `"<target> "` or `"<target>_"`. Placeholder and
/// empty cells never match.
pub(crate) fn rightmost_matching_column(header: &[String], target: &str) -> Option<usize> {
    let target = normalize_header(target);
    let with_space = format!("{target} ");
    let with_underscore = format!("{target}_");

    let mut rightmost = None;
    for (idx, cell) in header.iter().enumerate() {
        let trimmed = cell.trim();
        if trimmed.is_empty() || trimmed == PLACEHOLDER {
            continue;
        }
        let normalized = normalize_header(trimmed);
        if normalized == target
            || normalized.starts_with(&with_space)
            || normalized.starts_with(&with_underscore)
        {
            rightmost = Some(idx);
        }
    }
    rightmost
}
