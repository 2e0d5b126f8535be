//! The rectangular grid of string cells produced by synthesis.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::PLACEHOLDER;
use crate::error::{GridtexError, Result};

/// A two-dimensional array of string cells plus the table-condition
/// coordinate it represents.
///
/// Grids are produced fresh on every synthesis call and are immutable
/// afterward, except for the calculation-column insertion step which runs
/// before merge detection. There is no implicit header/body distinction
/// beyond the computed [`data_start_row`](Grid::data_start_row).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Grid {
    /// `"<category> - <test name>"`, identical for every grid produced from
    /// one metadata record.
    pub title: String,
    /// The specific table-condition values this grid represents, in
    /// declaration order. Empty for a zero-dimensional table set.
    pub table_condition_values: Vec<String>,
    /// Row-major cells. Rectangular once synthesis completes.
    pub rows: Vec<Vec<String>>,
    /// Equation text per calculation cell, keyed by `(row, col)`
    /// (not serialized).
    #[serde(skip)]
    pub formulas: BTreeMap<(usize, usize), String>,
}

impl Grid {
    /// Number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.rows.first().map(Vec::len).unwrap_or(0)
    }

    /// Cell text at `(row, col)`, if in bounds.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    /// Verify every row has the width of the first row.
    ///
    /// # Errors
    /// Returns [`GridtexError::MalformedGrid`] naming the first offending
    /// row. The renderer and merge detector require rectangularity and never
    /// pad silently.
    pub fn ensure_rectangular(&self) -> Result<()> {
        let expected = self.num_cols();
        for (idx, row) in self.rows.iter().enumerate() {
            if row.len() != expected {
                return Err(GridtexError::MalformedGrid {
                    title: self.title.clone(),
                    row: idx,
                    expected,
                    found: row.len(),
                });
            }
        }
        Ok(())
    }

    /// First row of the data region: the first row whose first two cells
    /// (when at least two columns exist) are both non-empty and not the
    /// placeholder. Everything above is header region.
    ///
    /// Returns `num_rows()` when no row qualifies (the whole grid is
    /// header region).
    #[must_use]
    pub fn data_start_row(&self) -> usize {
        let cols = self.num_cols();
        for (idx, row) in self.rows.iter().enumerate() {
            let first = row.first().map(|c| c.trim()).unwrap_or("");
            let second = if cols > 1 {
                row.get(1).map(|c| c.trim()).unwrap_or("")
            } else {
                ""
            };
            if !first.is_empty()
                && first != PLACEHOLDER
                && !second.is_empty()
                && second != PLACEHOLDER
            {
                return idx;
            }
        }
        self.num_rows()
    }

    /// Insert a placeholder column at `at` in every row, shifting later
    /// columns right. Rows shorter than `at` are extended so the new column
    /// exists everywhere.
    pub(crate) fn insert_column(rows: &mut [Vec<String>], at: usize) {
        for row in rows.iter_mut() {
            if row.len() > at {
                row.insert(at, PLACEHOLDER.to_string());
            } else {
                row.resize(at + 1, PLACEHOLDER.to_string());
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing, clippy::panic)]
mod tests {
    use super::*;

    fn grid(rows: &[&[&str]]) -> Grid {
        Grid {
            title: "t".into(),
            table_condition_values: Vec::new(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|c| (*c).to_string()).collect())
                .collect(),
            formulas: BTreeMap::new(),
        }
    }

    #[test]
    fn rectangular_check_names_offending_row() {
        let g = grid(&[&["a", "b"], &["c"]]);
        let err = g.ensure_rectangular().unwrap_err();
        match err {
            GridtexError::MalformedGrid { row, expected, found, .. } => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn data_start_row_skips_header_rows() {
        let g = grid(&[
            &["--", "--", "Load (Ohm)"],
            &["--", "--", "10"],
            &["Voltage (V)", "99", "--"],
        ]);
        assert_eq!(g.data_start_row(), 2);
    }

    #[test]
    fn data_start_row_defaults_past_end() {
        let g = grid(&[&["--", "--"], &["--", "x"]]);
        assert_eq!(g.data_start_row(), 2);
    }

    #[test]
    fn insert_column_extends_short_rows() {
        let mut rows = vec![
            vec!["a".to_string(), "b".to_string(), "c".to_string()],
            vec!["d".to_string()],
        ];
        Grid::insert_column(&mut rows, 1);
        assert_eq!(rows[0], vec!["a", "--", "b", "c"]);
        assert_eq!(rows[1], vec!["d", "--"]);
    }
}
