//! Merge detection over a finished, rectangular grid.
//!
//! Runs of identical non-numeric, non-placeholder text collapse into
//! horizontal or vertical spans. Numeric data is never visually collapsed,
//! so repeated numbers stay as separate cells.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::Result;
use crate::types::{Grid, PLACEHOLDER};

/// Direction of a merged run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A rectangular run of identical cells collapsed into one rendered cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MergeSpan {
    /// Anchor row (0-indexed).
    pub row: usize,
    /// Anchor column (0-indexed).
    pub col: usize,
    /// Number of cells in the run, anchor included. Always at least 2.
    pub len: usize,
    pub orientation: Orientation,
}

/// Merge layout for one grid: the detected spans plus the per-cell render
/// treatment they imply.
#[derive(Debug, Default)]
pub struct MergePlan {
    /// Detected spans in scan order. No two spans claim the same cell.
    pub spans: Vec<MergeSpan>,
    /// First row of the data region (everything above is header region).
    pub data_start_row: usize,
    /// Interior cells of horizontal spans; not emitted at all.
    skip: HashSet<(usize, usize)>,
    /// Interior cells of vertical spans; emitted with empty content since
    /// row-merge commands only annotate the anchor cell.
    blank: HashSet<(usize, usize)>,
}

impl MergePlan {
    /// The span anchored at `(row, col)`, if any.
    #[must_use]
    pub fn span_at(&self, row: usize, col: usize) -> Option<&MergeSpan> {
        self.spans.iter().find(|s| s.row == row && s.col == col)
    }

    /// True when `(row, col)` is the interior of a horizontal span.
    #[must_use]
    pub fn is_skipped(&self, row: usize, col: usize) -> bool {
        self.skip.contains(&(row, col))
    }

    /// True when `(row, col)` is the interior of a vertical span.
    #[must_use]
    pub fn is_blank(&self, row: usize, col: usize) -> bool {
        self.blank.contains(&(row, col))
    }
}

/// Whether a cell value may participate in a merge run: after trimming it
/// must not be the placeholder and must not parse as a floating-point
/// number.
#[must_use]
pub fn is_mergeable(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed != PLACEHOLDER && trimmed.parse::<f64>().is_err()
}

/// Scan a grid for merge runs.
///
/// Row-major scan, skipping cells already claimed. At each mergeable cell
/// the horizontal run is probed first; a horizontal span suppresses the
/// vertical probe at the same anchor.
///
/// # Errors
/// Returns [`crate::GridtexError::MalformedGrid`] when the grid is not
/// rectangular.
pub fn detect_merges(grid: &Grid) -> Result<MergePlan> {
    grid.ensure_rectangular()?;

    let rows = grid.num_rows();
    let cols = grid.num_cols();

    let mut plan = MergePlan {
        data_start_row: grid.data_start_row(),
        ..MergePlan::default()
    };

    for row in 0..rows {
        for col in 0..cols {
            if plan.skip.contains(&(row, col)) || plan.blank.contains(&(row, col)) {
                continue;
            }
            let Some(value) = grid.cell(row, col) else {
                continue;
            };
            if !is_mergeable(value) {
                continue;
            }

            let mut h_len = 1;
            while let Some(next) = grid.cell(row, col + h_len) {
                if next == value && is_mergeable(next) {
                    h_len += 1;
                } else {
                    break;
                }
            }
            if h_len > 1 {
                for k in 1..h_len {
                    plan.skip.insert((row, col + k));
                }
                plan.spans.push(MergeSpan {
                    row,
                    col,
                    len: h_len,
                    orientation: Orientation::Horizontal,
                });
                continue;
            }

            let mut v_len = 1;
            while let Some(next) = grid.cell(row + v_len, col) {
                if next == value && is_mergeable(next) {
                    v_len += 1;
                } else {
                    break;
                }
            }
            if v_len > 1 {
                for k in 1..v_len {
                    plan.blank.insert((row + k, col));
                }
                plan.spans.push(MergeSpan {
                    row,
                    col,
                    len: v_len,
                    orientation: Orientation::Vertical,
                });
            }
        }
    }

    Ok(plan)
}
