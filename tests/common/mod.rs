//! Common test utilities and assertion helpers.
//!
//! This module provides helper functions for testing grid synthesis,
//! merge detection, and rendering.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridtex::merge::{detect_merges, MergePlan, Orientation};
use gridtex::{Grid, TableSet, TestMetadata};

/// Synthesize a table set, panicking on malformed metadata or any per-grid
/// failure.
pub fn synth(meta: &TestMetadata) -> TableSet {
    let set = gridtex::synthesize(meta).expect("metadata failed to parse");
    assert!(
        set.failures.is_empty(),
        "unexpected grid failures: {:?}",
        set.failures
    );
    set
}

/// Synthesize a table set that must contain exactly one grid, and return it.
pub fn synth_single(meta: &TestMetadata) -> Grid {
    let mut set = synth(meta);
    assert_eq!(set.grids.len(), 1, "expected exactly one grid");
    set.grids.remove(0)
}

/// Cell text at `(row, col)`, panicking when out of bounds.
pub fn cell(grid: &Grid, row: usize, col: usize) -> &str {
    grid.cell(row, col)
        .unwrap_or_else(|| panic!("no cell at ({row}, {col})"))
}

/// Assert every row of the grid has the same width.
pub fn assert_rectangular(grid: &Grid) {
    grid.ensure_rectangular().expect("grid is not rectangular");
}

/// Re-derive a grid from its merge plan by clearing span interiors and then
/// expanding each span back into repeated cell values.
///
/// Returns the expanded rows; equality with the original rows is the merge
/// round-trip property.
pub fn expand_spans(grid: &Grid, plan: &MergePlan) -> Vec<Vec<String>> {
    // What the renderer materializes: anchors carry the text, interiors are
    // empty.
    let mut rendered: Vec<Vec<String>> = grid.rows.clone();
    for (r, row) in rendered.iter_mut().enumerate() {
        for (c, value) in row.iter_mut().enumerate() {
            if plan.is_skipped(r, c) || plan.is_blank(r, c) {
                value.clear();
            }
        }
    }

    // Expansion: copy each anchor back over its span.
    for span in &plan.spans {
        let anchor = grid.rows[span.row][span.col].clone();
        for k in 1..span.len {
            let (r, c) = match span.orientation {
                Orientation::Horizontal => (span.row, span.col + k),
                Orientation::Vertical => (span.row + k, span.col),
            };
            rendered[r][c] = anchor.clone();
        }
    }
    rendered
}

/// Assert the merge round-trip property for a grid.
pub fn assert_merge_round_trip(grid: &Grid) {
    let plan = detect_merges(grid).expect("merge detection failed");
    assert_eq!(
        expand_spans(grid, &plan),
        grid.rows,
        "expanding spans did not reproduce the grid"
    );
}
