//! Integration tests for calculation-column insertion: name matching,
//! shifting, label placement, and the formula map.
#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

mod common;
mod fixtures;

use common::{assert_rectangular, cell, synth_single};
use fixtures::MetadataBuilder;

/// `CN->Load` with `"Load (Ohm)"` in the header splices a new column
/// immediately right of it and shifts later columns over.
#[test]
fn cn_connection_inserts_after_matched_column() {
    let meta = MetadataBuilder::new("Output", "Power")
        .row_conditions("Vin", "V", "99")
        .column_conditions("Voltage,Load", "V,Ohm", "[5], [10]")
        .calculations("Pout", "W", "CN->Load", "V*I")
        .build();

    let grid = synth_single(&meta);
    assert_rectangular(&grid);
    assert_eq!(grid.num_cols(), 5);

    // Header keeps the placeholder; the label lands above the first
    // row-condition data row
    assert_eq!(cell(&grid, 0, 3), "Load (Ohm)");
    assert_eq!(cell(&grid, 0, 4), "--");
    assert_eq!(cell(&grid, 1, 4), "Pout (W)");

    // Equation text fills every data row in the assigned column
    assert_eq!(cell(&grid, 2, 4), "V*I");
    assert_eq!(grid.formulas.get(&(2, 4)).map(String::as_str), Some("V*I"));
}

/// The rightmost header cell matching the target (including prefix matches)
/// anchors the insertion.
#[test]
fn rightmost_prefix_match_wins() {
    let meta = MetadataBuilder::new("Output", "Power")
        .row_conditions("Vin", "V", "99")
        .column_conditions("Load A,Load B", "Ohm,Ohm", "[1], [2]")
        .calculations("Pout", "W", "CN->Load", "a*b")
        .build();

    let grid = synth_single(&meta);
    assert_eq!(grid.num_cols(), 5);
    // both headers prefix-match "Load"; insertion goes after column 3
    assert_eq!(cell(&grid, 0, 3), "Load B (Ohm)");
    assert_eq!(cell(&grid, 1, 4), "Pout (W)");
}

/// An unmatched connection target is skipped silently; the grid is
/// unchanged and no formulas are recorded.
#[test]
fn unmatched_target_is_skipped() {
    let meta = MetadataBuilder::new("Output", "Power")
        .row_conditions("Vin", "V", "99")
        .column_conditions("Load", "Ohm", "10,50")
        .calculations("Pout", "W", "CN->Nothing", "V*I")
        .build();

    let grid = synth_single(&meta);
    assert_eq!(grid.num_cols(), 4);
    assert!(grid.formulas.is_empty());
}

/// `CV` and `RN` connections are recognized but insert nothing.
#[test]
fn cv_and_rn_connections_are_noops() {
    for connection in ["CV->Load", "RN->Vin"] {
        let meta = MetadataBuilder::new("Output", "Power")
            .row_conditions("Vin", "V", "99")
            .column_conditions("Load", "Ohm", "10,50")
            .calculations("Pout", "W", connection, "V*I")
            .build();

        let grid = synth_single(&meta);
        assert_eq!(grid.num_cols(), 4, "{connection} must not insert a column");
        assert!(grid.formulas.is_empty());
    }
}

/// An empty connection target falls back to the calculation's own name.
#[test]
fn empty_target_defaults_to_calculation_name() {
    let meta = MetadataBuilder::new("Output", "Power")
        .row_conditions("Vin", "V", "99")
        .column_conditions("Load", "Ohm", "10,50")
        .calculations("Load", "W", "CN->", "V*I")
        .build();

    let grid = synth_single(&meta);
    assert_eq!(grid.num_cols(), 5);
    assert_eq!(cell(&grid, 1, 4), "Load (W)");
}

/// Multiple calculations insert left-to-right with a running offset, each
/// landing immediately right of its own match.
#[test]
fn multiple_insertions_track_running_offset() {
    let meta = MetadataBuilder::new("Output", "Power")
        .column_conditions("Alpha,Beta", "", "[1], [2]")
        .calculations("CalcA,CalcB", "", "CN->Alpha, CN->Beta", "x, y")
        .build();

    let grid = synth_single(&meta);
    assert_rectangular(&grid);
    assert_eq!(grid.num_cols(), 4);
    assert_eq!(grid.rows[0], vec!["Alpha", "--", "Beta", "--"]);
    assert_eq!(grid.rows[1], vec!["1", "--", "2", "--"]);

    // No row conditions: there is no label row, so nothing is placed
    assert!(grid.formulas.is_empty());
}

/// With result rows present, the calculation label overwrites the cell in
/// the last header-region row, directly above the first data row.
#[test]
fn label_lands_directly_above_first_data_row() {
    let meta = MetadataBuilder::new("Output", "Efficiency")
        .row_conditions("Vin", "V", "99")
        .column_conditions("Frequency", "Hz", "50,60")
        .results("Vout", "V")
        .calculations("Eff", "%", "CN->Frequency", "Pout/Pin")
        .build();

    let grid = synth_single(&meta);
    assert_eq!(grid.num_rows(), 4);
    assert_eq!(grid.num_cols(), 5);

    // rows: header names, header values, results (label row), data
    assert_eq!(cell(&grid, 2, 4), "Eff (%)");
    assert_eq!(cell(&grid, 3, 4), "Pout/Pin");
    assert_eq!(grid.data_start_row(), 3);
}

/// Calculations also apply to the result-header row when no column
/// conditions exist.
#[test]
fn insertion_matches_result_headers_without_column_conditions() {
    let meta = MetadataBuilder::new("Output", "Ripple")
        .row_conditions("Vin", "V", "99")
        .results("Vout,Iout", "V,A")
        .calculations("Pout", "W", "CN->Vout", "v*i")
        .build();

    let grid = synth_single(&meta);
    assert_eq!(grid.num_cols(), 5);
    assert_eq!(cell(&grid, 0, 2), "Vout (V)");
    // inserted between Vout and Iout; with only one header row that row is
    // also the label row
    assert_eq!(cell(&grid, 0, 3), "Pout (W)");
    assert_eq!(cell(&grid, 0, 4), "Iout (A)");
    assert_eq!(cell(&grid, 1, 3), "v*i");
}
