//! Grid synthesis: shape resolution, per-coordinate builds, and batch
//! collection.

mod builder;
mod calc;
pub mod shape;

use serde::Serialize;
use tracing::{debug, warn};

pub use shape::GridShape;

use crate::error::Result;
use crate::parser::{parse_metadata, TestPlan};
use crate::types::{BasicInfo, ConditionBlock, Grid, TestMetadata};

/// A coordinate whose grid failed to synthesize. The rest of the batch is
/// unaffected.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GridFailure {
    /// The table-condition values of the failed grid.
    pub coordinate: Vec<String>,
    /// Rendered error message.
    pub error: String,
}

/// Every grid synthesized from one metadata record, in row-major coordinate
/// order, plus the context needed to label and summarize them.
#[derive(Debug, Default)]
pub struct TableSet {
    pub grids: Vec<Grid>,
    pub shape: GridShape,
    /// Coordinates that failed to synthesize; never aborts the batch.
    pub failures: Vec<GridFailure>,
    /// Table-condition names and units, kept for condition strings.
    pub table_conditions: ConditionBlock,
    pub basic_info: BasicInfo,
}

/// Parse a metadata record and synthesize every grid it describes.
///
/// # Errors
/// Returns an error when the metadata itself is malformed
/// ([`crate::GridtexError::MisalignedCondition`]). Per-grid faults are
/// collected in [`TableSet::failures`] instead of aborting the batch.
pub fn synthesize(meta: &TestMetadata) -> Result<TableSet> {
    let plan = parse_metadata(meta)?;
    Ok(synthesize_plan(&plan))
}

/// Synthesize every grid described by an already-parsed plan.
#[must_use]
pub fn synthesize_plan(plan: &TestPlan) -> TableSet {
    let shape = GridShape::from_block(&plan.table_conditions);
    let title = format!(
        "{} - {}",
        plan.basic_info.category, plan.basic_info.test_name
    );

    let mut grids = Vec::with_capacity(shape.total_grids());
    let mut failures = Vec::new();

    for coordinate in shape.coordinates() {
        let values = coordinate_values(&plan.table_conditions, &coordinate);
        match builder::build_grid(plan, &title, values.clone()) {
            Ok(grid) => grids.push(grid),
            Err(err) => {
                warn!(coordinate = ?values, %err, "grid synthesis failed");
                failures.push(GridFailure {
                    coordinate: values,
                    error: err.to_string(),
                });
            }
        }
    }

    debug!(
        grids = grids.len(),
        failures = failures.len(),
        dimensions = shape.dimensions(),
        "synthesis complete"
    );

    TableSet {
        grids,
        shape,
        failures,
        table_conditions: plan.table_conditions.clone(),
        basic_info: plan.basic_info.clone(),
    }
}

/// Map a coordinate to the table-condition values it selects, one per axis.
fn coordinate_values(block: &ConditionBlock, coordinate: &[usize]) -> Vec<String> {
    coordinate
        .iter()
        .enumerate()
        .filter_map(|(axis, &idx)| block.values.get(axis).and_then(|v| v.get(idx)).cloned())
        .collect()
}
