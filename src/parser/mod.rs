//! Turns raw metadata text fields into structured condition blocks.
//!
//! This is the only place the free-text encodings are interpreted. Index
//! misalignment between `names`, `units`, and `values` is detected here and
//! reported as [`GridtexError::MisalignedCondition`] instead of being carried
//! silently into synthesis.

mod values;

use tracing::debug;

use crate::error::{GridtexError, Result};
use crate::types::{
    BasicInfo, Calculation, CalculationFields, ConditionBlock, ConditionFields, Connection,
    ConnectionKind, ResultBlock, ResultFields, SpecificationBlock, SpecificationFields,
    TestMetadata,
};
use values::{split_list, split_value_lists};

/// Structured view of one metadata record, ready for synthesis.
#[derive(Debug, Clone, Default)]
pub struct TestPlan {
    pub basic_info: BasicInfo,
    pub row_conditions: ConditionBlock,
    pub column_conditions: ConditionBlock,
    pub table_conditions: ConditionBlock,
    pub results: ResultBlock,
    pub specifications: SpecificationBlock,
    pub calculations: Vec<Calculation>,
}

/// Parse a full metadata record into a [`TestPlan`].
///
/// # Errors
/// Returns [`GridtexError::MisalignedCondition`] when a field group's name,
/// unit, and value counts cannot be reconciled.
pub fn parse_metadata(meta: &TestMetadata) -> Result<TestPlan> {
    let plan = TestPlan {
        basic_info: meta.basic_info.clone(),
        row_conditions: parse_condition_block("row_conditions", &meta.row_conditions)?,
        column_conditions: parse_condition_block("column_conditions", &meta.column_conditions)?,
        table_conditions: parse_condition_block("table_conditions", &meta.table_conditions)?,
        results: parse_results(&meta.results)?,
        specifications: parse_specifications(&meta.specifications),
        calculations: parse_calculations(&meta.calculations)?,
    };
    debug!(
        row = plan.row_conditions.names.len(),
        column = plan.column_conditions.names.len(),
        table = plan.table_conditions.names.len(),
        results = plan.results.names.len(),
        calculations = plan.calculations.len(),
        "parsed metadata"
    );
    Ok(plan)
}

/// Parse one condition group, aligning values to names.
///
/// A bracketed values field declares one list per name. A plain
/// comma-separated field is either the single name's value list, or — when
/// the entry count equals the name count — one scalar value per name.
fn parse_condition_block(group: &'static str, fields: &ConditionFields) -> Result<ConditionBlock> {
    let names = split_list(&fields.names);
    let units = aligned_units(group, &fields.units, names.len())?;
    let lists = split_value_lists(&fields.values);

    if names.is_empty() {
        if !lists.is_empty() {
            return Err(GridtexError::MisalignedCondition {
                group,
                detail: format!("{} value list(s) declared without names", lists.len()),
            });
        }
        return Ok(ConditionBlock::default());
    }

    let values = if lists.len() == names.len() {
        lists
    } else if lists.len() == 1
        && lists.first().map(Vec::len) == Some(names.len())
        && names.len() > 1
    {
        // One scalar per name, e.g. names "Voltage,Current" with
        // values "99,2.3".
        lists
            .into_iter()
            .flatten()
            .map(|value| vec![value])
            .collect()
    } else {
        return Err(GridtexError::MisalignedCondition {
            group,
            detail: format!(
                "{} name(s) but {} value list(s)",
                names.len(),
                lists.len()
            ),
        });
    };

    Ok(ConditionBlock { names, units, values })
}

fn parse_results(fields: &ResultFields) -> Result<ResultBlock> {
    let names = split_list(&fields.names);
    let units = aligned_units("results", &fields.units, names.len())?;
    Ok(ResultBlock { names, units })
}

fn parse_specifications(fields: &SpecificationFields) -> SpecificationBlock {
    SpecificationBlock {
        names: split_list(&fields.names),
        units: split_list(&fields.units),
        values: split_list(&fields.values),
        connection: fields.connection.trim().to_string(),
        spec_type: fields.spec_type.trim().to_string(),
    }
}

fn parse_calculations(fields: &CalculationFields) -> Result<Vec<Calculation>> {
    let names = split_list(&fields.names);
    let units = aligned_units("calculations", &fields.units, names.len())?;
    let connections = split_list(&fields.connection);
    if connections.len() > names.len() {
        return Err(GridtexError::MisalignedCondition {
            group: "calculations",
            detail: format!(
                "{} connection(s) for {} name(s)",
                connections.len(),
                names.len()
            ),
        });
    }
    let equations = split_list(&fields.equation);

    Ok(names
        .into_iter()
        .enumerate()
        .map(|(idx, name)| Calculation {
            name,
            unit: units.get(idx).cloned().unwrap_or_default(),
            connection: connections.get(idx).and_then(|c| parse_connection(c)),
            equation: equations.get(idx).cloned().unwrap_or_default(),
        })
        .collect())
}

/// Pad units to the name count; more units than names is a misalignment.
fn aligned_units(group: &'static str, raw: &str, name_count: usize) -> Result<Vec<String>> {
    let mut units = split_list(raw);
    if units.len() > name_count {
        return Err(GridtexError::MisalignedCondition {
            group,
            detail: format!("{} unit(s) for {} name(s)", units.len(), name_count),
        });
    }
    units.resize(name_count, String::new());
    Ok(units)
}

/// Parse a `"TYPE->target"` connection string. Missing arrow or an
/// unrecognized type code yields `None` (the connection is ignored).
fn parse_connection(text: &str) -> Option<Connection> {
    let (code, target) = text.split_once("->")?;
    let kind = ConnectionKind::from_code(code.trim())?;
    Some(Connection {
        kind,
        target: target.trim().to_string(),
    })
}
