//! Raw metadata record as produced by the form editor.
//!
//! Every field is free text; the encoding rules (comma-separated lists,
//! bracketed multi-dimensional value lists) are applied by the
//! [`parser`](crate::parser) module, not here.

use serde::{Deserialize, Serialize};

/// Basic test identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BasicInfo {
    /// Test category (e.g. `Input`, `Output`).
    pub category: String,
    /// Human-readable test name.
    pub test_name: String,
}

/// Raw text fields for one condition group (row, column, or table scope).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConditionFields {
    /// Comma-separated condition names.
    pub names: String,
    /// Comma-separated units, aligned by index with `names`.
    pub units: String,
    /// Condition values; one bracketed list per name, or a plain
    /// comma-separated list (see the parser for the exact rules).
    pub values: String,
}

/// Raw text fields for the results group. Results carry no values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultFields {
    pub names: String,
    pub units: String,
}

/// Raw text fields for the specifications group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SpecificationFields {
    pub names: String,
    pub units: String,
    pub values: String,
    pub connection: String,
    #[serde(rename = "type")]
    pub spec_type: String,
}

/// Raw text fields for the calculations group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculationFields {
    pub names: String,
    pub units: String,
    /// Comma-separated connection strings of the form `TYPE->target`,
    /// aligned by index with `names`.
    pub connection: String,
    /// Comma-separated equation texts, aligned by index with `names`.
    pub equation: String,
}

/// One complete metadata record, expressed as nested key/value text fields.
///
/// This is the external input shape of the engine; it deserializes from the
/// JSON the form editor persists.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TestMetadata {
    pub basic_info: BasicInfo,
    pub row_conditions: ConditionFields,
    pub column_conditions: ConditionFields,
    pub table_conditions: ConditionFields,
    pub results: ResultFields,
    pub specifications: SpecificationFields,
    pub calculations: CalculationFields,
}
