//! Parsed condition blocks, results, specifications, and calculations.

/// Reserved token for "not applicable" cells. Placeholder cells are exempt
/// from merging and emphasis.
pub const PLACEHOLDER: &str = "--";

/// A named, unit-tagged axis of variation with an ordered list of values.
///
/// `values[i]` is the ordered list of values condition `i` takes. Units align
/// by index with names; a missing unit is the empty string. The parser
/// guarantees `values.len() == names.len()` for every block it emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConditionBlock {
    pub names: Vec<String>,
    pub units: Vec<String>,
    pub values: Vec<Vec<String>>,
}

impl ConditionBlock {
    /// True when the block declares no conditions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The `"name (unit)"` label for condition `idx`, or just `"name"` when
    /// the unit is absent.
    #[must_use]
    pub fn label(&self, idx: usize) -> Option<String> {
        let name = self.names.get(idx)?;
        let unit = self.units.get(idx).map(String::as_str).unwrap_or("");
        Some(format_label(name, unit))
    }

    /// Values declared for condition `idx` (empty slice when out of range).
    #[must_use]
    pub fn values_for(&self, idx: usize) -> &[String] {
        self.values.get(idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of values across all conditions in this block.
    #[must_use]
    pub fn total_value_count(&self) -> usize {
        self.values.iter().map(Vec::len).sum()
    }
}

/// Format a `"name (unit)"` label; the unit is omitted when empty.
#[must_use]
pub(crate) fn format_label(name: &str, unit: &str) -> String {
    if unit.is_empty() {
        name.to_string()
    } else {
        format!("{name} ({unit})")
    }
}

/// Result metrics: names and units only, no values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultBlock {
    pub names: Vec<String>,
    pub units: Vec<String>,
}

impl ResultBlock {
    /// The `"name (unit)"` label for result `idx`.
    #[must_use]
    pub fn label(&self, idx: usize) -> Option<String> {
        let name = self.names.get(idx)?;
        let unit = self.units.get(idx).map(String::as_str).unwrap_or("");
        Some(format_label(name, unit))
    }
}

/// Specification columns: one simple value column per name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpecificationBlock {
    pub names: Vec<String>,
    pub units: Vec<String>,
    pub values: Vec<String>,
    pub connection: String,
    pub spec_type: String,
}

/// Where a calculation's derived column attaches.
///
/// Only `ColumnName` has insertion behavior today; `ColumnValue` and
/// `RowName` are recognized connection kinds that deliberately do nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// `CN` — insert right of the rightmost column whose header matches the
    /// target name.
    ColumnName,
    /// `CV` — declared but has no insertion behavior.
    ColumnValue,
    /// `RN` — declared but has no insertion behavior.
    RowName,
}

impl ConnectionKind {
    /// Map a connection type code to its kind. Unrecognized codes yield
    /// `None` and the connection is ignored downstream.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "CN" => Some(Self::ColumnName),
            "CV" => Some(Self::ColumnValue),
            "RN" => Some(Self::RowName),
            _ => None,
        }
    }
}

/// A calculation's declared link, parsed from `"TYPE->target"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub kind: ConnectionKind,
    /// Column (or row) name to look up. May be empty, in which case the
    /// calculation's own name is used as the search target.
    pub target: String,
}

/// One derived calculation column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculation {
    pub name: String,
    pub unit: String,
    /// Parsed connection, or `None` when the connection string was absent
    /// or carried an unrecognized type code.
    pub connection: Option<Connection>,
    /// Equation text, carried verbatim into cells. Never evaluated here.
    pub equation: String,
}
