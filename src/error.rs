//! Structured error types for gridtex.

/// All errors that can occur during metadata parsing, grid synthesis,
/// and rendering.
#[derive(Debug, thiserror::Error)]
pub enum GridtexError {
    /// A condition field group whose `names`, `units`, and `values`
    /// counts disagree.
    #[error("misaligned condition block `{group}`: {detail}")]
    MisalignedCondition {
        /// Field group the misalignment was found in (e.g. `row_conditions`).
        group: &'static str,
        detail: String,
    },

    /// A grid reached merge detection or rendering with rows of
    /// differing widths.
    #[error("malformed grid `{title}`: row {row} has {found} column(s), expected {expected}")]
    MalformedGrid {
        title: String,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridtexError>;
