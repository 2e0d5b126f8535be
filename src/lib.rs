//! gridtex - table synthesis and merged-cell rendering for engineering
//! test reports
//!
//! Turns a declarative test description (named, unit-tagged conditions that
//! vary across rows, columns, and tables, plus result/specification/
//! calculation columns) into:
//! - one rectangular grid per combination of table-level condition values
//! - LaTeX tabular fragments with horizontal and vertical cell merges and
//!   position-based bold
//! - delimited (CSV/TSV) grid exports and a summary index
//!
//! # Usage
//!
//! ```no_run
//! use gridtex::export::{csv, latex};
//!
//! # fn main() -> gridtex::Result<()> {
//! let text = std::fs::read_to_string("metadata.json")?;
//! let meta: gridtex::TestMetadata = serde_json::from_str(&text)?;
//!
//! let set = gridtex::synthesize(&meta)?;
//! for grid in &set.grids {
//!     println!("{}", csv::write_delimited(grid, csv::Delimiter::Comma));
//!     println!("{}", latex::render_table(grid)?);
//! }
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod export;
pub mod merge;
pub mod parser;
pub mod synth;
pub mod types;

pub use error::{GridtexError, Result};
pub use synth::{synthesize, synthesize_plan, GridFailure, TableSet};

pub use types::*;

/// Get the library version
#[must_use]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
