//! Data types for the table-synthesis engine.

mod condition;
mod grid;
mod metadata;

pub use condition::*;
pub use grid::*;
pub use metadata::*;
