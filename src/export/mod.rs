//! Export surfaces: delimited grids, LaTeX fragments, and the summary
//! index.
//!
//! All exporters are pure string producers; file paths and directory layout
//! are the caller's concern.

pub mod csv;
pub mod latex;
pub mod summary;
