//! Test fixtures for building metadata records in memory.
//!
//! This module provides a builder for creating metadata records
//! programmatically, useful for testing synthesis with known inputs.
//!
//! # Example
//!
//! ```rust
//! use fixtures::MetadataBuilder;
//!
//! let meta = MetadataBuilder::new("Input", "Line Regulation")
//!     .row_conditions("Voltage,Current", "V,A", "99,2.3")
//!     .column_conditions("Load", "Ohm", "10,50")
//!     .build();
//!
//! let set = gridtex::synthesize(&meta).unwrap();
//! ```
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use gridtex::TestMetadata;

/// Builder for [`TestMetadata`] records.
#[derive(Debug, Default)]
pub struct MetadataBuilder {
    meta: TestMetadata,
}

impl MetadataBuilder {
    pub fn new(category: &str, test_name: &str) -> Self {
        let mut meta = TestMetadata::default();
        meta.basic_info.category = category.to_string();
        meta.basic_info.test_name = test_name.to_string();
        Self { meta }
    }

    pub fn row_conditions(mut self, names: &str, units: &str, values: &str) -> Self {
        self.meta.row_conditions.names = names.to_string();
        self.meta.row_conditions.units = units.to_string();
        self.meta.row_conditions.values = values.to_string();
        self
    }

    pub fn column_conditions(mut self, names: &str, units: &str, values: &str) -> Self {
        self.meta.column_conditions.names = names.to_string();
        self.meta.column_conditions.units = units.to_string();
        self.meta.column_conditions.values = values.to_string();
        self
    }

    pub fn table_conditions(mut self, names: &str, units: &str, values: &str) -> Self {
        self.meta.table_conditions.names = names.to_string();
        self.meta.table_conditions.units = units.to_string();
        self.meta.table_conditions.values = values.to_string();
        self
    }

    pub fn results(mut self, names: &str, units: &str) -> Self {
        self.meta.results.names = names.to_string();
        self.meta.results.units = units.to_string();
        self
    }

    pub fn specifications(mut self, names: &str, units: &str, values: &str) -> Self {
        self.meta.specifications.names = names.to_string();
        self.meta.specifications.units = units.to_string();
        self.meta.specifications.values = values.to_string();
        self
    }

    pub fn calculations(
        mut self,
        names: &str,
        units: &str,
        connection: &str,
        equation: &str,
    ) -> Self {
        self.meta.calculations.names = names.to_string();
        self.meta.calculations.units = units.to_string();
        self.meta.calculations.connection = connection.to_string();
        self.meta.calculations.equation = equation.to_string();
        self
    }

    pub fn build(self) -> TestMetadata {
        self.meta
    }
}
