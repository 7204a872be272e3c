//! Test utilities for enum-group consumers.
//!
//! This module is only available when the `testing` feature is enabled
//! or during tests.

use indexmap::IndexMap;
use vhalgen_ir::EnumCase;

use crate::{EnumSource, Result};

/// Enum source returning canned `(name, value)` pairs.
///
/// # Example
///
/// ```ignore
/// use vhalgen_source::{EnumSource, testing::FakeEnumSource};
///
/// let source = FakeEnumSource::new()
///     .group("VehicleGear", &[("GEAR_PARK", 0x4), ("GEAR_DRIVE", 0x8)]);
///
/// let groups = source.load_groups().unwrap();
/// assert_eq!(groups[0].cases[1].value, 0x8);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FakeEnumSource {
    groups: IndexMap<String, Vec<EnumCase>>,
}

impl FakeEnumSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a group with its cases.
    pub fn group(mut self, name: &str, cases: &[(&str, i64)]) -> Self {
        self.groups.insert(
            name.to_string(),
            cases
                .iter()
                .map(|(case, value)| EnumCase::new(*case, *value))
                .collect(),
        );
        self
    }
}

impl EnumSource for FakeEnumSource {
    fn enum_groups(&self) -> Result<IndexMap<String, Vec<EnumCase>>> {
        Ok(self.groups.clone())
    }
}
