//! Lint for enums without entries.

use vhalgen_ir::Model;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns about enums with no `name = value` entries.
///
/// Such enums still render, with only the default case in `enumToString`.
pub struct EmptyEnumLint;

impl Lint for EmptyEnumLint {
    fn name(&self) -> &'static str {
        "empty-enum"
    }

    fn description(&self) -> &'static str {
        "Detect enums with no entries"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for descriptor in model.enums.iter().filter(|e| e.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("enum '{}' has no entries", descriptor.name),
                )
                .at(format!("enums.{}", descriptor.name)),
            );
        }

        for group in model.groups.iter().filter(|g| g.cases.is_empty()) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("enum group '{}' has no cases", group.name),
                )
                .at(format!("groups.{}", group.name)),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use vhalgen_ir::{EnumCase, EnumDescriptor, EnumGroup};

    use super::*;

    #[test]
    fn test_empty_enum() {
        let model = Model {
            enums: vec![
                EnumDescriptor::new("vehicle_full").entry("A", "1"),
                EnumDescriptor::new("vehicle_empty"),
            ],
            ..Model::default()
        };
        let mut diagnostics = Vec::new();
        EmptyEnumLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].message, "enum 'vehicle_empty' has no entries");
    }

    #[test]
    fn test_empty_group() {
        let model = Model::from_groups(vec![
            EnumGroup::new("VehicleArea", vec![]),
            EnumGroup::new("VehicleGear", vec![EnumCase::new("GEAR_PARK", 4)]),
        ]);
        let mut diagnostics = Vec::new();
        EmptyEnumLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].location.as_deref(), Some("groups.VehicleArea"));
    }
}
