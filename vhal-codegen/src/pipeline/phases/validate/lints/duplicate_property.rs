//! Lint for properties declared more than once.

use std::collections::HashMap;

use vhalgen_ir::Model;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when two property defines share a name.
///
/// Every occurrence is still rendered; the generated Java then fails to
/// compile on the duplicate field, so the warning points at the source.
pub struct DuplicatePropertyLint;

impl Lint for DuplicatePropertyLint {
    fn name(&self) -> &'static str {
        "duplicate-property"
    }

    fn description(&self) -> &'static str {
        "Detect property names defined more than once"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashMap<&str, &str> = HashMap::new();

        for property in &model.properties {
            match seen.get(property.name.as_str()) {
                Some(first_value) => diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "property '{}' is defined more than once (first value {}, now {})",
                            property.name, first_value, property.value
                        ),
                    )
                    .at(format!("properties.{}", property.name)),
                ),
                None => {
                    seen.insert(&property.name, &property.value);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use vhalgen_ir::PropertyDescriptor;

    use super::*;

    fn model(properties: Vec<PropertyDescriptor>) -> Model {
        Model {
            properties,
            ..Model::default()
        }
    }

    #[test]
    fn test_no_duplicates() {
        let model = model(vec![
            PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x1"),
            PropertyDescriptor::new("VEHICLE_PROPERTY_B", "0x2"),
        ]);
        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&model, &mut diagnostics);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_reported_once_per_repeat() {
        let model = model(vec![
            PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x1"),
            PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x2"),
            PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x3"),
        ]);
        let mut diagnostics = Vec::new();
        DuplicatePropertyLint.check(&model, &mut diagnostics);

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics[0].phase, "validate");
        assert_eq!(
            diagnostics[1].message,
            "property 'VEHICLE_PROPERTY_A' is defined more than once (first value 0x1, now 0x3)"
        );
        assert_eq!(
            diagnostics[0].location.as_deref(),
            Some("properties.VEHICLE_PROPERTY_A")
        );
    }
}
