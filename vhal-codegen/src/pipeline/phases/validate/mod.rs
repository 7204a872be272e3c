//! Validate phase - runs lints on the model.

mod lint;
pub mod lints;

use eyre::Result;
pub use lint::Lint;
pub use lints::{DuplicateEnumEntryLint, DuplicatePropertyLint, EmptyEnumLint};
use tracing::trace;

use crate::pipeline::{CompilationContext, Phase};

/// Phase that checks the model with the built-in lints.
///
/// Lints only warn, so this phase never fails.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(DuplicatePropertyLint),
                Box::new(EmptyEnumLint),
                Box::new(DuplicateEnumEntryLint),
            ],
        }
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check the extracted model and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.model, &mut ctx.diagnostics);
            trace!(
                lint = lint.name(),
                description = lint.description(),
                found = ctx.diagnostics.len() - before,
                "lint finished"
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use vhalgen_ir::{EnumDescriptor, Model, PropertyDescriptor};

    use super::*;

    #[test]
    fn test_clean_model_has_no_warnings() {
        let model = Model {
            properties: vec![PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x1")],
            enums: vec![EnumDescriptor::new("vehicle_a").entry("A_ONE", "1")],
            ..Model::default()
        };
        let mut ctx = CompilationContext::new(model);

        ValidatePhase::new().run(&mut ctx).unwrap();
        assert_eq!(ctx.warning_count(), 0);
    }

    #[test]
    fn test_default_lints_run_in_order() {
        let model = Model {
            properties: vec![
                PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x1"),
                PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x2"),
            ],
            enums: vec![
                EnumDescriptor::new("vehicle_empty"),
                EnumDescriptor::new("vehicle_zone")
                    .entry("VEHICLE_ZONE_ROW_1_LEFT", "0x1")
                    .entry("VEHICLE_ZONE_ROW_1_LEFT", "0x2"),
            ],
            ..Model::default()
        };
        let mut ctx = CompilationContext::new(model);

        ValidatePhase::new().run(&mut ctx).unwrap();
        let locations: Vec<_> = ctx
            .warnings()
            .map(|d| d.location.as_deref().unwrap_or_default())
            .collect();
        assert_eq!(
            locations,
            vec![
                "properties.VEHICLE_PROPERTY_A",
                "enums.vehicle_empty",
                "vehicle_zone.VEHICLE_ZONE_ROW_1_LEFT",
            ]
        );
    }
}
