//! Lint trait for model validation.

use vhalgen_ir::Model;

use crate::pipeline::Diagnostic;

/// A lint that checks the extracted model for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint, in kebab-case.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Check the model and add any diagnostics.
    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>);
}
