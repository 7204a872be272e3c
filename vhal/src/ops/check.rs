//! Check operation - extraction and lint results without rendering.

use eyre::{Context, Result};
use vhalgen_codegen::pipeline::{ModelSummary, Pipeline};
use vhalgen_ir::Model;

use crate::reports::CheckReport;

/// Execute the check operation.
///
/// Runs the pipeline on the model and collects its lint warnings.
pub fn check(model: Model, label: String) -> Result<CheckReport> {
    let summary = ModelSummary::from_model(&model);
    let ctx = Pipeline::new().run(model).wrap_err("Validation failed")?;

    let warnings = ctx
        .diagnostics
        .iter()
        .map(|diag| match &diag.location {
            Some(loc) => format!("{}\n  --> {}", diag.message, loc),
            None => diag.message.clone(),
        })
        .collect();

    Ok(CheckReport {
        label,
        summary,
        warnings,
    })
}
