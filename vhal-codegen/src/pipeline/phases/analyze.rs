//! Analyze phase - computes the model summary.

use eyre::Result;

use crate::pipeline::{CompilationContext, ModelSummary, Phase};

/// Phase that counts what extraction produced.
pub struct AnalyzePhase;

impl Phase for AnalyzePhase {
    fn name(&self) -> &'static str {
        "analyze"
    }

    fn description(&self) -> &'static str {
        "Count extracted definitions"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        ctx.summary = Some(ModelSummary::from_model(&ctx.model));
        Ok(())
    }
}
