//! Pipeline plugin trait.

use eyre::Result;

use super::CompilationContext;

/// A plugin that hooks into the pipeline.
///
/// Plugins receive callbacks before and after each phase runs. Returning an
/// error from a hook aborts the pipeline.
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}
