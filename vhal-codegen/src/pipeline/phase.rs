//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step between extraction and rendering.
///
/// The runner executes `validate` then `analyze`.
pub trait Phase: Send + Sync {
    /// Name used in logs, diagnostics and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run this phase on the compilation context.
    ///
    /// Problems in the model are recorded as diagnostics; an `Err` aborts
    /// the whole run.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}
