//! Compilation context passed through pipeline phases.

use vhalgen_ir::Model;

use super::{ModelSummary, diagnostic::Diagnostic};

/// Context passed through all pipeline phases.
#[derive(Debug)]
pub struct CompilationContext {
    /// The extracted model. Phases read it; none of the built-in phases
    /// rewrite it.
    pub model: Model,
    /// Counts over the model (populated by AnalyzePhase).
    pub summary: Option<ModelSummary>,
    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    pub fn new(model: Model) -> Self {
        Self {
            model,
            summary: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn warning_count(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }

    /// Consume the context, returning the model for rendering.
    pub fn into_model(self) -> Model {
        self.model
    }
}
