//! Python renderer for the enum-group pipeline.

use tracing::debug;
use vhalgen_codegen::{language::LanguageCodegen, pipeline::CompilationContext};
use vhalgen_core::GeneratedFile;
use vhalgen_ir::Model;

use crate::{PythonOptions, files::VhalConstsPy};

/// Python code generator producing the emulator constants module.
pub struct Generator {
    model: Model,
    options: PythonOptions,
}

impl Generator {
    pub fn new(model: Model, options: PythonOptions) -> Self {
        Self { model, options }
    }

    /// Build a generator from a finished pipeline run.
    pub fn from_context(ctx: CompilationContext, options: PythonOptions) -> Self {
        Self::new(ctx.into_model(), options)
    }

    pub fn options(&self) -> &PythonOptions {
        &self.options
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn file_name(&self) -> String {
        VhalConstsPy::new(&self.model, &self.options).file_name()
    }

    fn render(&self) -> String {
        debug!(
            groups = self.model.groups.len(),
            hal_version = %self.options.hal_version,
            "rendering python constants"
        );
        VhalConstsPy::new(&self.model, &self.options).render()
    }
}
