//! Java renderer for the header pipeline.

use tracing::debug;
use vhalgen_codegen::{
    language::LanguageCodegen,
    pipeline::CompilationContext,
};
use vhalgen_core::GeneratedFile;
use vhalgen_ir::Model;

use crate::{JavaOptions, files::ConstsJava};

/// Java code generator producing the constants class.
pub struct Generator {
    model: Model,
    options: JavaOptions,
}

impl Generator {
    pub fn new(model: Model, options: JavaOptions) -> Self {
        Self { model, options }
    }

    /// Build a generator from a finished pipeline run.
    pub fn from_context(ctx: CompilationContext, options: JavaOptions) -> Self {
        Self::new(ctx.into_model(), options)
    }

    pub fn options(&self) -> &JavaOptions {
        &self.options
    }
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "java"
    }

    fn file_extension(&self) -> &'static str {
        "java"
    }

    fn file_name(&self) -> String {
        ConstsJava::new(&self.model, &self.options).file_name()
    }

    fn render(&self) -> String {
        debug!(
            properties = self.model.properties.len(),
            enums = self.model.enums.len(),
            class = %self.options.class_name,
            "rendering java constants"
        );
        ConstsJava::new(&self.model, &self.options).render()
    }
}
