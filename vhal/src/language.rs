//! Target dispatch.
//!
//! Maps each pipeline to the generator that renders its document.

use vhalgen_codegen::{language::LanguageCodegen, pipeline::CompilationContext};
use vhalgen_codegen_java::{Generator as JavaGenerator, JavaOptions};
use vhalgen_codegen_python::{Generator as PythonGenerator, PythonOptions};

/// A target document together with its render options.
#[derive(Debug, Clone)]
pub enum Target {
    Java(JavaOptions),
    Python(PythonOptions),
}

impl Target {
    /// Create the generator for a finished pipeline run.
    pub fn generator(self, ctx: CompilationContext) -> Box<dyn LanguageCodegen> {
        match self {
            Self::Java(options) => Box::new(JavaGenerator::from_context(ctx, options)),
            Self::Python(options) => Box::new(PythonGenerator::from_context(ctx, options)),
        }
    }
}
