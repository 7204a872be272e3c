//! Generate command report data structures.

use std::path::PathBuf;

use vhalgen_codegen::pipeline::Diagnostic;

use super::output::{Output, Report};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Language of the generated document.
    pub language: &'static str,
    /// Warning diagnostics from the pipeline.
    pub warnings: Vec<Diagnostic>,
    /// Path to debug snapshots, if visualization was enabled.
    pub debug_dir: Option<PathBuf>,
    /// Generation result (document written or preview).
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// The document was written.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
}

/// Result when the document was written.
#[derive(Debug)]
pub struct WrittenResult {
    /// Output path or `<stdout>`.
    pub destination: String,
    /// Number of lines written.
    pub lines: usize,
    /// Whether the document went to stdout.
    pub to_stdout: bool,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            match &warning.location {
                Some(loc) => out.warning(&format!("{}\n  --> {}", warning.message, loc)),
                None => out.warning(&warning.message),
            }
        }

        if let Some(debug_dir) = &self.debug_dir {
            let dir = debug_dir.display().to_string();
            out.key_value_indented("Pipeline snapshots written to", &dir);
        }

        match &self.result {
            GenerationResult::Written(written) => {
                // The document itself is on stdout; stay quiet there.
                if !written.to_stdout {
                    out.success(&format!(
                        "Generated {} ({} lines of {})",
                        written.destination, written.lines, self.language
                    ));
                }
            }
            GenerationResult::Preview(files) => {
                for file in files {
                    out.divider(&file.path);
                    out.preformatted(&file.content);
                }
            }
        }
    }
}
