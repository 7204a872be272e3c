//! Check command report data structures.

use vhalgen_codegen::pipeline::ModelSummary;

use super::output::{Output, Report};

/// Report data from header validation.
#[derive(Debug)]
pub struct CheckReport {
    /// The checked inputs, for display.
    pub label: String,
    /// Counts of extracted descriptors.
    pub summary: ModelSummary,
    /// Lint warnings, with their model location when known.
    pub warnings: Vec<String>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }

        if !self.warnings.is_empty() {
            out.newline();
        }

        out.success(&format!("{} is valid", self.label));
        out.newline();
        out.key_value_indented(
            "properties",
            &format!(
                "{} ({} range markers)",
                self.summary.properties, self.summary.range_markers
            ),
        );
        out.key_value_indented(
            "enums",
            &format!(
                "{} ({} entries)",
                self.summary.enums, self.summary.enum_entries
            ),
        );
    }
}
