//! Lint for entry names repeated within one enum.

use std::collections::HashSet;

use vhalgen_ir::Model;

use super::super::Lint;
use crate::pipeline::Diagnostic;

/// Lint that warns when an entry or case name repeats inside one enum.
///
/// Repeated values are normal (aliases) and not reported.
pub struct DuplicateEnumEntryLint;

impl Lint for DuplicateEnumEntryLint {
    fn name(&self) -> &'static str {
        "duplicate-enum-entry"
    }

    fn description(&self) -> &'static str {
        "Detect entry names repeated within one enum"
    }

    fn check(&self, model: &Model, diagnostics: &mut Vec<Diagnostic>) {
        for descriptor in &model.enums {
            let names = descriptor.entries.iter().map(|e| e.name.as_str());
            report_repeats("enum", &descriptor.name, names, diagnostics);
        }

        for group in &model.groups {
            let names = group.cases.iter().map(|c| c.name.as_str());
            report_repeats("enum group", &group.name, names, diagnostics);
        }
    }
}

fn report_repeats<'a>(
    kind: &str,
    owner: &str,
    names: impl Iterator<Item = &'a str>,
    diagnostics: &mut Vec<Diagnostic>,
) {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            diagnostics.push(
                Diagnostic::warning(
                    "validate",
                    format!("{} '{}' repeats entry '{}'", kind, owner, name),
                )
                .at(format!("{}.{}", owner, name)),
            );
        }
    }
}
