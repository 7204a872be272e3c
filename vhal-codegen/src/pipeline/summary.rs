use serde::Serialize;
use vhalgen_ir::Model;

/// Counts over an extracted model, reported by `vhalgen check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ModelSummary {
    pub properties: usize,
    pub range_markers: usize,
    pub enums: usize,
    pub enum_entries: usize,
    pub groups: usize,
    pub group_cases: usize,
}

impl ModelSummary {
    pub fn from_model(model: &Model) -> Self {
        Self {
            properties: model.properties.len(),
            range_markers: model.range_marker_count(),
            enums: model.enums.len(),
            enum_entries: model.enums.iter().map(|e| e.entries.len()).sum(),
            groups: model.groups.len(),
            group_cases: model.groups.iter().map(|g| g.cases.len()).sum(),
        }
    }
}
