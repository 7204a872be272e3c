//! Pipeline snapshot plugin for debugging.
//!
//! Captures the model and diagnostics after each phase so they can be
//! inspected with `--visualize`.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{PoisonError, RwLock},
};

use eyre::{Context, Result};
use serde::Serialize;
use tracing::debug;
use vhalgen_ir::Model;

use super::{CompilationContext, Diagnostic, ModelSummary, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,
    pub model: Model,
    /// Available after the "analyze" phase.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<ModelSummary>,
    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// With an output directory configured, each snapshot is also written to
/// `<dir>/<phase>.json` as soon as the phase completes.
pub struct SnapshotPlugin {
    snapshots: RwLock<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    pub fn new() -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: None,
        }
    }

    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: RwLock::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Write all snapshots to `dir`.
    pub fn write_to_dir(&self, dir: impl AsRef<Path>) -> Result<()> {
        let snapshots = self.snapshots.read().unwrap_or_else(PoisonError::into_inner);
        for snapshot in snapshots.iter() {
            write_snapshot(dir.as_ref(), snapshot)?;
        }
        Ok(())
    }
}

fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
    fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
    let path = dir.join(format!("{}.json", snapshot.phase));
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    debug!(path = %path.display(), "wrote pipeline snapshot");
    Ok(())
}

impl Default for SnapshotPlugin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            model: ctx.model.clone(),
            summary: ctx.summary,
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use vhalgen_ir::EnumDescriptor;

    use super::*;
    use crate::pipeline::Pipeline;

    fn model_with_empty_enum() -> Model {
        Model {
            enums: vec![EnumDescriptor::new("vehicle_empty")],
            ..Model::default()
        }
    }

    #[test]
    fn test_snapshot_plugin_creation() {
        let plugin = SnapshotPlugin::new();
        assert!(plugin.snapshots().is_empty());
    }

    #[test]
    fn test_snapshots_written_per_phase() {
        let dir = TempDir::new().unwrap();
        let pipeline =
            Pipeline::new().plugin(SnapshotPlugin::with_output_dir(dir.path().join("debug")));
        pipeline.run(model_with_empty_enum()).unwrap();

        let validate = fs::read_to_string(dir.path().join("debug/validate.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&validate).unwrap();
        assert_eq!(json["phase"], "validate");
        assert_eq!(json["diagnostics"][0]["location"], "enums.vehicle_empty");
        assert!(json.get("summary").is_none());

        let analyze = fs::read_to_string(dir.path().join("debug/analyze.json")).unwrap();
        let json: serde_json::Value = serde_json::from_str(&analyze).unwrap();
        assert_eq!(json["summary"]["enums"], 1);
    }

    #[test]
    fn test_write_to_dir_after_run() {
        let dir = TempDir::new().unwrap();
        let mut ctx = CompilationContext::new(model_with_empty_enum());
        let plugin = SnapshotPlugin::new();
        plugin.on_after_phase("validate", &mut ctx).unwrap();

        assert_eq!(plugin.snapshots().len(), 1);
        plugin.write_to_dir(dir.path()).unwrap();
        assert!(dir.path().join("validate.json").is_file());
    }
}
