//! Pipeline orchestrator.

use eyre::Result;
use tracing::debug;
use vhalgen_ir::Model;

use super::{
    CompilationContext, Phase, Plugin,
    phases::{AnalyzePhase, ValidatePhase},
};

/// The pipeline orchestrator.
///
/// Runs the built-in phases (validate, analyze), calling plugin hooks before
/// and after each one.
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".vhalgen/debug"));
/// let ctx = pipeline.run(model)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            plugins: Vec::new(),
        }
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Run the pipeline on an extracted model.
    ///
    /// # Errors
    ///
    /// Returns an error if a plugin hook fails, e.g. when a snapshot cannot
    /// be written. Lint findings are warnings and never fail the run.
    pub fn run(&self, model: Model) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(model);

        self.run_phase(&self.validate, &mut ctx)?;
        self.run_phase(&AnalyzePhase, &mut ctx)?;

        Ok(ctx)
    }

    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();
        debug!(phase = phase_name, description = phase.description(), "running phase");

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            debug!(phase = phase_name, plugin = plugin.name(), "after-phase hook");
            plugin.on_after_phase(phase_name, ctx)?;
        }

        debug!(
            phase = phase_name,
            diagnostics = ctx.diagnostics.len(),
            "phase finished"
        );
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use vhalgen_ir::{EnumDescriptor, PropertyDescriptor};

    use super::*;

    /// Records every hook call as "before:<phase>" or "after:<phase>".
    struct RecordingPlugin {
        calls: Arc<Mutex<Vec<String>>>,
    }

    impl Plugin for RecordingPlugin {
        fn name(&self) -> &'static str {
            "recording"
        }

        fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.calls.lock().unwrap().push(format!("before:{}", phase));
            Ok(())
        }

        fn on_after_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.calls.lock().unwrap().push(format!("after:{}", phase));
            Ok(())
        }
    }

    struct FailingPlugin;

    impl Plugin for FailingPlugin {
        fn name(&self) -> &'static str {
            "failing"
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            Err(eyre::eyre!("disk full"))
        }
    }

    fn sample_model() -> Model {
        Model {
            properties: vec![PropertyDescriptor::new("VEHICLE_PROPERTY_A", "0x1")],
            enums: vec![EnumDescriptor::new("vehicle_a").entry("A_ONE", "1")],
            groups: Vec::new(),
        }
    }

    #[test]
    fn test_pipeline_computes_summary() {
        let ctx = Pipeline::new().run(sample_model()).unwrap();
        let summary = ctx.summary.unwrap();
        assert_eq!(summary.properties, 1);
        assert_eq!(summary.enum_entries, 1);
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_pipeline_plugin_hooks_in_phase_order() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let pipeline = Pipeline::new().plugin(RecordingPlugin {
            calls: calls.clone(),
        });
        pipeline.run(sample_model()).unwrap();

        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                "before:validate",
                "after:validate",
                "before:analyze",
                "after:analyze"
            ]
        );
    }

    #[test]
    fn test_warnings_do_not_abort() {
        let model = Model {
            enums: vec![EnumDescriptor::new("vehicle_empty")],
            ..Model::default()
        };
        let ctx = Pipeline::new().run(model).unwrap();
        assert_eq!(ctx.warning_count(), 1);
        assert!(ctx.summary.is_some());
    }

    #[test]
    fn test_plugin_failure_aborts() {
        let err = Pipeline::new()
            .plugin(FailingPlugin)
            .run(Model::new())
            .unwrap_err();
        assert_eq!(err.to_string(), "disk full");
    }
}
