//! Generate operation - validation and rendering of one target document.

use std::path::{Path, PathBuf};

use eyre::{Context, Result};
use vhalgen_codegen::pipeline::{Pipeline, SnapshotPlugin};
use vhalgen_core::Destination;
use vhalgen_ir::Model;

use crate::{
    language::Target,
    reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult},
};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Output file; stdout when None.
    pub output: Option<PathBuf>,
    /// Whether to preview without writing.
    pub dry_run: bool,
    /// Directory for pipeline snapshots, if any.
    pub visualize: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the model and renders the target document. The
/// output is only touched once the document is complete.
pub fn generate(model: Model, target: Target, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut pipeline = Pipeline::new();
    if let Some(dir) = opts.visualize {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }
    let ctx = pipeline.run(model).wrap_err("Pipeline failed")?;

    let warnings = ctx.warnings().cloned().collect();

    let generator = target.generator(ctx);
    let result = if opts.dry_run {
        GenerationResult::Preview(
            generator
                .preview()
                .into_iter()
                .map(|f| PreviewFile {
                    path: f.path,
                    content: f.content,
                })
                .collect(),
        )
    } else {
        let destination = Destination::from_path(opts.output);
        let written = generator
            .generate(&destination)
            .wrap_err("Failed to generate code")?;
        GenerationResult::Written(WrittenResult {
            destination: written.destination,
            lines: written.lines,
            to_stdout: destination == Destination::Stdout,
        })
    };

    Ok(GenerateReport {
        language: generator.language(),
        warnings,
        debug_dir: opts.visualize.map(Path::to_path_buf),
        result,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use vhalgen_codegen_java::JavaOptions;
    use vhalgen_codegen_python::PythonOptions;
    use vhalgen_ir::{EnumCase, EnumDescriptor, EnumGroup, PropertyDescriptor};

    use super::*;

    fn java_model() -> Model {
        Model {
            properties: vec![PropertyDescriptor::new("VEHICLE_PROPERTY_INFO_VIN", "(0x00000100)")],
            enums: vec![EnumDescriptor::new("vehicle_gear").entry("VEHICLE_GEAR_PARK", "0x0004")],
            ..Model::default()
        }
    }

    #[test]
    fn test_generate_writes_output() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("VehicleNetworkConsts.java");
        let report = generate(
            java_model(),
            Target::Java(JavaOptions::new(2015)),
            GenerateOptions {
                output: Some(path.clone()),
                dry_run: false,
                visualize: None,
            },
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let vin = "public static final int VEHICLE_PROPERTY_INFO_VIN = (0x00000100);";
        assert!(content.contains(vin));
        match report.result {
            GenerationResult::Written(written) => {
                assert_eq!(written.lines, content.lines().count());
                assert!(!written.to_stdout);
            }
            GenerationResult::Preview(_) => panic!("expected a written result"),
        }
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("vhal_consts_2_0.py");
        let model = Model::from_groups(vec![EnumGroup::new(
            "VehicleGear",
            vec![EnumCase::new("GEAR_PARK", 4)],
        )]);
        let report = generate(
            model,
            Target::Python(PythonOptions::new(2017)),
            GenerateOptions {
                output: Some(path.clone()),
                dry_run: true,
                visualize: None,
            },
        )
        .unwrap();

        assert!(!path.exists());
        match report.result {
            GenerationResult::Preview(files) => {
                assert_eq!(files.len(), 1);
                assert_eq!(files[0].path, "vhal_consts_2_0.py");
                assert!(files[0].content.contains("VEHICLEGEAR_GEAR_PARK = 0x4\n"));
            }
            GenerationResult::Written(_) => panic!("expected a preview"),
        }
    }

    #[test]
    fn test_visualize_writes_phase_snapshots() {
        let dir = TempDir::new().unwrap();
        let debug_dir = dir.path().join("debug");
        let report = generate(
            java_model(),
            Target::Java(JavaOptions::new(2015)),
            GenerateOptions {
                output: None,
                dry_run: true,
                visualize: Some(&debug_dir),
            },
        )
        .unwrap();

        assert!(debug_dir.join("validate.json").is_file());
        assert!(debug_dir.join("analyze.json").is_file());
        assert_eq!(report.debug_dir, Some(debug_dir));
    }

    #[test]
    fn test_warnings_are_reported() {
        let model = Model {
            enums: vec![EnumDescriptor::new("vehicle_empty")],
            ..Model::default()
        };
        let report = generate(
            model,
            Target::Java(JavaOptions::new(2015)),
            GenerateOptions {
                output: None,
                dry_run: true,
                visualize: None,
            },
        )
        .unwrap();

        assert_eq!(report.warnings.len(), 1);
        assert_eq!(report.language, "java");
    }
}
