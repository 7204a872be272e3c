use std::path::{Path, PathBuf};

use clap::Args;
use eyre::{Context, Result};
use vhalgen_codegen_python::{HalVersion, PythonOptions};
use vhalgen_manifest::{ManifestFile, PythonTarget};

use super::UnwrapOrExit;
use crate::{
    language::Target,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct PythonCommand {
    /// Enum document exported from the IDL parser (overrides vhalgen.toml)
    pub document: Option<PathBuf>,

    /// Path to vhalgen.toml (defaults to ./vhalgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// HAL version as <major>.<minor>
    #[arg(long)]
    pub hal_version: Option<HalVersion>,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Preview generated code without writing it
    #[arg(long)]
    pub dry_run: bool,
}

impl PythonCommand {
    /// Run the python command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::load(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        let target = &file.manifest().python;

        let document = self.document.as_ref().or(target.document.as_ref());
        let model = ops::load_enum_groups(document.map(PathBuf::as_path)).unwrap_or_exit();
        let options = self.options(target)?;

        let report = ops::generate(
            model,
            Target::Python(options),
            GenerateOptions {
                output: self.output.clone().or_else(|| target.output.clone()),
                dry_run: self.dry_run,
                visualize: None,
            },
        )?;
        report.render(&mut TerminalOutput::stderr());

        Ok(())
    }

    fn options(&self, target: &PythonTarget) -> Result<PythonOptions> {
        let hal_version = match (self.hal_version, &target.hal_version) {
            (Some(version), _) => version,
            (None, Some(text)) => text
                .parse()
                .wrap_err_with(|| format!("invalid hal_version '{}' in vhalgen.toml", text))?,
            (None, None) => HalVersion::default(),
        };
        let year = self.year.or(target.year).unwrap_or_else(ops::default_year);

        Ok(PythonOptions::new(year).with_hal_version(hal_version))
    }
}
