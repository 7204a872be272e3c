use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use vhalgen_manifest::ManifestFile;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Vehicle headers, concatenated in order (overrides vhalgen.toml)
    pub headers: Vec<PathBuf>,

    /// Path to vhalgen.toml (defaults to ./vhalgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::load(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        let target = &file.manifest().java;

        let inputs = if self.headers.is_empty() {
            target.inputs.clone()
        } else {
            self.headers.clone()
        };

        let model = ops::extract_headers(&inputs, target.prefix.as_deref()).unwrap_or_exit();
        let report = ops::check(model, ops::source_label(&inputs))?;
        report.render(&mut TerminalOutput::new());

        Ok(())
    }
}
