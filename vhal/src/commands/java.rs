use std::path::{Path, PathBuf};

use clap::Args;
use eyre::Result;
use vhalgen_codegen_java::JavaOptions;
use vhalgen_manifest::{
    JavaTarget, MACRO_PREFIX_RULE, ManifestFile, is_macro_prefix, java_identifier_error,
    java_package_error,
};

use super::UnwrapOrExit;
use crate::{
    language::Target,
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct JavaCommand {
    /// Vehicle headers, concatenated in order (overrides vhalgen.toml)
    pub headers: Vec<PathBuf>,

    /// Path to vhalgen.toml (defaults to ./vhalgen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Java package of the generated class
    #[arg(long, value_parser = parse_package)]
    pub package: Option<String>,

    /// Name of the generated class
    #[arg(long, value_parser = parse_class)]
    pub class: Option<String>,

    /// Macro prefix that marks a property define
    #[arg(long, value_parser = parse_prefix)]
    pub prefix: Option<String>,

    /// Copyright year (defaults to the current year)
    #[arg(long)]
    pub year: Option<i32>,

    /// Preview generated code without writing it
    #[arg(long)]
    pub dry_run: bool,

    /// Write pipeline snapshots to this directory
    #[arg(long, value_name = "DIR")]
    pub visualize: Option<PathBuf>,
}

impl JavaCommand {
    /// Run the java command
    pub fn run(&self) -> Result<()> {
        let file = ManifestFile::load(self.config.as_deref(), Path::new(".")).unwrap_or_exit();
        let target = &file.manifest().java;

        // CLI arguments take precedence over the manifest
        let inputs = if self.headers.is_empty() {
            target.inputs.clone()
        } else {
            self.headers.clone()
        };
        let prefix = self.prefix.as_ref().or(target.prefix.as_ref());

        let model = ops::extract_headers(&inputs, prefix.map(String::as_str)).unwrap_or_exit();
        let options = self.options(target, &inputs);

        let report = ops::generate(
            model,
            Target::Java(options),
            GenerateOptions {
                output: self.output.clone().or_else(|| target.output.clone()),
                dry_run: self.dry_run,
                visualize: self.visualize.as_deref(),
            },
        )?;
        report.render(&mut TerminalOutput::stderr());

        Ok(())
    }

    fn options(&self, target: &JavaTarget, inputs: &[PathBuf]) -> JavaOptions {
        let year = self.year.or(target.year).unwrap_or_else(ops::default_year);
        let mut options = JavaOptions::new(year).with_source_label(ops::source_label(inputs));
        if let Some(package) = self.package.as_ref().or(target.package.as_ref()) {
            options = options.with_package(package);
        }
        if let Some(class) = self.class.as_ref().or(target.class.as_ref()) {
            options = options.with_class_name(class);
        }
        options
    }
}

// Flags get the same checks as the manifest fields they override.
fn parse_package(value: &str) -> std::result::Result<String, String> {
    match java_package_error(value) {
        Some(reason) => Err(reason.to_string()),
        None => Ok(value.to_string()),
    }
}

fn parse_class(value: &str) -> std::result::Result<String, String> {
    match java_identifier_error(value) {
        Some(reason) => Err(reason.to_string()),
        None => Ok(value.to_string()),
    }
}

fn parse_prefix(value: &str) -> std::result::Result<String, String> {
    if is_macro_prefix(value) {
        Ok(value.to_string())
    } else {
        Err(MACRO_PREFIX_RULE.to_string())
    }
}
