use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Root schema for vhalgen.toml
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Header pipeline settings
    #[serde(default)]
    pub java: JavaTarget,

    /// Enum-group pipeline settings
    #[serde(default)]
    pub python: PythonTarget,
}

/// `[java]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct JavaTarget {
    /// Headers to read, concatenated in order
    #[serde(default)]
    pub inputs: Vec<PathBuf>,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
    /// Java package of the generated class
    pub package: Option<String>,
    /// Name of the generated class
    pub class: Option<String>,
    /// Macro prefix that marks a property define
    pub prefix: Option<String>,
    /// Copyright year in the license header
    pub year: Option<i32>,
}

/// `[python]` table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PythonTarget {
    /// Pre-parsed enum document
    pub document: Option<PathBuf>,
    /// Output file; stdout when unset
    pub output: Option<PathBuf>,
    /// HAL version as `<major>.<minor>`
    pub hal_version: Option<String>,
    /// Copyright year in the license header
    pub year: Option<i32>,
}

impl Manifest {
    /// Rebase every relative path onto `base`.
    ///
    /// Paths in a manifest are relative to the directory holding it.
    pub fn rebase(&mut self, base: &Path) {
        for input in &mut self.java.inputs {
            rebase_path(input, base);
        }
        if let Some(output) = &mut self.java.output {
            rebase_path(output, base);
        }
        if let Some(document) = &mut self.python.document {
            rebase_path(document, base);
        }
        if let Some(output) = &mut self.python.output {
            rebase_path(output, base);
        }
    }
}

fn rebase_path(path: &mut PathBuf, base: &Path) {
    if path.is_relative() && !base.as_os_str().is_empty() {
        *path = base.join(&*path);
    }
}
