use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};

use eyre::{Context, Result};

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file name of the generated document (e.g. "VehicleNetworkConsts.java")
    fn file_name(&self) -> String;

    /// Render the file content
    fn render(&self) -> String;

    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf {
        base.join(self.file_name())
    }

    /// Render the file into an arbitrary sink
    fn write_to(&self, sink: &mut dyn Write) -> Result<()> {
        sink.write_all(self.render().as_bytes())?;
        sink.flush()?;
        Ok(())
    }
}

/// Write content to a path, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Where a generated document ends up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Standard output
    Stdout,
    /// A file on disk, replaced if it already exists
    File(PathBuf),
}

impl Destination {
    /// Build a destination from an optional output path.
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => Self::File(path),
            None => Self::Stdout,
        }
    }

    /// Write a fully rendered document.
    ///
    /// The content is written in one go so a failed render never leaves a
    /// partial file behind.
    pub fn write(&self, content: &str) -> Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(content.as_bytes())?;
                stdout.flush()?;
                Ok(())
            }
            Self::File(path) => write_file(path, content),
        }
    }

    /// Human-readable label for reports.
    pub fn label(&self) -> String {
        match self {
            Self::Stdout => "<stdout>".to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}
