use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Default manifest file name, looked up in the working directory.
pub const MANIFEST_FILE_NAME: &str = "vhalgen.toml";

/// A loaded manifest along with where it came from.
#[derive(Debug, Clone, Default)]
pub struct ManifestFile {
    path: Option<PathBuf>,
    manifest: Manifest,
}

impl ManifestFile {
    /// Open and parse a manifest. Relative paths inside it are rebased onto
    /// the manifest's directory.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        let mut manifest = Manifest::from_str_with_filename(&content, &path.display().to_string())?;
        if let Some(dir) = path.parent() {
            manifest.rebase(dir);
        }

        Ok(Self {
            path: Some(path),
            manifest,
        })
    }

    /// Load the manifest for a run.
    ///
    /// An explicit path must exist. Without one, `vhalgen.toml` in `dir` is
    /// used when present and the defaults otherwise.
    pub fn load(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::open(path);
        }

        let default = dir.join(MANIFEST_FILE_NAME);
        if default.is_file() {
            Self::open(default)
        } else {
            Ok(Self::default())
        }
    }

    /// The manifest path, or None when running on defaults.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }
}
