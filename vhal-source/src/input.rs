//! Input loading.

use std::path::{Path, PathBuf};

use miette::NamedSource;
use tracing::debug;

use crate::{Error, Result};

/// One input document.
#[derive(Debug, Clone)]
pub struct SourceFile {
    path: PathBuf,
    text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    /// Read a file from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;
        debug!(path = %path.display(), bytes = text.len(), "read input");
        Ok(Self { path, text })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Create a NamedSource for miette error reporting.
    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(self.path.display().to_string(), self.text.clone())
    }
}

/// Ordered set of inputs, scanned as one concatenated text.
///
/// Files are joined back to back with nothing in between, so offsets into
/// [`text`](Self::text) can be mapped back to the file they came from.
#[derive(Debug, Clone, Default)]
pub struct SourceSet {
    files: Vec<SourceFile>,
    text: String,
}

impl SourceSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read every path in order. Any missing file aborts the load.
    pub fn load<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        if paths.is_empty() {
            return Err(Box::new(Error::NoInput));
        }

        let mut set = Self::new();
        for path in paths {
            set.push(SourceFile::open(path)?);
        }
        Ok(set)
    }

    /// Single in-memory input.
    pub fn from_text(name: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        let mut set = Self::new();
        set.push(SourceFile::new(name, text));
        set
    }

    pub fn push(&mut self, file: SourceFile) {
        self.text.push_str(&file.text);
        self.files.push(file);
    }

    /// The concatenated text of all inputs.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Map an offset in the concatenated text to its file and local offset.
    pub fn locate(&self, offset: usize) -> Option<(&SourceFile, usize)> {
        let mut start = 0;
        for file in &self.files {
            let end = start + file.text.len();
            if offset < end {
                return Some((file, offset - start));
            }
            start = end;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_load_concatenates_in_order() {
        let temp = TempDir::new().unwrap();
        let first = temp.path().join("vehicle.h");
        let second = temp.path().join("vehicle-internal.h");
        fs::write(&first, "first\n").unwrap();
        fs::write(&second, "second\n").unwrap();

        let set = SourceSet::load(&[&first, &second]).unwrap();

        assert_eq!(set.text(), "first\nsecond\n");
        assert_eq!(set.files().len(), 2);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.h");

        let err = SourceSet::load(&[&missing]).unwrap_err();

        assert!(matches!(*err, Error::Io { ref path, .. } if path == &missing));
    }

    #[test]
    fn test_load_requires_inputs() {
        let paths: [PathBuf; 0] = [];
        let err = SourceSet::load(&paths).unwrap_err();
        assert!(matches!(*err, Error::NoInput));
    }

    #[test]
    fn test_locate_maps_back_to_file() {
        let mut set = SourceSet::new();
        set.push(SourceFile::new("a.h", "abc"));
        set.push(SourceFile::new("b.h", "defg"));

        let (file, local) = set.locate(1).unwrap();
        assert_eq!(file.path(), Path::new("a.h"));
        assert_eq!(local, 1);

        let (file, local) = set.locate(5).unwrap();
        assert_eq!(file.path(), Path::new("b.h"));
        assert_eq!(local, 2);

        assert!(set.locate(7).is_none());
    }
}
