//! Language-agnostic code generation traits.

use eyre::Result;
use tracing::info;
use vhalgen_core::Destination;

/// Trait for language-specific renderers.
///
/// A renderer owns the model it was built from and turns it into exactly one
/// document. Rendering is pure; only [`generate`](Self::generate) touches the
/// outside world, and only after the document is complete.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "java", "python")
    fn language(&self) -> &'static str;

    /// File extension of the generated document (e.g., "java", "py")
    fn file_extension(&self) -> &'static str;

    /// File name of the generated document
    fn file_name(&self) -> String;

    /// Render the complete document
    fn render(&self) -> String;

    /// Preview the generated document without writing it
    fn preview(&self) -> Vec<PreviewFile> {
        vec![PreviewFile {
            path: self.file_name(),
            content: self.render(),
        }]
    }

    /// Render and write the document to `destination`
    fn generate(&self, destination: &Destination) -> Result<GenerateResult> {
        let content = self.render();
        destination.write(&content)?;
        info!(
            language = self.language(),
            destination = %destination.label(),
            bytes = content.len(),
            "generated document"
        );
        Ok(GenerateResult {
            destination: destination.label(),
            lines: content.lines().count(),
        })
    }
}

/// Result of code generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Where the document was written (a path or `<stdout>`)
    pub destination: String,
    /// Number of lines written
    pub lines: usize,
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// File name of the document
    pub path: String,
    /// File content
    pub content: String,
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    struct Fixed;

    impl LanguageCodegen for Fixed {
        fn language(&self) -> &'static str {
            "text"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn file_name(&self) -> String {
            "fixed.txt".into()
        }

        fn render(&self) -> String {
            "one\ntwo\n".into()
        }
    }

    #[test]
    fn test_preview_single_file() {
        let files = Fixed.preview();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "fixed.txt");
        assert_eq!(files[0].content, "one\ntwo\n");
    }

    #[test]
    fn test_generate_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("fixed.txt");
        let result = Fixed
            .generate(&Destination::File(path.clone()))
            .unwrap();

        assert_eq!(result.lines, 2);
        assert_eq!(result.destination, path.display().to_string());
        assert_eq!(std::fs::read_to_string(path).unwrap(), "one\ntwo\n");
    }
}
