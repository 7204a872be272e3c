use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for extraction (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(
        code(vhalgen::missing_input),
        help("check that the file exists; inputs are read in the order they are given")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no input files given")]
    #[diagnostic(
        code(vhalgen::no_input),
        help("pass the inputs on the command line or list them in vhalgen.toml")
    )]
    NoInput,

    #[error("annotation '{key}' on '{property}' has no value")]
    #[diagnostic(
        code(vhalgen::malformed_annotation),
        help("write the value right after the key, e.g. '{key} VALUE'")
    )]
    MalformedAnnotation {
        #[source_code]
        src: NamedSource<String>,
        #[label("expected a value after this key")]
        span: SourceSpan,
        key: String,
        property: String,
    },

    #[error("'{path}' needs the HIDL grammar parser, which is not built into vhalgen")]
    #[diagnostic(
        code(vhalgen::parser_unavailable),
        help(
            "run the HIDL parser (tools/hidl_parser, requires the 'ply' Python package), \
             export its enum groups as a JSON document and pass that document instead"
        )
    )]
    ParserUnavailable { path: PathBuf },

    #[error("failed to parse enum document '{path}'")]
    #[diagnostic(code(vhalgen::document_error))]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid value '{value}' for case '{case}' of enum group '{group}'")]
    #[diagnostic(
        code(vhalgen::invalid_case_value),
        help("use an integer, or a string holding a decimal or 0x-prefixed hex number")
    )]
    InvalidCaseValue {
        group: String,
        case: String,
        value: String,
    },

    #[error("enum group '{group}' appears more than once in '{path}'")]
    #[diagnostic(
        code(vhalgen::duplicate_group),
        help("each enum group name must be unique within a document")
    )]
    DuplicateGroup { path: PathBuf, group: String },

    #[error("invalid property prefix '{prefix}'")]
    #[diagnostic(code(vhalgen::invalid_prefix))]
    Pattern {
        prefix: String,
        #[source]
        source: regex::Error,
    },
}

impl Error {
    /// Create an I/O error for an input path
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Box<Self> {
        Box::new(Error::Io {
            path: path.into(),
            source,
        })
    }

    /// Create a document parse error
    pub fn document(path: impl Into<PathBuf>, source: serde_json::Error) -> Box<Self> {
        Box::new(Error::Document {
            path: path.into(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = Error::io(
            "hardware/vehicle.h",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        assert_eq!(err.to_string(), "failed to read 'hardware/vehicle.h'");
    }

    #[test]
    fn test_parser_unavailable_has_help() {
        let err = Error::ParserUnavailable {
            path: PathBuf::from("types.hal"),
        };
        let help = err.help().map(|h| h.to_string()).unwrap_or_default();
        assert!(help.contains("JSON"));
    }
}
