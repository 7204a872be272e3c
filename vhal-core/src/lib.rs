//! Core utilities and types for vhalgen.
//!
//! This crate provides the string helpers and file output primitives shared
//! by the extractors, the language generators and the `vhalgen` binary.

mod file;
mod utils;

// File operations
pub use file::{Destination, GeneratedFile, write_file};
// String utilities
pub use utils::{constant_prefix, python_hex, strip_outer_parens, to_java_style_name};
