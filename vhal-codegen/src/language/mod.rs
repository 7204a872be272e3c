//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language renderers
//! - [`GenerateResult`] - Result of writing a generated document
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{GenerateResult, LanguageCodegen, PreviewFile};
