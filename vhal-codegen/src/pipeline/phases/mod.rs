//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the model and collects diagnostics
//! - [`AnalyzePhase`] - computes the model summary

mod analyze;
mod validate;

pub use analyze::AnalyzePhase;
pub use validate::{
    DuplicateEnumEntryLint, DuplicatePropertyLint, EmptyEnumLint, Lint, ValidatePhase,
};
