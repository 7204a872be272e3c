//! Validation pipeline run between extraction and rendering.
//!
//! A [`Pipeline`] runs phases over a [`CompilationContext`] holding the
//! extracted model:
//!
//! - Explicit phase boundaries (validate → analyze)
//! - Plugin hooks before and after each phase
//! - Unified diagnostics collection
//!
//! # Example
//!
//! ```ignore
//! use vhalgen_codegen::pipeline::Pipeline;
//!
//! let ctx = Pipeline::new().run(model)?;
//! for diag in ctx.warnings() {
//!     eprintln!("warning: {}", diag.message);
//! }
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;
mod summary;

pub use context::CompilationContext;
pub use diagnostic::Diagnostic;
pub use phase::Phase;
pub use plugin::Plugin;
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
pub use summary::ModelSummary;
