//! Extraction of vehicle HAL definitions.
//!
//! - [`header`] - pattern-based extraction of annotated properties and enums
//!   from C headers
//! - [`idl`] - the [`EnumSource`] capability that yields resolved enum groups,
//!   and its JSON-backed implementation
//! - [`SourceSet`] - input loading and concatenation
//! - [`testing`] - canned enum sources (feature-gated)

mod error;
pub mod header;
pub mod idl;
mod input;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use error::{Error, Result};
pub use header::{HeaderExtractor, PROPERTY_PREFIX};
pub use idl::{EnumSource, JsonDocument, open_enum_source};
pub use input::{SourceFile, SourceSet};
