//! Intermediate representation types for vhalgen.
//!
//! These types hold the facts extracted from the generator inputs and are the
//! single source of truth for every language renderer.
//!
//! # Architecture
//!
//! ```text
//! vehicle.h / types.hal → vhal-source (extraction) → vhal-ir (model) → codegen
//! ```
//!
//! All descriptors are plain values: they own their strings, hold no
//! back-references, and are never mutated once extraction has finished.

mod enums;
mod model;
mod property;

pub use enums::{EnumCase, EnumDescriptor, EnumEntry, EnumGroup};
pub use model::Model;
pub use property::{AnnotationKey, PropertyDescriptor};
