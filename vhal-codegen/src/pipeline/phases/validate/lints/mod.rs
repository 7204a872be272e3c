//! Built-in lints for model validation.

mod duplicate_enum_entry;
mod duplicate_property;
mod empty_enum;

pub use duplicate_enum_entry::DuplicateEnumEntryLint;
pub use duplicate_property::DuplicatePropertyLint;
pub use empty_enum::EmptyEnumLint;
