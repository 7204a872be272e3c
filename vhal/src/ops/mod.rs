//! Core operations.
//!
//! This module contains the business logic for vhalgen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod extract;
pub mod generate;

use chrono::Datelike;

pub use check::check;
pub use extract::{extract_headers, load_enum_groups, source_label};
pub use generate::{GenerateOptions, generate};

/// Copyright year used when neither the command line nor the manifest sets one.
pub fn default_year() -> i32 {
    chrono::Local::now().year()
}
