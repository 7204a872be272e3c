//! Python constants generator for vehicle HAL enum groups.
//!
//! Renders the enum groups of a HAL types document into
//! `vhal_consts_<major>_<minor>.py`, the constants module used by the vehicle
//! HAL emulator: one `<GROUP>_<CASE> = <hex>` assignment per case, followed by
//! the `vhal_types_<major>_<minor>` container of value-type constants.

mod generator;
mod options;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use options::{HalVersion, ParseHalVersionError, PythonOptions};
pub use vhalgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
