//! Java constants generator for vehicle HAL headers.
//!
//! Renders the properties and enums extracted from `vehicle.h` into a single
//! Java class (`VehicleNetworkConsts` by default) holding:
//!
//! - one `public static final int` per property
//! - the dispatch methods `getVehicleValueType`, `getVehiclePropertyName`,
//!   `getVehicleChangeMode` and `getVehicleAccess`
//! - one nested class per enum, with its constants and `enumToString`
//!
//! ```ignore
//! use vhalgen_codegen_java::{Generator, JavaOptions, LanguageCodegen};
//!
//! let generator = Generator::new(model, JavaOptions::new(2015));
//! let source = generator.render();
//! ```

mod dispatch;
mod generator;
mod options;

pub mod ast;
pub mod files;

pub use generator::Generator;
pub use options::JavaOptions;
pub use vhalgen_codegen::language::{GenerateResult, LanguageCodegen, PreviewFile};
