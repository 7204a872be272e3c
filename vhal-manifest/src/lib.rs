// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! `vhalgen.toml` parsing.
//!
//! The manifest is optional. Every field has a default, and every field can be
//! overridden from the command line by the `vhalgen` binary.
//!
//! ```toml
//! [java]
//! inputs = ["hardware/vehicle.h", "hardware/vehicle-internal.h"]
//! output = "src/com/android/car/vehiclenetwork/VehicleNetworkConsts.java"
//! package = "com.android.car.vehiclenetwork"
//!
//! [python]
//! document = "types.json"
//! hal_version = "2.0"
//! ```

mod error;
mod file;
mod manifest;
mod parse;
mod validate;

pub use error::{Error, Result};
pub use file::{MANIFEST_FILE_NAME, ManifestFile};
pub use manifest::{JavaTarget, Manifest, PythonTarget};
pub use parse::parse_manifest;
pub use validate::{MACRO_PREFIX_RULE, is_macro_prefix, java_identifier_error, java_package_error};
