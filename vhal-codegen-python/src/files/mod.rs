//! Generated Python files.

mod vhal_consts_py;

pub use vhal_consts_py::{VALUE_TYPES, VhalConstsPy};
