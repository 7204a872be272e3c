//! Enum groups from IDL documents.
//!
//! Parsing and value resolution of `.hal` files belongs to an external
//! grammar parser. The generator only depends on the [`EnumSource`]
//! capability, so any producer of resolved enum groups can be plugged in.

mod json;

use std::path::Path;

use indexmap::IndexMap;
use vhalgen_ir::{EnumCase, EnumGroup};

pub use json::JsonDocument;

use crate::{Error, Result};

/// A parsed IDL document exposing its enum groups.
pub trait EnumSource {
    /// Enum groups by name in document order, every case value resolved.
    fn enum_groups(&self) -> Result<IndexMap<String, Vec<EnumCase>>>;

    /// The enum groups as model values, in document order.
    fn load_groups(&self) -> Result<Vec<EnumGroup>> {
        Ok(self
            .enum_groups()?
            .into_iter()
            .map(|(name, cases)| EnumGroup::new(name, cases))
            .collect())
    }
}

/// Open the enum source for a document path.
///
/// `.hal` files need the HIDL grammar parser, which is not part of this
/// workspace; every other path is read as a pre-parsed JSON document.
pub fn open_enum_source(path: impl AsRef<Path>) -> Result<Box<dyn EnumSource>> {
    let path = path.as_ref();
    if path.extension().is_some_and(|ext| ext == "hal") {
        return Err(Box::new(Error::ParserUnavailable {
            path: path.to_path_buf(),
        }));
    }
    Ok(Box::new(JsonDocument::open(path)?))
}
