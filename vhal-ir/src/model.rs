//! The extracted model handed from extraction to rendering.

use serde::{Deserialize, Serialize};

use crate::{EnumDescriptor, EnumGroup, PropertyDescriptor};

/// Definitions discovered by one extraction run, each list in discovery order.
///
/// Header extraction fills `properties` and `enums`; an IDL enum source fills
/// `groups`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Model {
    pub properties: Vec<PropertyDescriptor>,
    pub enums: Vec<EnumDescriptor>,
    pub groups: Vec<EnumGroup>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Model holding only enum groups.
    pub fn from_groups(groups: Vec<EnumGroup>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    /// True when nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty() && self.enums.is_empty() && self.groups.is_empty()
    }

    /// Look up the first property with the given name.
    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Look up the first enum with the given name.
    pub fn enum_named(&self, name: &str) -> Option<&EnumDescriptor> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Number of range-marker properties.
    pub fn range_marker_count(&self) -> usize {
        self.properties.iter().filter(|p| p.is_range_marker).count()
    }
}
