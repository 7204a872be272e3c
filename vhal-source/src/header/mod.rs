//! Extraction of annotated properties and enums from C headers.
//!
//! Extraction is targeted pattern matching rather than a C grammar: anything
//! that does not have the expected shape is skipped without a diagnostic.

mod enums;
mod property;

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;
use vhalgen_ir::{EnumDescriptor, Model, PropertyDescriptor};

use crate::{Error, Result, SourceSet};

/// Prefix of the property macros in `vehicle.h`.
pub const PROPERTY_PREFIX: &str = "VEHICLE_PROPERTY_";

static DEFAULT_PROPERTY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    property::pattern(PROPERTY_PREFIX).expect("default property pattern is valid")
});

/// Extracts the model from header text.
#[derive(Debug, Clone)]
pub struct HeaderExtractor {
    prefix: String,
    property_pattern: Regex,
}

impl HeaderExtractor {
    /// Extractor for `VEHICLE_PROPERTY_*` macros.
    pub fn new() -> Self {
        Self {
            prefix: PROPERTY_PREFIX.to_string(),
            property_pattern: DEFAULT_PROPERTY_PATTERN.clone(),
        }
    }

    /// Extractor for macros starting with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Result<Self> {
        let prefix = prefix.into();
        let property_pattern = property::pattern(&prefix).map_err(|source| {
            Box::new(Error::Pattern {
                prefix: prefix.clone(),
                source,
            })
        })?;
        Ok(Self {
            prefix,
            property_pattern,
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Extract properties and enums, each in order of appearance.
    pub fn extract(&self, sources: &SourceSet) -> Result<Model> {
        let properties = self.extract_properties(sources)?;
        let enums = self.extract_enums(sources.text());
        debug!(
            properties = properties.len(),
            enums = enums.len(),
            "extracted header model"
        );

        Ok(Model {
            properties,
            enums,
            groups: Vec::new(),
        })
    }

    /// Extract the annotated property macros.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::MalformedAnnotation`] when a value-bearing key is
    /// the last token of its comment.
    pub fn extract_properties(&self, sources: &SourceSet) -> Result<Vec<PropertyDescriptor>> {
        property::extract(&self.property_pattern, &self.prefix, sources)
    }

    /// Extract the enum blocks. Never fails.
    pub fn extract_enums(&self, text: &str) -> Vec<EnumDescriptor> {
        enums::extract(text)
    }
}

impl Default for HeaderExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = r#"
/**
 * Vehicle model year
 * @value_type VEHICLE_VALUE_TYPE_INT32
 * @change_mode VEHICLE_PROP_CHANGE_MODE_STATIC
 * @access VEHICLE_PROP_ACCESS_READ
 * @unit VEHICLE_UNIT_TYPE_YEAR
 */
#define VEHICLE_PROPERTY_INFO_MODEL_YEAR                           (0x00000103)

enum vehicle_gear {
    VEHICLE_GEAR_PARKING = 0x0004,
    VEHICLE_GEAR_DRIVE = 0x0008,
};
"#;

    #[test]
    fn test_extract_model() {
        let model = HeaderExtractor::new()
            .extract(&SourceSet::from_text("vehicle.h", HEADER))
            .unwrap();

        assert_eq!(model.properties.len(), 1);
        assert_eq!(model.enums.len(), 1);
        assert!(model.groups.is_empty());

        let year = &model.properties[0];
        assert_eq!(year.name, "VEHICLE_PROPERTY_INFO_MODEL_YEAR");
        assert_eq!(year.value, "0x00000103");
        assert_eq!(year.unit.as_deref(), Some("VEHICLE_UNIT_TYPE_YEAR"));
    }

    #[test]
    fn test_custom_prefix() {
        let text = "/** @access VEHICLE_PROP_ACCESS_READ */\n#define VENDOR_PROP_LIGHTS 0x7001\n";
        let extractor = HeaderExtractor::with_prefix("VENDOR_PROP_").unwrap();

        let props = extractor
            .extract_properties(&SourceSet::from_text("vendor.h", text))
            .unwrap();

        assert_eq!(props.len(), 1);
        assert_eq!(props[0].name, "VENDOR_PROP_LIGHTS");
        assert_eq!(extractor.prefix(), "VENDOR_PROP_");
    }

    #[test]
    fn test_default_prefix_ignores_other_macros() {
        let text = "/** @access X */\n#define VENDOR_PROP_LIGHTS 0x7001\n";
        let props = HeaderExtractor::new()
            .extract_properties(&SourceSet::from_text("vendor.h", text))
            .unwrap();
        assert!(props.is_empty());
    }

    #[test]
    fn test_empty_text_gives_empty_model() {
        let model = HeaderExtractor::new()
            .extract(&SourceSet::from_text("empty.h", ""))
            .unwrap();
        assert!(model.is_empty());
    }
}
