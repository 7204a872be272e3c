//! Annotated property constants.

use serde::{Deserialize, Serialize};

/// One numeric constant extracted from an annotated `#define`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Fully-qualified constant identifier (prefix + base name).
    pub name: String,
    /// Literal value or expression text, outer parentheses stripped.
    pub value: String,
    /// Semantic payload type (`@value_type`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    /// `|`-separated change modes (`@change_mode`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub change_mode: Option<String>,
    /// Access mode (`@access`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<String>,
    /// Unit tag (`@unit`). Carried through, never rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    /// Set when the block carries `@range_start` or `@range_end`.
    #[serde(default)]
    pub is_range_marker: bool,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            value_type: None,
            change_mode: None,
            access: None,
            unit: None,
            is_range_marker: false,
        }
    }

    pub fn with_value_type(mut self, value_type: impl Into<String>) -> Self {
        self.value_type = Some(value_type.into());
        self
    }

    pub fn with_change_mode(mut self, change_mode: impl Into<String>) -> Self {
        self.change_mode = Some(change_mode.into());
        self
    }

    pub fn with_access(mut self, access: impl Into<String>) -> Self {
        self.access = Some(access.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn range_marker(mut self) -> Self {
        self.is_range_marker = true;
        self
    }

    /// Change mode tags in source order (empty when no change mode is set).
    pub fn change_modes(&self) -> Vec<&str> {
        self.change_mode
            .as_deref()
            .map(|modes| modes.split('|').collect())
            .unwrap_or_default()
    }

    /// Store the value for an annotation key.
    ///
    /// Range keys ignore `value`; every other key overwrites the previous value.
    pub fn apply(&mut self, key: AnnotationKey, value: Option<&str>) {
        let value = value.map(str::to_string);
        match key {
            AnnotationKey::ValueType => self.value_type = value,
            AnnotationKey::ChangeMode => self.change_mode = value,
            AnnotationKey::Access => self.access = value,
            AnnotationKey::Unit => self.unit = value,
            AnnotationKey::RangeStart | AnnotationKey::RangeEnd => self.is_range_marker = true,
        }
    }
}

/// Annotation keys recognized in property documentation comments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKey {
    ValueType,
    ChangeMode,
    Access,
    Unit,
    RangeStart,
    RangeEnd,
}

impl AnnotationKey {
    pub const ALL: [AnnotationKey; 6] = [
        Self::ValueType,
        Self::ChangeMode,
        Self::Access,
        Self::Unit,
        Self::RangeStart,
        Self::RangeEnd,
    ];

    /// Parse a comment token; only exact matches are keys.
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == token)
    }

    /// The token as written in source (e.g. `@value_type`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValueType => "@value_type",
            Self::ChangeMode => "@change_mode",
            Self::Access => "@access",
            Self::Unit => "@unit",
            Self::RangeStart => "@range_start",
            Self::RangeEnd => "@range_end",
        }
    }

    /// Whether the key consumes the following token as its value.
    pub fn takes_value(&self) -> bool {
        !matches!(self, Self::RangeStart | Self::RangeEnd)
    }
}

impl std::fmt::Display for AnnotationKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
