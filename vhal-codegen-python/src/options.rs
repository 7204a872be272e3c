use std::{fmt, str::FromStr};

use thiserror::Error;

/// HAL version the constants were generated from, e.g. `2.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HalVersion {
    pub major: u32,
    pub minor: u32,
}

impl HalVersion {
    pub const V2_0: Self = Self { major: 2, minor: 0 };

    pub fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// `<major>_<minor>`, as used in module and class names.
    pub fn suffix(&self) -> String {
        format!("{}_{}", self.major, self.minor)
    }
}

impl Default for HalVersion {
    fn default() -> Self {
        Self::V2_0
    }
}

impl fmt::Display for HalVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid HAL version '{0}', expected <major>.<minor> such as 2.0")]
pub struct ParseHalVersionError(String);

impl FromStr for HalVersion {
    type Err = ParseHalVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHalVersionError(s.to_string());
        let (major, minor) = s.split_once('.').ok_or_else(err)?;
        // u32::from_str accepts a leading '+'
        if major.starts_with('+') || minor.starts_with('+') {
            return Err(err());
        }
        Ok(Self {
            major: major.parse().map_err(|_| err())?,
            minor: minor.parse().map_err(|_| err())?,
        })
    }
}

/// Settings for the generated Python module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PythonOptions {
    pub hal_version: HalVersion,
    /// Copyright year in the license header
    pub year: i32,
    /// Tool named in the do-not-edit notice
    pub generator_label: String,
}

impl PythonOptions {
    pub fn new(year: i32) -> Self {
        Self {
            hal_version: HalVersion::default(),
            year,
            generator_label: "vhalgen".to_string(),
        }
    }

    pub fn with_hal_version(mut self, hal_version: HalVersion) -> Self {
        self.hal_version = hal_version;
        self
    }
}
