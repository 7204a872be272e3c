//! Pre-parsed enum documents stored as JSON.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Deserialize;
use vhalgen_ir::EnumCase;

use super::EnumSource;
use crate::{Error, Result};

#[derive(Debug, Deserialize)]
struct RawDocument {
    #[serde(default)]
    enums: Vec<RawGroup>,
}

#[derive(Debug, Deserialize)]
struct RawGroup {
    name: String,
    #[serde(default)]
    cases: Vec<RawCase>,
}

#[derive(Debug, Deserialize)]
struct RawCase {
    name: String,
    value: RawValue,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Int(i64),
    Text(String),
}

/// Enum groups exported from the IDL parser as JSON.
///
/// ```json
/// {"enums": [{"name": "VehicleGear", "cases": [{"name": "GEAR_PARK", "value": "0x4"}]}]}
/// ```
///
/// Case values are integers or strings holding a decimal or `0x` hex number.
#[derive(Debug)]
pub struct JsonDocument {
    path: PathBuf,
    groups: IndexMap<String, Vec<EnumCase>>,
}

impl JsonDocument {
    /// Read and parse a document from disk.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        Self::parse(path, &content)
    }

    /// Parse a document; `path` is only used in error messages.
    pub fn parse(path: impl Into<PathBuf>, content: &str) -> Result<Self> {
        let path = path.into();
        let raw: RawDocument =
            serde_json::from_str(content).map_err(|e| Error::document(&path, e))?;

        let mut groups = IndexMap::new();
        for group in raw.enums {
            let cases = group
                .cases
                .into_iter()
                .map(|case| {
                    let value = resolve(&group.name, &case)?;
                    Ok(EnumCase::new(case.name, value))
                })
                .collect::<Result<Vec<_>>>()?;
            if groups.contains_key(&group.name) {
                return Err(Box::new(Error::DuplicateGroup {
                    path,
                    group: group.name,
                }));
            }
            groups.insert(group.name, cases);
        }

        Ok(Self { path, groups })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EnumSource for JsonDocument {
    fn enum_groups(&self) -> Result<IndexMap<String, Vec<EnumCase>>> {
        Ok(self.groups.clone())
    }
}

fn resolve(group: &str, case: &RawCase) -> Result<i64> {
    match &case.value {
        RawValue::Int(value) => Ok(*value),
        RawValue::Text(text) => parse_number(text).ok_or_else(|| {
            Box::new(Error::InvalidCaseValue {
                group: group.to_string(),
                case: case.name.clone(),
                value: text.clone(),
            })
        }),
    }
}

fn parse_number(text: &str) -> Option<i64> {
    let text = text.trim();
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (digits, radix) = match digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        Some(hex) => (hex, 16),
        None => (digits, 10),
    };
    // from_str_radix takes its own sign, so "--1" would otherwise parse.
    if !digits.starts_with(|c: char| c.is_ascii_hexdigit()) {
        return None;
    }
    let magnitude = u64::from_str_radix(digits, radix).ok()?;

    if negative {
        0i64.checked_sub_unsigned(magnitude)
    } else {
        i64::try_from(magnitude).ok()
    }
}
