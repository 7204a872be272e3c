//! Enumerations from headers and enum groups from IDL documents.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// One `name = value` entry of a header enum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumEntry {
    pub name: String,
    /// Value text as written in source, trailing comma removed.
    pub value: String,
}

/// One named enumeration extracted from a header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumDescriptor {
    /// The declared enum identifier.
    pub name: String,
    /// Entries in source order. Entries sharing a value are all kept.
    pub entries: Vec<EnumEntry>,
}

impl EnumDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Append an entry, keeping source order.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push(EnumEntry {
            name: name.into(),
            value: value.into(),
        });
    }

    /// Builder-style variant of [`push`](Self::push).
    pub fn entry(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(name, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose value has not been seen earlier in the enum.
    ///
    /// The first entry carrying a given value wins; later aliases are skipped.
    pub fn first_by_value(&self) -> impl Iterator<Item = &EnumEntry> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .filter(move |entry| seen.insert(entry.value.as_str()))
    }
}

/// One case of an IDL enum group with its resolved value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumCase {
    pub name: String,
    pub value: i64,
}

impl EnumCase {
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One enum group of an IDL document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumGroup {
    pub name: String,
    /// Cases in document order.
    pub cases: Vec<EnumCase>,
}

impl EnumGroup {
    pub fn new(name: impl Into<String>, cases: Vec<EnumCase>) -> Self {
        Self {
            name: name.into(),
            cases,
        }
    }
}
