//! Dual-source field values.
//!
//! Several wizard fields can be filled either from a catalog dropdown or from
//! free text ("replaces unit", "upgrades to", ability type). The tag travels
//! with the value so an edit form can reopen on the right input. On the wire
//! only the string survives.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Where a [`SourcedValue`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueSource {
    /// Picked from a catalog dropdown.
    Catalog,
    /// Typed by the user.
    Custom,
    /// Read back from a serialized document; the tag was not stored.
    Unresolved,
}

/// A string value tagged with the input it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SourcedValue {
    value: String,
    source: ValueSource,
}

impl SourcedValue {
    pub fn catalog(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ValueSource::Catalog,
        }
    }

    pub fn custom(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ValueSource::Custom,
        }
    }

    pub fn unresolved(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            source: ValueSource::Unresolved,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn source(&self) -> ValueSource {
        self.source
    }

    pub fn is_custom(&self) -> bool {
        self.source == ValueSource::Custom
    }

    /// Pin down the source of an unresolved value.
    ///
    /// `in_catalog` reports whether the value is among the options known right
    /// now. Values that are not found (including when the catalog has not
    /// loaded yet) are treated as custom. Already tagged values keep their tag.
    pub fn resolve(self, in_catalog: impl FnOnce(&str) -> bool) -> Self {
        match self.source {
            ValueSource::Unresolved => {
                let source = if in_catalog(&self.value) {
                    ValueSource::Catalog
                } else {
                    ValueSource::Custom
                };
                Self {
                    value: self.value,
                    source,
                }
            }
            _ => self,
        }
    }

    pub fn into_value(self) -> String {
        self.value
    }
}

impl fmt::Display for SourcedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}

impl Serialize for SourcedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.value)
    }
}

impl<'de> Deserialize<'de> for SourcedValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(Self::unresolved)
    }
}
