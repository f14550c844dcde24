//! Annotations attached to entities, fields, relationships and page nodes.
//!
//! An annotation has the same shape as an option: a name with no value, a
//! single value, or an ordered map of entries.

use std::fmt;

use serde::Serialize;

use crate::option::OptionKind;

/// One entry of a map-valued annotation or option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MapEntry {
    /// A bare key without a value (`@cache(entity)`).
    Key(String),
    /// A key with a string value (`@cache(region = "users")`).
    Pair { key: String, value: String },
}

impl MapEntry {
    /// Create a bare key entry.
    pub fn key(key: impl Into<String>) -> Self {
        Self::Key(key.into())
    }

    /// Create a key/value entry.
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Pair {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the entry key.
    pub fn name(&self) -> &str {
        match self {
            MapEntry::Key(key) => key,
            MapEntry::Pair { key, .. } => key,
        }
    }

    /// Get the entry value, if the entry has one.
    pub fn value(&self) -> Option<&str> {
        match self {
            MapEntry::Key(_) => None,
            MapEntry::Pair { value, .. } => Some(value),
        }
    }
}

impl fmt::Display for MapEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapEntry::Key(key) => write!(f, "{key}"),
            MapEntry::Pair { key, value } => write!(f, "{key}={value}"),
        }
    }
}

/// An annotation such as `@skipClient`, `@dto(mapstruct)` or `@cache(a = "b")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "UPPERCASE")]
pub enum Annotation {
    #[serde(rename_all = "camelCase")]
    Unary { option_name: String },
    #[serde(rename_all = "camelCase")]
    Binary {
        option_name: String,
        option_value: String,
    },
    #[serde(rename_all = "camelCase")]
    Map {
        option_name: String,
        option_value: Vec<MapEntry>,
    },
}

impl Annotation {
    /// Create a flag annotation.
    pub fn unary(name: impl Into<String>) -> Self {
        Self::Unary {
            option_name: name.into(),
        }
    }

    /// Create a single-valued annotation.
    pub fn binary(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Binary {
            option_name: name.into(),
            option_value: value.into(),
        }
    }

    /// Create a map-valued annotation.
    pub fn map(name: impl Into<String>, entries: Vec<MapEntry>) -> Self {
        Self::Map {
            option_name: name.into(),
            option_value: entries,
        }
    }

    /// Get the annotation name.
    pub fn name(&self) -> &str {
        match self {
            Annotation::Unary { option_name }
            | Annotation::Binary { option_name, .. }
            | Annotation::Map { option_name, .. } => option_name,
        }
    }

    /// Get the shape of this annotation.
    pub fn kind(&self) -> OptionKind {
        match self {
            Annotation::Unary { .. } => OptionKind::Unary,
            Annotation::Binary { .. } => OptionKind::Binary,
            Annotation::Map { .. } => OptionKind::Map,
        }
    }

    /// Get the single value of a binary annotation.
    pub fn value(&self) -> Option<&str> {
        match self {
            Annotation::Binary { option_value, .. } => Some(option_value),
            _ => None,
        }
    }

    /// Get the entries of a map annotation.
    pub fn entries(&self) -> Option<&[MapEntry]> {
        match self {
            Annotation::Map { option_value, .. } => Some(option_value),
            _ => None,
        }
    }
}

/// An annotation lifted out of an injected-field parameter, tagged with the
/// parameter name it belonged to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldAnnotation {
    key: String,
    #[serde(flatten)]
    annotation: Annotation,
}

impl FieldAnnotation {
    pub fn new(key: impl Into<String>, annotation: Annotation) -> Self {
        Self {
            key: key.into(),
            annotation,
        }
    }

    /// Name of the injected-field parameter the annotation was declared on.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn annotation(&self) -> &Annotation {
        &self.annotation
    }
}
