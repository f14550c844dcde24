//! Enumeration nodes.

use serde::Serialize;

/// One constant of an enumeration, with its optional literal value kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnumValue {
    key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
}

impl EnumValue {
    pub fn new(key: String, value: Option<String>) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// An enumeration declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Enum {
    name: String,
    values: Vec<EnumValue>,
}

impl Enum {
    pub fn new(name: String, values: Vec<EnumValue>) -> Self {
        Self { name, values }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[EnumValue] {
        &self.values
    }
}
