//! Entity, field and validation nodes.

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::annotation::Annotation;

/// A field constraint.
///
/// The builder passes validations through in declaration order without
/// deduplicating them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    Required,
    Unique,
    /// A bound such as `min(1)`, `maxlength(MAX)` or `maxbytes(64)`.
    MinMax {
        key: String,
        value: String,
        /// `value` names a constant rather than holding a literal.
        constant: bool,
    },
    /// A regular expression body, without its enclosing delimiters.
    Pattern(String),
    /// A regular expression body marking the field read-only.
    ReadOnly(String),
}

impl Validation {
    /// The validation keyword.
    pub fn key(&self) -> &str {
        match self {
            Validation::Required => "required",
            Validation::Unique => "unique",
            Validation::MinMax { key, .. } => key,
            Validation::Pattern(_) => "pattern",
            Validation::ReadOnly(_) => "readonly",
        }
    }

    /// The validation argument; empty for flag validations.
    pub fn value(&self) -> &str {
        match self {
            Validation::Required | Validation::Unique => "",
            Validation::MinMax { value, .. } => value,
            Validation::Pattern(regex) | Validation::ReadOnly(regex) => regex,
        }
    }

    /// Returns `true` if the value refers to a named constant.
    pub fn is_constant_reference(&self) -> bool {
        matches!(self, Validation::MinMax { constant: true, .. })
    }
}

impl Serialize for Validation {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let constant = self.is_constant_reference();
        let mut map = serializer.serialize_map(Some(if constant { 3 } else { 2 }))?;
        map.serialize_entry("key", self.key())?;
        map.serialize_entry("value", self.value())?;
        if constant {
            map.serialize_entry("constant", &true)?;
        }
        map.end()
    }
}

/// A field of an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    name: String,
    #[serde(rename = "type")]
    field_type: String,
    validations: Vec<Validation>,
    documentation: Option<String>,
    annotations: Vec<Annotation>,
}

impl Field {
    pub fn new(
        name: String,
        field_type: String,
        validations: Vec<Validation>,
        documentation: Option<String>,
        annotations: Vec<Annotation>,
    ) -> Self {
        Self {
            name,
            field_type,
            validations,
            documentation,
            annotations,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Name of the field's type.
    pub fn field_type(&self) -> &str {
        &self.field_type
    }

    pub fn validations(&self) -> &[Validation] {
        &self.validations
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// An entity declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    annotations: Vec<Annotation>,
    name: String,
    table_name: String,
    fields: Vec<Field>,
    documentation: Option<String>,
}

impl Entity {
    /// Create an entity. The table name falls back to the entity name.
    pub fn new(
        annotations: Vec<Annotation>,
        name: String,
        table_name: Option<String>,
        fields: Vec<Field>,
        documentation: Option<String>,
    ) -> Self {
        let table_name = table_name.unwrap_or_else(|| name.clone());
        Self {
            annotations,
            name,
            table_name,
            fields,
            documentation,
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }
}
