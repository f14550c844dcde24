//! Relationship nodes.
//!
//! A relationship block declares one cardinality for any number of bodies; the
//! builder flattens it into one [`RelationshipSidePair`] per body.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::{
    annotation::{Annotation, FieldAnnotation},
    error::ModelError,
};

/// Relationship multiplicity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cardinality {
    OneToOne,
    OneToMany,
    ManyToOne,
    ManyToMany,
}

impl Cardinality {
    /// The cardinality keyword as written in source.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::OneToOne => "OneToOne",
            Cardinality::OneToMany => "OneToMany",
            Cardinality::ManyToOne => "ManyToOne",
            Cardinality::ManyToMany => "ManyToMany",
        }
    }
}

impl FromStr for Cardinality {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OneToOne" => Ok(Cardinality::OneToOne),
            "OneToMany" => Ok(Cardinality::OneToMany),
            "ManyToOne" => Ok(Cardinality::ManyToOne),
            "ManyToMany" => Ok(Cardinality::ManyToMany),
            other => Err(ModelError::UnknownCardinality(other.to_string())),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One end of a relationship.
///
/// `required` exists only alongside an injected field: a side without one
/// carries no required-ness at all, and serializes without the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipSide {
    name: String,
    injected_field: Option<String>,
    documentation: Option<String>,
    annotations: Vec<Annotation>,
    annotations_of_field: Vec<FieldAnnotation>,
    readonly: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<bool>,
}

impl RelationshipSide {
    /// Create a side without an injected field.
    pub fn new(
        name: String,
        documentation: Option<String>,
        annotations: Vec<Annotation>,
        readonly: Option<String>,
    ) -> Self {
        Self {
            name,
            injected_field: None,
            documentation,
            annotations,
            annotations_of_field: Vec::new(),
            readonly,
            required: None,
        }
    }

    /// Attach the injected field, which also records whether the side is required.
    pub fn with_injected_field(
        mut self,
        injected_field: String,
        annotations_of_field: Vec<FieldAnnotation>,
        required: bool,
    ) -> Self {
        self.injected_field = Some(injected_field);
        self.annotations_of_field = annotations_of_field;
        self.required = Some(required);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The injected field, rendered as `base` or `base(param1,param2)`.
    pub fn injected_field(&self) -> Option<&str> {
        self.injected_field.as_deref()
    }

    pub fn documentation(&self) -> Option<&str> {
        self.documentation.as_deref()
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Annotations declared on injected-field parameters, keyed by parameter name.
    pub fn annotations_of_field(&self) -> &[FieldAnnotation] {
        &self.annotations_of_field
    }

    pub fn readonly(&self) -> Option<&str> {
        self.readonly.as_deref()
    }

    /// Required-ness; `None` when the side has no injected field.
    pub fn required(&self) -> Option<bool> {
        self.required
    }
}

/// A relationship between two sides under one cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipSidePair {
    cardinality: Cardinality,
    from: RelationshipSide,
    to: RelationshipSide,
    options: Vec<Annotation>,
}

impl RelationshipSidePair {
    pub fn new(
        cardinality: Cardinality,
        from: RelationshipSide,
        to: RelationshipSide,
        options: Vec<Annotation>,
    ) -> Self {
        Self {
            cardinality,
            from,
            to,
            options,
        }
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn from(&self) -> &RelationshipSide {
        &self.from
    }

    pub fn to(&self) -> &RelationshipSide {
        &self.to
    }

    /// Relationship-level options: body annotations, then option keywords.
    pub fn options(&self) -> &[Annotation] {
        &self.options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinality_from_str() {
        assert_eq!("OneToMany".parse::<Cardinality>(), Ok(Cardinality::OneToMany));
        assert_eq!(
            "OneToFew".parse::<Cardinality>(),
            Err(ModelError::UnknownCardinality("OneToFew".to_string()))
        );
        assert_eq!(Cardinality::ManyToMany.to_string(), "ManyToMany");
    }

    #[test]
    fn test_required_key_presence() {
        let side = RelationshipSide::new("A".to_string(), None, vec![], None);
        let json = serde_json::to_value(&side).unwrap();
        assert!(json.get("required").is_none());
        assert_eq!(json["injectedField"], serde_json::Value::Null);

        let side = side.with_injected_field("b".to_string(), vec![], false);
        let json = serde_json::to_value(&side).unwrap();
        assert_eq!(json["required"], false);
        assert_eq!(json["injectedField"], "b");
    }

    #[test]
    fn test_side_pair_serializes_cardinality() {
        let pair = RelationshipSidePair::new(
            Cardinality::OneToOne,
            RelationshipSide::new("A".to_string(), None, vec![], None),
            RelationshipSide::new("B".to_string(), None, vec![], None),
            vec![Annotation::unary("jpaDerivedIdentifier")],
        );
        let json = serde_json::to_value(&pair).unwrap();
        assert_eq!(json["cardinality"], "OneToOne");
        assert_eq!(json["options"][0]["optionName"], "jpaDerivedIdentifier");
    }
}
