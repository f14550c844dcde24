//! Application and deployment configuration nodes.

use indexmap::IndexMap;
use serde::Serialize;

/// Key used to derive [`PACKAGE_FOLDER_KEY`].
pub const PACKAGE_NAME_KEY: &str = "packageName";

/// Key derived from the first [`PACKAGE_NAME_KEY`] unless already set.
pub const PACKAGE_FOLDER_KEY: &str = "packageFolder";

/// A typed configuration value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ConfigValue {
    /// A dotted name such as `com.mycompany.myapp`.
    QualifiedName(String),
    /// A bracketed list of identifiers.
    List(Vec<String>),
    /// An integer, kept in its source form.
    Integer(String),
    /// A string literal without its quotes.
    String(String),
    Boolean(bool),
}

impl ConfigValue {
    /// The textual form of scalar values; `None` for lists and booleans.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ConfigValue::QualifiedName(text)
            | ConfigValue::Integer(text)
            | ConfigValue::String(text) => Some(text),
            ConfigValue::List(_) | ConfigValue::Boolean(_) => None,
        }
    }
}

/// Ordered configuration map; a repeated key keeps its first position and last value.
pub type Config = IndexMap<String, ConfigValue>;

/// Entities an application declares, with exclusions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitySelection {
    entity_list: Vec<String>,
    excluded: Vec<String>,
}

impl EntitySelection {
    pub fn new(entity_list: Vec<String>, excluded: Vec<String>) -> Self {
        Self {
            entity_list,
            excluded,
        }
    }

    /// Selected entity names, or the single wildcard entry.
    pub fn entity_list(&self) -> &[String] {
        &self.entity_list
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }
}

/// An application declaration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Application {
    config: Config,
    entities: EntitySelection,
}

impl Application {
    pub fn new(config: Config, entities: EntitySelection) -> Self {
        Self { config, entities }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn entities(&self) -> &EntitySelection {
        &self.entities
    }
}

/// A deployment declaration: a bare configuration map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Deployment {
    config: Config,
}

impl Deployment {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
