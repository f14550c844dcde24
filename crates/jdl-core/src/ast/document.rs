//! The root of the AST.

use indexmap::IndexMap;
use serde::Serialize;

use super::{Application, Dataset, Deployment, Entity, Enum, JsonConfig, Page, RelationshipSidePair};
use crate::option::Options;

/// Everything declared in one compilation unit.
///
/// A fresh document has every collection empty and every option family
/// present with an empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    applications: Vec<Application>,
    deployments: Vec<Deployment>,
    constants: IndexMap<String, String>,
    entities: Vec<Entity>,
    datasets: Vec<Dataset>,
    pages: Vec<Page>,
    json_configs: Vec<JsonConfig>,
    relationships: Vec<RelationshipSidePair>,
    enums: Vec<Enum>,
    options: Options,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a constant; a later declaration of the same name replaces the value.
    pub fn insert_constant(&mut self, name: String, value: String) {
        self.constants.insert(name, value);
    }

    pub fn push_application(&mut self, application: Application) {
        self.applications.push(application);
    }

    pub fn push_deployment(&mut self, deployment: Deployment) {
        self.deployments.push(deployment);
    }

    pub fn push_entity(&mut self, entity: Entity) {
        self.entities.push(entity);
    }

    pub fn push_dataset(&mut self, dataset: Dataset) {
        self.datasets.push(dataset);
    }

    pub fn push_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    pub fn push_json_config(&mut self, json_config: JsonConfig) {
        self.json_configs.push(json_config);
    }

    pub fn push_relationship(&mut self, relationship: RelationshipSidePair) {
        self.relationships.push(relationship);
    }

    pub fn push_enum(&mut self, enumeration: Enum) {
        self.enums.push(enumeration);
    }

    /// Replace the options map.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    /// Take the options map out, leaving a fresh one in its place.
    pub fn take_options(&mut self) -> Options {
        std::mem::take(&mut self.options)
    }

    /// Constants by name, with their literal text.
    pub fn constants(&self) -> &IndexMap<String, String> {
        &self.constants
    }

    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn deployments(&self) -> &[Deployment] {
        &self.deployments
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn datasets(&self) -> &[Dataset] {
        &self.datasets
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn json_configs(&self) -> &[JsonConfig] {
        &self.json_configs
    }

    pub fn relationships(&self) -> &[RelationshipSidePair] {
        &self.relationships
    }

    pub fn enums(&self) -> &[Enum] {
        &self.enums
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}
