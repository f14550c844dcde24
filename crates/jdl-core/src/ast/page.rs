//! Page layout tree.
//!
//! A page nests tabs, groups and grids down to fields and operation sets.
//! Children keep their declaration order at every level. Each node serializes
//! with a `type` tag naming its kind.
//!
//! ```text
//! Page ─┬─ Tab ─┬─ Group ─┬─ Group ...
//!       │       │         └─ Field
//!       │       ├─ Grid ──┬─ Field
//!       │       │         └─ OperationSet ── OperationGroup ── Operation
//!       │       └─ Field
//!       ├─ Group / Grid / Field
//! ```

use serde::Serialize;

use crate::annotation::Annotation;

/// A page declaration bound to an entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "page")]
pub struct Page {
    name: String,
    entity: String,
    annotations: Vec<Annotation>,
    values: Vec<PageElement>,
}

impl Page {
    pub fn new(
        name: String,
        entity: String,
        annotations: Vec<Annotation>,
        values: Vec<PageElement>,
    ) -> Self {
        Self {
            name,
            entity,
            annotations,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The entity the page presents.
    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Tabs first, then the remaining children, each in declaration order.
    pub fn values(&self) -> &[PageElement] {
        &self.values
    }
}

/// A direct child of a [`Page`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PageElement {
    Tab(Tab),
    Field(PageField),
    Group(Group),
    Grid(Grid),
}

/// A direct child of a [`Tab`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TabElement {
    Field(PageField),
    Group(Group),
    Grid(Grid),
}

/// A direct child of a [`Group`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GroupElement {
    Field(PageField),
    Group(Group),
}

/// A leaf of a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum GridLeaf {
    Field(PageField),
    #[serde(rename = "operate")]
    Operate(OperationSet),
}

/// A tab of a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tab {
    name: String,
    annotations: Vec<Annotation>,
    values: Vec<TabElement>,
}

impl Tab {
    pub fn new(name: String, annotations: Vec<Annotation>, values: Vec<TabElement>) -> Self {
        Self {
            name,
            annotations,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn values(&self) -> &[TabElement] {
        &self.values
    }
}

/// A group of fields, possibly nesting further groups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    name: String,
    annotations: Vec<Annotation>,
    values: Vec<GroupElement>,
}

impl Group {
    pub fn new(name: String, annotations: Vec<Annotation>, values: Vec<GroupElement>) -> Self {
        Self {
            name,
            annotations,
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Nested groups first, then fields, each in declaration order.
    pub fn values(&self) -> &[GroupElement] {
        &self.values
    }
}

/// A grid of fields and operation sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    name: String,
    annotations: Vec<Annotation>,
    fields: Vec<GridLeaf>,
}

impl Grid {
    pub fn new(name: String, annotations: Vec<Annotation>, fields: Vec<GridLeaf>) -> Self {
        Self {
            name,
            annotations,
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn fields(&self) -> &[GridLeaf] {
        &self.fields
    }
}

/// A reference to an entity field, possibly through relationships (`owner.name`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageField {
    name: String,
    annotations: Vec<Annotation>,
}

impl PageField {
    pub fn new(name: String, annotations: Vec<Annotation>) -> Self {
        Self { name, annotations }
    }

    /// The dotted field path.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

/// The operation groups of a grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationSet {
    annotations: Vec<Annotation>,
    #[serde(rename = "operates")]
    groups: Vec<OperationGroup>,
}

impl OperationSet {
    pub fn new(annotations: Vec<Annotation>, groups: Vec<OperationGroup>) -> Self {
        Self {
            annotations,
            groups,
        }
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn groups(&self) -> &[OperationGroup] {
        &self.groups
    }
}

/// A named operation with its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "action")]
pub struct OperationGroup {
    key: String,
    annotations: Vec<Annotation>,
    #[serde(rename = "actions")]
    operations: Vec<Operation>,
}

impl OperationGroup {
    pub fn new(key: String, annotations: Vec<Annotation>, operations: Vec<Operation>) -> Self {
        Self {
            key,
            annotations,
            operations,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }
}

/// A single operation parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename = "field")]
pub struct Operation {
    key: String,
    value: Option<OperationValue>,
}

impl Operation {
    pub fn new(key: String, value: Option<OperationValue>) -> Self {
        Self { key, value }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> Option<&OperationValue> {
        self.value.as_ref()
    }
}

/// Where an operation parameter value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OperationValue {
    /// An embedded data block without its block markers.
    DataBlock(String),
    /// A bare identifier.
    Identifier(String),
    /// A string literal, quotes included.
    Text(String),
}

impl OperationValue {
    pub fn as_str(&self) -> &str {
        match self {
            OperationValue::DataBlock(text)
            | OperationValue::Identifier(text)
            | OperationValue::Text(text) => text,
        }
    }
}
