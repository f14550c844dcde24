//! Concrete syntax tree types
//!
//! This module defines the grammar-shaped tree the builder consumes. The tree
//! is produced by an external grammar; the builder trusts its shape and walks
//! it exactly once.
//!
//! ## Slot Conventions
//!
//! - Leaf tokens are [`Token`]s: the token image borrowed from the source,
//!   with its byte range.
//! - A grammar slot that can repeat is a `Vec`; an optional one is an `Option`.
//! - Closed grammar alternatives are enums.
//! - Slots the grammar leaves open but the builder recognises only a fixed set
//!   of images for (relationship cardinalities, relationship options, option
//!   family names) stay tokens and are checked during conversion.
//!
//! Token images are raw: quotes, regex slashes, comment markers and data block
//! markers are still present and are stripped by the builder.

use crate::span::{Span, Spanned};

/// A leaf token: its source image and location.
pub type Token<'a> = Spanned<&'a str>;

/// The root of a syntax tree: every top-level declaration, grouped by kind.
#[derive(Debug, Clone, Default)]
pub struct Prog<'a> {
    pub constants: Vec<ConstantDeclaration<'a>>,
    pub applications: Vec<ApplicationDeclaration<'a>>,
    pub deployments: Vec<DeploymentDeclaration<'a>>,
    pub entities: Vec<EntityDeclaration<'a>>,
    pub datasets: Vec<DatasetDeclaration<'a>>,
    pub pages: Vec<PageDeclaration<'a>>,
    pub json_configs: Vec<JsonConfigDeclaration<'a>>,
    pub relationships: Vec<RelationDeclaration<'a>>,
    pub enums: Vec<EnumDeclaration<'a>>,
    pub unary_options: Vec<UnaryOptionDeclaration<'a>>,
    pub binary_options: Vec<BinaryOptionDeclaration<'a>>,
}

// ============================================================================
// Constants
// ============================================================================

/// `MAX_LENGTH = 42`
#[derive(Debug, Clone)]
pub struct ConstantDeclaration<'a> {
    pub name: Token<'a>,
    pub value: NumericLiteral<'a>,
}

/// A numeric literal, kept as written.
#[derive(Debug, Clone)]
pub enum NumericLiteral<'a> {
    Integer(Token<'a>),
    Decimal(Token<'a>),
}

impl<'a> NumericLiteral<'a> {
    pub fn token(&self) -> &Token<'a> {
        match self {
            NumericLiteral::Integer(token) | NumericLiteral::Decimal(token) => token,
        }
    }
}

// ============================================================================
// Annotations
// ============================================================================

/// `@option`, `@option(value)` or `@option(key = "value", ...)`
#[derive(Debug, Clone)]
pub struct AnnotationDeclaration<'a> {
    pub option: Token<'a>,
    pub value: Option<AnnotationValue<'a>>,
}

/// The parenthesised part of an annotation.
#[derive(Debug, Clone)]
pub enum AnnotationValue<'a> {
    /// A bare identifier.
    Name(Token<'a>),
    /// A variables block.
    Variables(Vec<VariableDeclaration<'a>>),
}

/// One entry of an annotation variables block.
#[derive(Debug, Clone)]
pub enum VariableDeclaration<'a> {
    /// `key = "value"`
    Pair { name: Token<'a>, value: Token<'a> },
    /// `key`
    Name(Token<'a>),
    /// `"key"`
    Text(Token<'a>),
    /// `"key" = "value"`
    TextPair { key: Token<'a>, value: Token<'a> },
}

// ============================================================================
// Entities
// ============================================================================

/// `@annotations /** doc */ entity Name (table_name) { fields }`
#[derive(Debug, Clone)]
pub struct EntityDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub javadoc: Option<Token<'a>>,
    pub name: Token<'a>,
    pub table_name: Option<Token<'a>>,
    pub body: Vec<FieldDeclaration<'a>>,
}

/// `@annotations /** doc */ name Type validations`
#[derive(Debug, Clone)]
pub struct FieldDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub javadoc: Option<Token<'a>>,
    pub name: Token<'a>,
    pub field_type: Token<'a>,
    pub validations: Vec<Validation<'a>>,
}

/// A field validation; each variant holds the tokens of its alternative.
#[derive(Debug, Clone)]
pub enum Validation<'a> {
    Required(Token<'a>),
    Unique(Token<'a>),
    MinMax(MinMaxValidation<'a>),
    /// `pattern(/regex/)`, holding the delimited regex token.
    Pattern(Token<'a>),
    /// `readonly(/regex/)`, holding the delimited regex token.
    ReadOnly(Token<'a>),
}

/// `min(1)`, `maxlength(MAX)` and friends.
#[derive(Debug, Clone)]
pub struct MinMaxValidation<'a> {
    pub keyword: Token<'a>,
    pub value: MinMaxValue<'a>,
}

#[derive(Debug, Clone)]
pub enum MinMaxValue<'a> {
    Literal(NumericLiteral<'a>),
    /// A reference to a declared constant.
    Constant(Token<'a>),
}

// ============================================================================
// Relationships
// ============================================================================

/// `relationship OneToMany { bodies }`
#[derive(Debug, Clone)]
pub struct RelationDeclaration<'a> {
    pub relationship_type: Token<'a>,
    pub bodies: Vec<RelationshipBody<'a>>,
}

/// `@annotations From{field} to To{field} with options`
#[derive(Debug, Clone)]
pub struct RelationshipBody<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub from: RelationshipSide<'a>,
    pub to: RelationshipSide<'a>,
    /// Option keywords following `with`.
    pub options: Vec<Token<'a>>,
}

/// `/** doc */ @annotations Name readonly(/regex/) {field(params) required}`
#[derive(Debug, Clone)]
pub struct RelationshipSide<'a> {
    pub comment: Option<Token<'a>>,
    pub name: Token<'a>,
    pub readonly: Option<Token<'a>>,
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub injected_field: Option<Token<'a>>,
    pub injected_field_params: Vec<InjectedFieldParam<'a>>,
    pub required: Option<Token<'a>>,
}

/// `@annotations a.b` inside an injected field's parentheses.
#[derive(Debug, Clone)]
pub struct InjectedFieldParam<'a> {
    pub names: Vec<Token<'a>>,
    pub annotations: Vec<AnnotationDeclaration<'a>>,
}

// ============================================================================
// Enums
// ============================================================================

/// `enum Name { KEY (value), ... }`
#[derive(Debug, Clone)]
pub struct EnumDeclaration<'a> {
    pub name: Token<'a>,
    pub values: Vec<EnumProp<'a>>,
}

#[derive(Debug, Clone)]
pub struct EnumProp<'a> {
    pub key: Token<'a>,
    pub value: Option<Token<'a>>,
}

// ============================================================================
// Options
// ============================================================================

/// The selector of a value-bearing option: `A, B with value` or `* with value`.
///
/// The value arrives as the `method` or `method_path` token after `with`.
#[derive(Debug, Clone)]
pub struct EntityList<'a> {
    pub names: Vec<Token<'a>>,
    pub star: Option<Token<'a>>,
    pub method: Option<Token<'a>>,
    pub method_path: Option<Token<'a>>,
}

impl<'a> EntityList<'a> {
    /// Span of the whole selector, if it has any token.
    pub fn span(&self) -> Option<Span> {
        self.names
            .iter()
            .chain(&self.star)
            .chain(&self.method)
            .chain(&self.method_path)
            .map(|token| token.span())
            .reduce(|acc, span| acc.union(span))
    }
}

/// The selector of a flag option: `A, B`, `*` or `all`.
#[derive(Debug, Clone, Default)]
pub struct FilterDef<'a> {
    pub names: Vec<Token<'a>>,
    pub star: Option<Token<'a>>,
}

/// `except A, B`
#[derive(Debug, Clone, Default)]
pub struct Exclusion<'a> {
    pub names: Vec<Token<'a>>,
}

/// `skipClient A, B except C`
#[derive(Debug, Clone)]
pub struct UnaryOptionDeclaration<'a> {
    pub option: Token<'a>,
    pub filter: FilterDef<'a>,
    pub exclusion: Option<Exclusion<'a>>,
}

/// `dto A, B with mapstruct except C`
#[derive(Debug, Clone)]
pub struct BinaryOptionDeclaration<'a> {
    pub option: Token<'a>,
    pub entity_list: EntityList<'a>,
    pub exclusion: Option<Exclusion<'a>>,
}

// ============================================================================
// Applications and Deployments
// ============================================================================

/// `application { config { ... } entities ... }`
#[derive(Debug, Clone, Default)]
pub struct ApplicationDeclaration<'a> {
    pub configs: Vec<ApplicationSubConfig<'a>>,
    pub entities: Vec<ApplicationSubEntities<'a>>,
}

/// `config { key value ... }`
#[derive(Debug, Clone, Default)]
pub struct ApplicationSubConfig<'a> {
    pub declarations: Vec<ConfigDeclaration<'a>>,
}

/// `entities A, B except C`
#[derive(Debug, Clone, Default)]
pub struct ApplicationSubEntities<'a> {
    pub filter: FilterDef<'a>,
    pub exclusion: Option<Exclusion<'a>>,
}

/// `deployment { key value ... }`
#[derive(Debug, Clone, Default)]
pub struct DeploymentDeclaration<'a> {
    pub declarations: Vec<ConfigDeclaration<'a>>,
}

/// A single `key value` pair of an application config or deployment.
#[derive(Debug, Clone)]
pub struct ConfigDeclaration<'a> {
    pub key: Token<'a>,
    pub value: ConfigValue<'a>,
}

#[derive(Debug, Clone)]
pub enum ConfigValue<'a> {
    /// Dotted name parts.
    QualifiedName(Vec<Token<'a>>),
    /// `[a, b]`
    List(Vec<Token<'a>>),
    Integer(Token<'a>),
    /// A quoted string token.
    String(Token<'a>),
    Boolean(Token<'a>),
}

// ============================================================================
// Datasets and JSON configs
// ============================================================================

/// `dataset name /*# payload */`
#[derive(Debug, Clone)]
pub struct DatasetDeclaration<'a> {
    pub name: Token<'a>,
    pub body: Token<'a>,
}

/// `jsonConfig name type subtype /*# payload */`
#[derive(Debug, Clone)]
pub struct JsonConfigDeclaration<'a> {
    pub name: Token<'a>,
    pub config_type: Token<'a>,
    pub subtype: Token<'a>,
    pub body: Token<'a>,
}

// ============================================================================
// Pages
// ============================================================================

/// `@annotations page Name for Entity { tabs others }`
#[derive(Debug, Clone)]
pub struct PageDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub name: Token<'a>,
    pub entity: Token<'a>,
    pub tabs: Vec<PageTabsDeclaration<'a>>,
    pub others: Vec<PageOthersDeclaration<'a>>,
}

/// A run of tab declarations.
#[derive(Debug, Clone, Default)]
pub struct PageTabsDeclaration<'a> {
    pub tabs: Vec<PageTabDeclaration<'a>>,
}

/// `@annotations tab Name { others }`
#[derive(Debug, Clone)]
pub struct PageTabDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub name: Token<'a>,
    pub others: Vec<PageOthersDeclaration<'a>>,
}

/// A run of field, group or grid declarations.
#[derive(Debug, Clone, Default)]
pub struct PageOthersDeclaration<'a> {
    pub elements: Vec<PageOtherDeclaration<'a>>,
}

#[derive(Debug, Clone)]
pub enum PageOtherDeclaration<'a> {
    Field(PageFieldDeclaration<'a>),
    Group(PageGroupDeclaration<'a>),
    Grid(PageGridDeclaration<'a>),
}

/// `@annotations group Name { groups fields }`
#[derive(Debug, Clone)]
pub struct PageGroupDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub name: Token<'a>,
    pub groups: Vec<PageGroupsDeclaration<'a>>,
    pub fields: Vec<PageFieldsDeclaration<'a>>,
}

/// A run of nested group declarations.
#[derive(Debug, Clone, Default)]
pub struct PageGroupsDeclaration<'a> {
    pub groups: Vec<PageGroupDeclaration<'a>>,
}

/// A run of field declarations.
#[derive(Debug, Clone, Default)]
pub struct PageFieldsDeclaration<'a> {
    pub fields: Vec<PageFieldDeclaration<'a>>,
}

/// `@annotations grid Name { leaves }`
#[derive(Debug, Clone)]
pub struct PageGridDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub name: Token<'a>,
    pub leaves: Vec<PageLeafDeclaration<'a>>,
}

#[derive(Debug, Clone)]
pub enum PageLeafDeclaration<'a> {
    Field(PageFieldDeclaration<'a>),
    Operates(PageOperatesDeclaration<'a>),
}

/// `@annotations owner.name`
#[derive(Debug, Clone)]
pub struct PageFieldDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub names: Vec<Token<'a>>,
}

/// `@annotations operates { operations }`
#[derive(Debug, Clone, Default)]
pub struct PageOperatesDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub operates: Vec<PageOperateDeclaration<'a>>,
}

/// `@annotations name(actions)`
#[derive(Debug, Clone)]
pub struct PageOperateDeclaration<'a> {
    pub annotations: Vec<AnnotationDeclaration<'a>>,
    pub name: Token<'a>,
    pub actions: Vec<PageActionDeclaration<'a>>,
}

/// `key`, `key: identifier`, `key: "text"` or `key: /*# block */`
#[derive(Debug, Clone)]
pub struct PageActionDeclaration<'a> {
    pub key: Token<'a>,
    pub identifier: Option<Token<'a>>,
    pub data_block: Option<Token<'a>>,
    pub string: Option<Token<'a>>,
}
