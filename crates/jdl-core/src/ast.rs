//! Abstract syntax tree of a JDL document.
//!
//! These types represent the fully resolved model after the concrete syntax
//! tree has been walked once. No node refers back to the syntax tree; the
//! [`Document`] owns everything transitively.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ external grammar
//! Concrete Syntax Tree (jdl_builder::cst)
//!     ↓ builder
//! AST Document (these types)
//!     ↓ downstream validators, exporters, generators
//! ```
//!
//! # Organization
//!
//! - [`document`] - The root [`Document`]
//! - [`entity`] - [`Entity`], [`Field`] and [`Validation`]
//! - [`relationship`] - [`RelationshipSidePair`] and its sides
//! - [`enumeration`] - [`Enum`] declarations
//! - [`application`] - [`Application`] and [`Deployment`] configuration
//! - [`page`] - The recursive page layout tree
//! - [`extension`] - [`Dataset`] and [`JsonConfig`] payload declarations

pub mod application;
pub mod document;
pub mod entity;
pub mod enumeration;
pub mod extension;
pub mod page;
pub mod relationship;

pub use application::*;
pub use document::*;
pub use entity::*;
pub use enumeration::*;
pub use extension::*;
pub use page::*;
pub use relationship::*;
