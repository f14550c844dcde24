//! JDL Core Types and Definitions
//!
//! This crate provides the semantic model produced by the JDL builder and
//! consumed by downstream validators, exporters and generators. It includes:
//!
//! - **AST**: The resolved document and its declarations ([`ast`] module)
//! - **Annotations**: Unary, binary and map-valued annotations ([`annotation`] module)
//! - **Options**: The merged global options map and renderable options ([`option`] module)
//! - **Entity lists**: Stable deduplication and the wildcard marker ([`entity_list`] module)

pub mod annotation;
pub mod ast;
pub mod entity_list;
pub mod error;
pub mod option;

pub use error::ModelError;
