//! # JDL Builder
//!
//! Turns the concrete syntax tree of a JDL program into its semantic model.
//!
//! The grammar and parser live outside this crate: a host parses source text
//! into the [`cst`] vocabulary, with every leaf token carrying its source
//! [`Span`]. [`build`] then walks that tree once and produces a
//! [`jdl_core::ast::Document`]. Any shape the grammar never produces (an
//! unknown option family, an unknown relationship option) aborts the build
//! with a spanned [`error::Diagnostic`].
//!
//! Dataset lint checks run separately through [`lint::check_datasets`] and
//! never halt construction.
//!
//! ## Usage
//!
//! ```
//! # use jdl_builder::{build, cst, error::BuildError};
//! fn main() -> Result<(), BuildError> {
//!     let prog = cst::Prog::default();
//!     let document = build(&prog)?;
//!     assert!(document.entities().is_empty());
//!     Ok(())
//! }
//! ```

pub mod cst;
pub mod error;
pub mod lint;

mod builder;
mod extract;
mod span;
#[cfg(test)]
mod test_utils;

pub use span::{Span, Spanned};

use jdl_core::ast::Document;

use builder::Builder;
use error::BuildError;

/// Build the semantic model of a parsed program.
///
/// Collections absent from the program are left empty. The options map
/// always carries every option family, empty unless declared.
///
/// # Errors
///
/// Returns a [`BuildError`] holding the first contract violation found in
/// the tree. No partial document is produced.
pub fn build(prog: &cst::Prog<'_>) -> Result<Document, BuildError> {
    Builder::new().build(prog).map_err(BuildError::from)
}
