//! JDL - semantic model construction for the JDL application modelling
//! language.
//!
//! A host parses JDL source with its own grammar into the
//! [`cst`] vocabulary. [`AstBuilder`] turns that tree into a
//! [`ast::Document`] and runs the enabled advisory checks over it.

pub mod config;
pub mod error_adapter;

mod error;

pub use jdl_builder::{Span, Spanned, cst, lint};
pub use jdl_core::{annotation, ast, entity_list, option};

pub use error::JdlError;

use log::{debug, info, trace};

use jdl_builder::error::Diagnostic;

use config::AppConfig;

/// The result of a successful build.
#[derive(Debug)]
pub struct Compilation {
    document: ast::Document,
    issues: Vec<Diagnostic>,
}

impl Compilation {
    /// The semantic model.
    pub fn document(&self) -> &ast::Document {
        &self.document
    }

    /// Advisory findings, in report order.
    pub fn issues(&self) -> &[Diagnostic] {
        &self.issues
    }

    /// Consume the compilation, returning the document and its issues.
    pub fn into_parts(self) -> (ast::Document, Vec<Diagnostic>) {
        (self.document, self.issues)
    }
}

/// Builder for JDL semantic models.
///
/// # Examples
///
/// ```
/// use jdl::{AstBuilder, config::AppConfig, cst};
///
/// let builder = AstBuilder::new(AppConfig::default());
/// let compilation = builder
///     .build("", &cst::Prog::default())
///     .expect("an empty program builds");
///
/// assert!(compilation.document().entities().is_empty());
/// assert!(compilation.issues().is_empty());
/// ```
#[derive(Debug, Default)]
pub struct AstBuilder {
    config: AppConfig,
}

impl AstBuilder {
    /// Create a new builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Build the document of a parsed program, then run the enabled checks.
    ///
    /// # Arguments
    ///
    /// * `source` - The source text `prog` was parsed from; diagnostics point into it
    /// * `prog` - The parsed program
    ///
    /// # Errors
    ///
    /// Returns [`JdlError::Build`] if the tree has a shape the builder does
    /// not recognise. Lint findings never fail the build.
    pub fn build(&self, source: &str, prog: &cst::Prog<'_>) -> Result<Compilation, JdlError> {
        info!("Building document");

        let document = jdl_builder::build(prog)
            .map_err(|err| JdlError::new_build_error(err, source))?;
        debug!("Document built successfully");
        trace!(document:?; "Built document");

        let issues = if self.config.lint().datasets() {
            lint::check_datasets(Some(prog.datasets.as_slice()))
        } else {
            debug!("Dataset checks disabled");
            Vec::new()
        };
        info!(issues = issues.len(); "Checks completed");

        Ok(Compilation { document, issues })
    }
}
