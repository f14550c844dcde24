//! CST to AST conversion.
//!
//! The [`Builder`] owns the document being assembled and walks the program
//! tree once, depth first. Each construct family is handled by its own
//! submodule; this module only sequences them.

mod annotation;
mod application;
mod entity;
mod extension;
mod option;
mod page;
mod relationship;

use log::{debug, info, trace};

use jdl_core::ast::Document;

use crate::{cst, error::Result, extract::image};

/// Assembles a [`Document`] from a program tree.
///
/// A builder is single use: [`Builder::build`] consumes it, so every
/// compilation starts from a fresh document with an empty, fully keyed
/// options map.
#[derive(Debug, Default)]
pub(crate) struct Builder {
    document: Document,
}

impl Builder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Convert every collection of the program into the document.
    ///
    /// # Errors
    ///
    /// Returns the first contract violation found. No partial document is
    /// returned.
    pub(crate) fn build(mut self, prog: &cst::Prog<'_>) -> Result<Document> {
        info!(
            entities = prog.entities.len(),
            relationships = prog.relationships.len(),
            pages = prog.pages.len();
            "Building document"
        );

        self.build_constants(&prog.constants);
        self.build_applications(&prog.applications, &prog.deployments);
        self.build_entities(&prog.entities);
        self.build_extensions(&prog.datasets, &prog.json_configs);
        self.build_pages(&prog.pages);
        self.build_relationships(&prog.relationships)?;
        self.build_enums(&prog.enums);
        self.build_options(&prog.unary_options, &prog.binary_options)?;

        info!("Document built successfully");
        Ok(self.document)
    }

    // ========================================================================
    // Declarations
    // ========================================================================

    fn build_constants(&mut self, constants: &[cst::ConstantDeclaration<'_>]) {
        debug!(count = constants.len(); "Building constants");
        for constant in constants {
            trace!(name = constant.name.inner(); "Constant");
            self.document
                .insert_constant(image(&constant.name), image(constant.value.token()));
        }
    }

    fn build_applications(
        &mut self,
        applications: &[cst::ApplicationDeclaration<'_>],
        deployments: &[cst::DeploymentDeclaration<'_>],
    ) {
        debug!(
            applications = applications.len(),
            deployments = deployments.len();
            "Building applications and deployments"
        );
        for declaration in applications {
            self.document
                .push_application(application::build_application(declaration));
        }
        for declaration in deployments {
            self.document
                .push_deployment(application::build_deployment(declaration));
        }
    }

    fn build_entities(&mut self, entities: &[cst::EntityDeclaration<'_>]) {
        debug!(count = entities.len(); "Building entities");
        for declaration in entities {
            trace!(name = declaration.name.inner(); "Entity");
            self.document.push_entity(entity::build_entity(declaration));
        }
    }

    fn build_extensions(
        &mut self,
        datasets: &[cst::DatasetDeclaration<'_>],
        json_configs: &[cst::JsonConfigDeclaration<'_>],
    ) {
        debug!(
            datasets = datasets.len(),
            json_configs = json_configs.len();
            "Building datasets and JSON configurations"
        );
        for declaration in datasets {
            self.document
                .push_dataset(extension::build_dataset(declaration));
        }
        for declaration in json_configs {
            self.document
                .push_json_config(extension::build_json_config(declaration));
        }
    }

    fn build_pages(&mut self, pages: &[cst::PageDeclaration<'_>]) {
        debug!(count = pages.len(); "Building pages");
        for declaration in pages {
            trace!(name = declaration.name.inner(), entity = declaration.entity.inner(); "Page");
            self.document.push_page(page::build_page(declaration));
        }
    }

    /// Flatten every relationship block into one entry per body.
    fn build_relationships(&mut self, relationships: &[cst::RelationDeclaration<'_>]) -> Result<()> {
        debug!(count = relationships.len(); "Building relationships");
        for declaration in relationships {
            trace!(
                cardinality = declaration.relationship_type.inner(),
                bodies = declaration.bodies.len();
                "Relationship"
            );
            for pair in relationship::build_relationship(declaration)? {
                self.document.push_relationship(pair);
            }
        }
        Ok(())
    }

    fn build_enums(&mut self, enums: &[cst::EnumDeclaration<'_>]) {
        debug!(count = enums.len(); "Building enums");
        for declaration in enums {
            self.document.push_enum(entity::build_enum(declaration));
        }
    }

    // ========================================================================
    // Options
    // ========================================================================

    fn build_options(
        &mut self,
        unary: &[cst::UnaryOptionDeclaration<'_>],
        binary: &[cst::BinaryOptionDeclaration<'_>],
    ) -> Result<()> {
        debug!(unary = unary.len(), binary = binary.len(); "Merging options");
        let options = option::merge_options(self.document.take_options(), unary, binary)?;
        self.document.set_options(options);
        Ok(())
    }
}
