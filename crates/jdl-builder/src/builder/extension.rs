//! Dataset and JSON configuration conversion.

use jdl_core::ast::{Dataset, JsonConfig};

use crate::{
    cst,
    extract::{image, trim_data_block},
};

pub(crate) fn build_dataset(declaration: &cst::DatasetDeclaration<'_>) -> Dataset {
    Dataset::new(
        image(&declaration.name),
        trim_data_block(declaration.body.inner()),
    )
}

pub(crate) fn build_json_config(declaration: &cst::JsonConfigDeclaration<'_>) -> JsonConfig {
    JsonConfig::new(
        image(&declaration.name),
        image(&declaration.config_type),
        image(&declaration.subtype),
        trim_data_block(declaration.body.inner()),
    )
}
