//! Application and deployment conversion.

use jdl_core::{
    ast::{
        Application, Config, ConfigValue, Deployment, EntitySelection, PACKAGE_FOLDER_KEY,
        PACKAGE_NAME_KEY,
    },
    entity_list,
};

use super::option::resolve_filter;
use crate::{
    cst,
    extract::{dotted, image, images, unquote},
};

/// Convert an application. Only the last `config` and the last `entities`
/// clause are kept; absent clauses leave an empty config and selection.
pub(crate) fn build_application(declaration: &cst::ApplicationDeclaration<'_>) -> Application {
    let config = declaration
        .configs
        .last()
        .map(|config| build_application_config(&config.declarations))
        .unwrap_or_default();
    let entities = declaration
        .entities
        .last()
        .map(build_entity_selection)
        .unwrap_or_default();
    Application::new(config, entities)
}

pub(crate) fn build_deployment(declaration: &cst::DeploymentDeclaration<'_>) -> Deployment {
    Deployment::new(build_config(&declaration.declarations))
}

fn build_entity_selection(entities: &cst::ApplicationSubEntities<'_>) -> EntitySelection {
    let excluded = entities
        .exclusion
        .as_ref()
        .map(|exclusion| entity_list::dedupe(images(&exclusion.names)))
        .unwrap_or_default();
    EntitySelection::new(resolve_filter(&entities.filter), excluded)
}

/// Collect an application's `key value` pairs.
///
/// The first `packageName` also sets `packageFolder`, with dots turned into
/// `/`, unless a folder is already present. An explicit `packageFolder`
/// declared later replaces the derived one.
fn build_application_config(declarations: &[cst::ConfigDeclaration<'_>]) -> Config {
    let mut config = Config::new();
    for declaration in declarations {
        let key = image(&declaration.key);
        let value = build_config_value(&declaration.value);
        let folder = (key == PACKAGE_NAME_KEY && !config.contains_key(PACKAGE_FOLDER_KEY))
            .then(|| value.as_text().map(|name| name.replace('.', "/")))
            .flatten();
        config.insert(key, value);
        if let Some(folder) = folder {
            config.insert(PACKAGE_FOLDER_KEY.to_string(), ConfigValue::String(folder));
        }
    }
    config
}

/// Collect `key value` pairs; a repeated key keeps its last value.
fn build_config(declarations: &[cst::ConfigDeclaration<'_>]) -> Config {
    declarations
        .iter()
        .map(|declaration| (image(&declaration.key), build_config_value(&declaration.value)))
        .collect()
}

fn build_config_value(value: &cst::ConfigValue<'_>) -> ConfigValue {
    match value {
        cst::ConfigValue::QualifiedName(parts) => ConfigValue::QualifiedName(dotted(parts)),
        cst::ConfigValue::List(names) => ConfigValue::List(images(names)),
        cst::ConfigValue::Integer(integer) => ConfigValue::Integer(image(integer)),
        cst::ConfigValue::String(string) => ConfigValue::String(unquote(string)),
        cst::ConfigValue::Boolean(boolean) => ConfigValue::Boolean(*boolean.inner() == "true"),
    }
}
