//! Option declaration conversion and merging.
//!
//! Flag declarations (`skipClient A, B except C`) and value-bearing
//! declarations (`dto A, B with mapstruct except C`) are resolved into
//! entity lists and folded into the options map one at a time.

use log::trace;

use jdl_core::{
    ModelError, entity_list,
    option::{OptionEntry, OptionFamily, Options},
};

use crate::{
    cst,
    error::{Diagnostic, ErrorCode, Result},
    extract::{image, images},
};

/// Resolve a flag selector: explicit names, or the wildcard when `*` is given
/// or the only name is `all`. Repeated names are dropped.
pub(crate) fn resolve_filter(filter: &cst::FilterDef<'_>) -> Vec<String> {
    let names = images(&filter.names);
    if filter.star.is_some() || only_all(&names) {
        vec![entity_list::WILDCARD.to_string()]
    } else {
        entity_list::dedupe(names)
    }
}

/// Resolve a value-bearing selector into its combined list: the selected
/// names (or the wildcard) followed by the `method` and `method_path` tokens.
///
/// The list is not deduplicated; its last element is the option value.
fn resolve_entity_list(list: &cst::EntityList<'_>) -> Vec<String> {
    let mut names = images(&list.names);
    if list.star.is_some() || only_all(&names) {
        names = vec![entity_list::WILDCARD.to_string()];
    }
    names.extend(list.method.as_ref().map(image));
    names.extend(list.method_path.as_ref().map(image));
    names
}

fn only_all(names: &[String]) -> bool {
    names.len() == 1 && names[0] == entity_list::ALL_KEYWORD
}

/// Split a combined list into its entity names and trailing value.
///
/// The value is taken before the entity names are deduplicated. Returns
/// `None` for an empty list.
pub(crate) fn split_binary_value(mut combined: Vec<String>) -> Option<(Vec<String>, String)> {
    let value = combined.pop()?;
    Some((entity_list::dedupe(combined), value))
}

fn resolve_exclusion(exclusion: Option<&cst::Exclusion<'_>>) -> Vec<String> {
    exclusion
        .map(|exclusion| images(&exclusion.names))
        .unwrap_or_default()
}

/// Fold every flag declaration, then every value-bearing declaration, into
/// the options map.
pub(crate) fn merge_options(
    options: Options,
    unary: &[cst::UnaryOptionDeclaration<'_>],
    binary: &[cst::BinaryOptionDeclaration<'_>],
) -> Result<Options> {
    let options = unary.iter().try_fold(options, merge_unary)?;
    binary.iter().try_fold(options, merge_binary)
}

fn merge_unary(options: Options, declaration: &cst::UnaryOptionDeclaration<'_>) -> Result<Options> {
    let option = &declaration.option;
    let family = option
        .inner()
        .parse::<OptionFamily>()
        .map_err(|err| option_error(err, option))?;
    let entry = OptionEntry::new(
        resolve_filter(&declaration.filter),
        resolve_exclusion(declaration.exclusion.as_ref()),
    );
    trace!(family = family.name(), entities = entry.list().len(); "Merging flag option");

    options
        .merge_unary(family, &entry)
        .map_err(|err| option_error(err, option))
}

fn merge_binary(options: Options, declaration: &cst::BinaryOptionDeclaration<'_>) -> Result<Options> {
    let option = &declaration.option;
    let family =
        OptionFamily::from_binary_name(option.inner()).map_err(|err| option_error(err, option))?;
    let Some((list, value)) = split_binary_value(resolve_entity_list(&declaration.entity_list))
    else {
        return Err(
            Diagnostic::error(format!("option `{}` has no value", option.inner()))
                .with_code(ErrorCode::E102)
                .with_label(option.span(), "value-bearing option")
                .with_help("declare the value with `with <value>`"),
        );
    };
    let entry = OptionEntry::new(list, resolve_exclusion(declaration.exclusion.as_ref()));
    trace!(family = family.name(), value = value.as_str(); "Merging value option");

    options
        .merge_binary(family, &value, &entry)
        .map_err(|err| option_error(err, option))
}

/// Lift a model error into a diagnostic pointing at the option keyword.
fn option_error(err: ModelError, option: &cst::Token<'_>) -> Diagnostic {
    let diagnostic = Diagnostic::error(err.to_string());
    match err {
        ModelError::UnknownOptionFamily(_) => diagnostic
            .with_code(ErrorCode::E200)
            .with_label(option.span(), "not an option family"),
        ModelError::OptionKindMismatch { expected, .. } => diagnostic
            .with_code(ErrorCode::E201)
            .with_label(option.span(), format!("expected a {expected} declaration")),
        ModelError::UnknownCardinality(_) => diagnostic.with_label(option.span(), "here"),
    }
}
