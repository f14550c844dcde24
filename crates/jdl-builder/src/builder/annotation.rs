//! Annotation conversion.

use jdl_core::annotation::{Annotation, MapEntry};

use crate::{
    cst,
    extract::{image, unquote},
};

pub(crate) fn build_annotations(declarations: &[cst::AnnotationDeclaration<'_>]) -> Vec<Annotation> {
    declarations.iter().map(build_annotation).collect()
}

/// Convert one annotation.
///
/// A variables block holding a single bare entry reads as a single value;
/// any other block becomes a map.
pub(crate) fn build_annotation(declaration: &cst::AnnotationDeclaration<'_>) -> Annotation {
    let name = image(&declaration.option);
    match &declaration.value {
        None => Annotation::unary(name),
        Some(cst::AnnotationValue::Name(value)) => Annotation::binary(name, image(value)),
        Some(cst::AnnotationValue::Variables(variables)) => {
            let entries: Vec<MapEntry> = variables.iter().map(build_map_entry).collect();
            match entries.as_slice() {
                [MapEntry::Key(value)] => Annotation::binary(name, value.clone()),
                _ => Annotation::map(name, entries),
            }
        }
    }
}

fn build_map_entry(variable: &cst::VariableDeclaration<'_>) -> MapEntry {
    match variable {
        cst::VariableDeclaration::Pair { name, value } => MapEntry::pair(image(name), unquote(value)),
        cst::VariableDeclaration::Name(name) => MapEntry::key(image(name)),
        cst::VariableDeclaration::Text(key) => MapEntry::key(unquote(key)),
        cst::VariableDeclaration::TextPair { key, value } => {
            MapEntry::pair(unquote(key), unquote(value))
        }
    }
}
