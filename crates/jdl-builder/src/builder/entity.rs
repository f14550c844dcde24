//! Entity, field, validation and enumeration conversion.

use jdl_core::ast::{Entity, Enum, EnumValue, Field, Validation};

use super::annotation::build_annotations;
use crate::{
    cst,
    extract::{image, strip_delimiters, trim_comment},
};

pub(crate) fn build_entity(declaration: &cst::EntityDeclaration<'_>) -> Entity {
    Entity::new(
        build_annotations(&declaration.annotations),
        image(&declaration.name),
        declaration.table_name.as_ref().map(image),
        declaration.body.iter().map(build_field).collect(),
        declaration
            .javadoc
            .as_ref()
            .map(|javadoc| trim_comment(javadoc.inner())),
    )
}

fn build_field(declaration: &cst::FieldDeclaration<'_>) -> Field {
    Field::new(
        image(&declaration.name),
        image(&declaration.field_type),
        declaration.validations.iter().map(build_validation).collect(),
        declaration
            .javadoc
            .as_ref()
            .map(|javadoc| trim_comment(javadoc.inner())),
        build_annotations(&declaration.annotations),
    )
}

fn build_validation(validation: &cst::Validation<'_>) -> Validation {
    match validation {
        cst::Validation::Required(_) => Validation::Required,
        cst::Validation::Unique(_) => Validation::Unique,
        cst::Validation::MinMax(min_max) => {
            let (value, constant) = match &min_max.value {
                cst::MinMaxValue::Literal(literal) => (image(literal.token()), false),
                cst::MinMaxValue::Constant(name) => (image(name), true),
            };
            Validation::MinMax {
                key: image(&min_max.keyword),
                value,
                constant,
            }
        }
        cst::Validation::Pattern(regex) => {
            Validation::Pattern(strip_delimiters(regex.inner()).to_string())
        }
        cst::Validation::ReadOnly(regex) => {
            Validation::ReadOnly(strip_delimiters(regex.inner()).to_string())
        }
    }
}

pub(crate) fn build_enum(declaration: &cst::EnumDeclaration<'_>) -> Enum {
    let values = declaration
        .values
        .iter()
        .map(|prop| EnumValue::new(image(&prop.key), prop.value.as_ref().map(image)))
        .collect();
    Enum::new(image(&declaration.name), values)
}
