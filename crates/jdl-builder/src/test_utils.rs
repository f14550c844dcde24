//! Helpers for building syntax tree fragments in unit tests.

use crate::{
    cst::{self, Token},
    span::{Span, Spanned},
};

/// A token whose span is its length from offset zero.
pub(crate) fn tok(image: &'static str) -> Token<'static> {
    Spanned::new(image, Span::new(0..image.len()))
}

pub(crate) fn toks(images: &[&'static str]) -> Vec<Token<'static>> {
    images.iter().map(|image| tok(image)).collect()
}

/// `@name`
pub(crate) fn unary_annotation(name: &'static str) -> cst::AnnotationDeclaration<'static> {
    cst::AnnotationDeclaration {
        option: tok(name),
        value: None,
    }
}

/// `@name(value)`
pub(crate) fn binary_annotation(
    name: &'static str,
    value: &'static str,
) -> cst::AnnotationDeclaration<'static> {
    cst::AnnotationDeclaration {
        option: tok(name),
        value: Some(cst::AnnotationValue::Name(tok(value))),
    }
}

/// A relationship side `name` without injected field.
pub(crate) fn side(name: &'static str) -> cst::RelationshipSide<'static> {
    cst::RelationshipSide {
        comment: None,
        name: tok(name),
        readonly: None,
        annotations: vec![],
        injected_field: None,
        injected_field_params: vec![],
        required: None,
    }
}

/// A page field `a.b.c`.
pub(crate) fn page_field(names: &[&'static str]) -> cst::PageFieldDeclaration<'static> {
    cst::PageFieldDeclaration {
        annotations: vec![],
        names: toks(names),
    }
}
