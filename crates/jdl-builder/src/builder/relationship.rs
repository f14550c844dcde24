//! Relationship conversion.
//!
//! Each body of a relationship block becomes one side pair carrying the
//! block's cardinality. Sides convert independently.

use jdl_core::{
    annotation::{Annotation, FieldAnnotation},
    ast::{Cardinality, RelationshipSide, RelationshipSidePair},
};

use super::annotation::{build_annotation, build_annotations};
use crate::{
    cst,
    error::{Diagnostic, ErrorCode, Result},
    extract::{dotted, image, strip_delimiters, trim_comment},
    span::Span,
};

/// The only relationship option keyword.
const JPA_DERIVED_IDENTIFIER: &str = "jpaDerivedIdentifier";

pub(crate) fn build_relationship(
    declaration: &cst::RelationDeclaration<'_>,
) -> Result<Vec<RelationshipSidePair>> {
    let cardinality = build_cardinality(&declaration.relationship_type)?;
    declaration
        .bodies
        .iter()
        .map(|body| build_body(body, cardinality))
        .collect()
}

fn build_cardinality(token: &cst::Token<'_>) -> Result<Cardinality> {
    token.inner().parse::<Cardinality>().map_err(|err| {
        Diagnostic::error(err.to_string())
            .with_code(ErrorCode::E101)
            .with_label(token.span(), "not a relationship cardinality")
            .with_help("expected one of `OneToOne`, `OneToMany`, `ManyToOne` or `ManyToMany`")
    })
}

fn build_body(
    body: &cst::RelationshipBody<'_>,
    cardinality: Cardinality,
) -> Result<RelationshipSidePair> {
    let mut options = build_annotations(&body.annotations);
    let sides = body.from.name.span().union(body.to.name.span());
    for option in &body.options {
        options.push(build_relationship_option(option, sides)?);
    }

    Ok(RelationshipSidePair::new(
        cardinality,
        build_side(&body.from),
        build_side(&body.to),
        options,
    ))
}

/// `sides` covers both side names of the body the option belongs to.
fn build_relationship_option(token: &cst::Token<'_>, sides: Span) -> Result<Annotation> {
    if *token.inner() == JPA_DERIVED_IDENTIFIER {
        Ok(Annotation::unary(JPA_DERIVED_IDENTIFIER))
    } else {
        Err(
            Diagnostic::error(format!("unknown relationship option `{}`", token.inner()))
                .with_code(ErrorCode::E100)
                .with_label(token.span(), "not a relationship option")
                .with_secondary_label(sides, "in this relationship")
                .with_help(format!(
                    "the only relationship option is `{JPA_DERIVED_IDENTIFIER}`"
                )),
        )
    }
}

fn build_side(side: &cst::RelationshipSide<'_>) -> RelationshipSide {
    let built = RelationshipSide::new(
        image(&side.name),
        side.comment.as_ref().map(|comment| trim_comment(comment.inner())),
        build_annotations(&side.annotations),
        side.readonly
            .as_ref()
            .map(|regex| strip_delimiters(regex.inner()).to_string()),
    );

    let Some(base) = &side.injected_field else {
        return built;
    };
    let (injected_field, annotations_of_field) =
        build_injected_field(base, &side.injected_field_params);
    built.with_injected_field(injected_field, annotations_of_field, side.required.is_some())
}

/// Render `base` or `base(param1,param2)`, lifting every parameter annotation
/// into a flat list keyed by the parameter name.
fn build_injected_field(
    base: &cst::Token<'_>,
    params: &[cst::InjectedFieldParam<'_>],
) -> (String, Vec<FieldAnnotation>) {
    if params.is_empty() {
        return (image(base), Vec::new());
    }

    let mut names = Vec::with_capacity(params.len());
    let mut annotations = Vec::new();
    for param in params {
        let name = dotted(&param.names);
        annotations.extend(
            param
                .annotations
                .iter()
                .map(|annotation| FieldAnnotation::new(name.clone(), build_annotation(annotation))),
        );
        names.push(name);
    }

    (format!("{}({})", base.inner(), names.join(",")), annotations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        span::Spanned,
        test_utils::{binary_annotation, side, tok, toks, unary_annotation},
    };

    fn body(
        from: cst::RelationshipSide<'static>,
        to: cst::RelationshipSide<'static>,
    ) -> cst::RelationshipBody<'static> {
        cst::RelationshipBody {
            annotations: vec![],
            from,
            to,
            options: vec![],
        }
    }

    fn with_injected(
        mut side: cst::RelationshipSide<'static>,
        field: &'static str,
    ) -> cst::RelationshipSide<'static> {
        side.injected_field = Some(tok(field));
        side
    }

    #[test]
    fn test_bodies_share_cardinality() {
        let declaration = cst::RelationDeclaration {
            relationship_type: tok("ManyToOne"),
            bodies: vec![body(side("A"), side("B")), body(side("C"), side("D"))],
        };
        let pairs = build_relationship(&declaration).unwrap();

        assert_eq!(pairs.len(), 2);
        assert!(pairs.iter().all(|pair| pair.cardinality() == Cardinality::ManyToOne));
        assert_eq!(pairs[1].from().name(), "C");
        assert_eq!(pairs[1].to().name(), "D");
    }

    #[test]
    fn test_unknown_cardinality() {
        let declaration = cst::RelationDeclaration {
            relationship_type: tok("OneToFew"),
            bodies: vec![body(side("A"), side("B"))],
        };
        let err = build_relationship(&declaration).unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E101));
        assert!(err.message().contains("OneToFew"));
    }

    #[test]
    fn test_required_only_with_injected_field() {
        let mut to = with_injected(side("B"), "a");
        to.required = Some(tok("required"));
        let declaration = cst::RelationDeclaration {
            relationship_type: tok("OneToOne"),
            bodies: vec![body(side("A"), to)],
        };
        let pairs = build_relationship(&declaration).unwrap();
        let pair = &pairs[0];

        assert_eq!(pair.from().injected_field(), None);
        assert_eq!(pair.from().required(), None);
        assert_eq!(pair.to().injected_field(), Some("a"));
        assert_eq!(pair.to().required(), Some(true));
    }

    #[test]
    fn test_injected_field_without_required_is_false() {
        let pair = build_body(&body(with_injected(side("A"), "b"), side("B")), Cardinality::OneToOne)
            .unwrap();
        assert_eq!(pair.from().required(), Some(false));
    }

    #[test]
    fn test_injected_field_params() {
        let mut to = with_injected(side("B"), "a");
        to.injected_field_params = vec![
            cst::InjectedFieldParam {
                names: toks(&["id"]),
                annotations: vec![unary_annotation("key")],
            },
            cst::InjectedFieldParam {
                names: toks(&["owner", "name"]),
                annotations: vec![binary_annotation("label", "ownerName"), unary_annotation("hidden")],
            },
        ];
        let pair = build_body(&body(side("A"), to), Cardinality::OneToMany).unwrap();

        assert_eq!(pair.to().injected_field(), Some("a(id,owner.name)"));
        let keyed: Vec<_> = pair
            .to()
            .annotations_of_field()
            .iter()
            .map(|annotation| (annotation.key(), annotation.annotation().name()))
            .collect();
        assert_eq!(
            keyed,
            vec![("id", "key"), ("owner.name", "label"), ("owner.name", "hidden")]
        );
    }

    #[test]
    fn test_side_details() {
        let mut from = side("A");
        from.comment = Some(tok("/** the owner */"));
        from.readonly = Some(tok("/admin/"));
        from.annotations = vec![unary_annotation("lazy")];
        let pair = build_body(&body(from, side("B")), Cardinality::OneToOne).unwrap();

        assert_eq!(pair.from().documentation(), Some(" the owner "));
        assert_eq!(pair.from().readonly(), Some("admin"));
        assert_eq!(pair.from().annotations(), &[Annotation::unary("lazy")]);
        assert_eq!(pair.to().documentation(), None);
    }

    #[test]
    fn test_options_annotations_then_keywords() {
        let mut relationship = body(side("A"), side("B"));
        relationship.annotations = vec![binary_annotation("onDelete", "cascade")];
        relationship.options = toks(&["jpaDerivedIdentifier"]);
        let pair = build_body(&relationship, Cardinality::OneToOne).unwrap();

        assert_eq!(
            pair.options(),
            &[
                Annotation::binary("onDelete", "cascade"),
                Annotation::unary("jpaDerivedIdentifier"),
            ]
        );
    }

    #[test]
    fn test_unknown_relationship_option() {
        let mut relationship = body(side("A"), side("B"));
        relationship.options = toks(&["jpaDerived"]);
        let err = build_body(&relationship, Cardinality::OneToOne).unwrap_err();

        assert_eq!(err.code(), Some(ErrorCode::E100));
        assert_eq!(err.message(), "unknown relationship option `jpaDerived`");
    }

    #[test]
    fn test_unknown_option_points_at_body() {
        let mut relationship = body(side("A"), side("B"));
        relationship.from.name = Spanned::new("A", Span::new(24..25));
        relationship.to.name = Spanned::new("B", Span::new(29..30));
        relationship.options = vec![Spanned::new("lazy", Span::new(36..40))];
        let err = build_body(&relationship, Cardinality::ManyToOne).unwrap_err();

        let labels = err.labels();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].is_primary());
        assert_eq!(labels[0].span(), Span::new(36..40));
        assert!(!labels[1].is_primary());
        assert_eq!(labels[1].span(), Span::new(24..30));
        assert_eq!(labels[1].message(), "in this relationship");
    }
}
