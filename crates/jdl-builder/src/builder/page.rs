//! Page layout conversion.
//!
//! Purely structural: every node converts its own annotations, then converts
//! and concatenates the children of each child-producing slot in declaration
//! order.

use jdl_core::ast::{
    Grid, GridLeaf, Group, GroupElement, Operation, OperationGroup, OperationSet, OperationValue,
    Page, PageElement, PageField, Tab, TabElement,
};

use super::annotation::build_annotations;
use crate::{
    cst,
    extract::{dotted, image, trim_data_block},
};

/// Convert a page. Tabs come first, followed by the remaining children.
pub(crate) fn build_page(declaration: &cst::PageDeclaration<'_>) -> Page {
    let tabs = declaration
        .tabs
        .iter()
        .flat_map(|run| &run.tabs)
        .map(|tab| PageElement::Tab(build_tab(tab)));
    let others = declaration
        .others
        .iter()
        .flat_map(|run| &run.elements)
        .map(|element| match build_other(element) {
            TabElement::Field(field) => PageElement::Field(field),
            TabElement::Group(group) => PageElement::Group(group),
            TabElement::Grid(grid) => PageElement::Grid(grid),
        });

    Page::new(
        image(&declaration.name),
        image(&declaration.entity),
        build_annotations(&declaration.annotations),
        tabs.chain(others).collect(),
    )
}

fn build_tab(declaration: &cst::PageTabDeclaration<'_>) -> Tab {
    let values = declaration
        .others
        .iter()
        .flat_map(|run| &run.elements)
        .map(build_other)
        .collect();
    Tab::new(
        image(&declaration.name),
        build_annotations(&declaration.annotations),
        values,
    )
}

fn build_other(declaration: &cst::PageOtherDeclaration<'_>) -> TabElement {
    match declaration {
        cst::PageOtherDeclaration::Field(field) => TabElement::Field(build_field(field)),
        cst::PageOtherDeclaration::Group(group) => TabElement::Group(build_group(group)),
        cst::PageOtherDeclaration::Grid(grid) => TabElement::Grid(build_grid(grid)),
    }
}

/// Convert a group. Nested groups come first, followed by fields.
fn build_group(declaration: &cst::PageGroupDeclaration<'_>) -> Group {
    let groups = declaration
        .groups
        .iter()
        .flat_map(|run| &run.groups)
        .map(|group| GroupElement::Group(build_group(group)));
    let fields = declaration
        .fields
        .iter()
        .flat_map(|run| &run.fields)
        .map(|field| GroupElement::Field(build_field(field)));

    Group::new(
        image(&declaration.name),
        build_annotations(&declaration.annotations),
        groups.chain(fields).collect(),
    )
}

fn build_grid(declaration: &cst::PageGridDeclaration<'_>) -> Grid {
    let fields = declaration
        .leaves
        .iter()
        .map(|leaf| match leaf {
            cst::PageLeafDeclaration::Field(field) => GridLeaf::Field(build_field(field)),
            cst::PageLeafDeclaration::Operates(operates) => {
                GridLeaf::Operate(build_operation_set(operates))
            }
        })
        .collect();
    Grid::new(
        image(&declaration.name),
        build_annotations(&declaration.annotations),
        fields,
    )
}

fn build_field(declaration: &cst::PageFieldDeclaration<'_>) -> PageField {
    PageField::new(
        dotted(&declaration.names),
        build_annotations(&declaration.annotations),
    )
}

fn build_operation_set(declaration: &cst::PageOperatesDeclaration<'_>) -> OperationSet {
    OperationSet::new(
        build_annotations(&declaration.annotations),
        declaration.operates.iter().map(build_operation_group).collect(),
    )
}

fn build_operation_group(declaration: &cst::PageOperateDeclaration<'_>) -> OperationGroup {
    OperationGroup::new(
        image(&declaration.name),
        build_annotations(&declaration.annotations),
        declaration.actions.iter().map(build_operation).collect(),
    )
}

/// Convert an operation parameter. A non-empty data block wins over a bare
/// identifier, which wins over a string literal. String literals keep their
/// quotes.
fn build_operation(declaration: &cst::PageActionDeclaration<'_>) -> Operation {
    let data_block = declaration
        .data_block
        .as_ref()
        .filter(|block| !block.inner().is_empty())
        .map(|block| OperationValue::DataBlock(trim_data_block(block.inner())));
    let value = data_block
        .or_else(|| {
            declaration
                .identifier
                .as_ref()
                .map(|identifier| OperationValue::Identifier(image(identifier)))
        })
        .or_else(|| {
            declaration
                .string
                .as_ref()
                .map(|string| OperationValue::Text(image(string)))
        });
    Operation::new(image(&declaration.key), value)
}
