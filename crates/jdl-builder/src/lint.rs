//! Advisory checks over dataset declarations.
//!
//! Lint findings never halt construction: they are reported as diagnostics
//! alongside a successfully built document. Each check is a [`DatasetRule`]
//! handed a [`DiagnosticCollector`] to report into; the collector is created
//! per call and returned as a plain list, so linting is a pure function of
//! its input.
//!
//! The default rule set is empty.

use log::debug;

use crate::{
    cst,
    error::{Diagnostic, DiagnosticCollector},
};

/// A single check over the dataset declarations of a program.
///
/// Rules receive the declarations read-only and report findings through the
/// collector. A rule must produce the same findings for the same input.
pub trait DatasetRule {
    /// A short identifier for the rule, used in logs.
    fn name(&self) -> &'static str;

    fn check(&self, datasets: &[cst::DatasetDeclaration<'_>], collector: &mut DiagnosticCollector);
}

/// The rules run by [`check_datasets`].
pub fn default_rules() -> Vec<Box<dyn DatasetRule>> {
    Vec::new()
}

/// Run the default rule set over `datasets`.
///
/// Absent or empty input yields no findings.
pub fn check_datasets(datasets: Option<&[cst::DatasetDeclaration<'_>]>) -> Vec<Diagnostic> {
    check_datasets_with(datasets, &default_rules())
}

/// Run `rules` in order over `datasets`, returning their findings in report
/// order.
pub fn check_datasets_with(
    datasets: Option<&[cst::DatasetDeclaration<'_>]>,
    rules: &[Box<dyn DatasetRule>],
) -> Vec<Diagnostic> {
    let Some(datasets) = datasets.filter(|datasets| !datasets.is_empty()) else {
        return Vec::new();
    };

    let mut collector = DiagnosticCollector::new();
    for rule in rules {
        debug!(rule = rule.name(), datasets = datasets.len(); "Running dataset rule");
        rule.check(datasets, &mut collector);
    }
    collector.into_diagnostics()
}
