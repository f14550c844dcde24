//! Collector for accumulating diagnostics during a pass.
//!
//! The [`DiagnosticCollector`] is handed to each check in turn so that a pass
//! can report every finding instead of stopping at the first one. It is an
//! ordinary value owned by the caller; nothing is shared between passes.

use crate::error::Diagnostic;

/// A collector for accumulating diagnostics during a pass.
///
/// # Example
///
/// ```
/// # use jdl_builder::error::{Diagnostic, DiagnosticCollector};
/// # use jdl_builder::Span;
///
/// let mut collector = DiagnosticCollector::new();
/// collector.emit(Diagnostic::warning("dataset can be collapsed").with_label(Span::new(0..7), "here"));
///
/// assert_eq!(collector.into_diagnostics().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection, returning every diagnostic in emission order.
    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

}
