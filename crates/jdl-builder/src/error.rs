//! Error and diagnostic system for the JDL builder.
//!
//! This module provides an error handling system with:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the source
//! - Severity levels
//! - A collector for accumulating advisory findings
//!
//! # Overview
//!
//! The error system is built around the [`Diagnostic`] type, which represents
//! a single error or warning message with optional error code, source
//! locations, and help text. A failed build returns a [`BuildError`] wrapping
//! the diagnostic that aborted it.
//!
//! # Example
//!
//! ```
//! # use jdl_builder::error::{Diagnostic, ErrorCode};
//! # use jdl_builder::Span;
//!
//! let diag = Diagnostic::error("unknown relationship cardinality `OneToFew`")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(0..8), "not a cardinality")
//!     .with_help("expected one of OneToOne, OneToMany, ManyToOne, ManyToMany");
//! ```

mod build_error;
mod collector;
mod diagnostic;
mod error_code;
mod label;
mod severity;

pub(crate) use build_error::Result;

pub use build_error::BuildError;
pub use collector::DiagnosticCollector;
pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use severity::Severity;
