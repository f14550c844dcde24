//! Errors raised by the model when asked to hold something it has no slot for.

use thiserror::Error;

use crate::option::{OptionFamily, OptionKind};

/// An operation on the model that the model cannot represent.
///
/// These are contract violations: the producer handed over a name or shape
/// outside the closed vocabulary the model recognises.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown option `{0}`")]
    UnknownOptionFamily(String),

    #[error("option `{family}` takes {expected} declarations, found a {found} declaration")]
    OptionKindMismatch {
        family: OptionFamily,
        expected: OptionKind,
        found: OptionKind,
    },

    #[error("unknown relationship cardinality `{0}`")]
    UnknownCardinality(String),
}
