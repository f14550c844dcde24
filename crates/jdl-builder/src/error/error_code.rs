//! Error codes for the JDL diagnostic system.
//!
//! Error codes are organized by concern:
//! - `E1xx` - Syntax tree shape errors
//! - `E2xx` - Option model errors

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Syntax Tree Shape Errors (E1xx)
    // =========================================================================
    /// Unknown relationship option.
    ///
    /// A relationship body carries an option keyword other than
    /// `jpaDerivedIdentifier`.
    E100,

    /// Unknown relationship cardinality.
    ///
    /// The cardinality keyword is not one of `OneToOne`, `OneToMany`,
    /// `ManyToOne` or `ManyToMany`.
    E101,

    /// Binary option without a value.
    ///
    /// A value-bearing option declaration has an empty entity list, so there
    /// is no trailing element to take the value from.
    E102,

    // =========================================================================
    // Option Model Errors (E2xx)
    // =========================================================================
    /// Unknown option family.
    ///
    /// An option declaration names a family the options map has no slot for.
    E200,

    /// Option kind mismatch.
    ///
    /// A flag declaration names a value-bearing family, or the other way round.
    E201,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unknown relationship option",
            ErrorCode::E101 => "unknown relationship cardinality",
            ErrorCode::E102 => "binary option without value",
            ErrorCode::E200 => "unknown option family",
            ErrorCode::E201 => "option kind mismatch",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
