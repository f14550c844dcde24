//! Error types for JDL operations.
//!
//! This module provides the main error type [`JdlError`] which wraps the
//! error conditions that can occur while loading configuration and building
//! a document.

use std::io;

use thiserror::Error;

use jdl_builder::error::BuildError;

/// The main error type for JDL operations.
///
/// # Diagnostic Variants
///
/// The `Build` variant contains structured error information with source
/// spans, together with the source text the spans point into.
#[derive(Debug, Error)]
pub enum JdlError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("{err}")]
    Build { err: BuildError, src: String },
}

impl JdlError {
    /// Create a new `Build` error with the associated source code.
    pub fn new_build_error(err: BuildError, src: impl Into<String>) -> Self {
        Self::Build {
            err,
            src: src.into(),
        }
    }
}
