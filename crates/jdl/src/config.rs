//! Configuration types for building JDL documents.
//!
//! All types implement [`serde::Deserialize`] with every field defaulted, so
//! an empty TOML file yields [`AppConfig::default`].
//!
//! # Example
//!
//! ```
//! # use jdl::config::AppConfig;
//! let config = AppConfig::from_toml_str("[lint]\ndatasets = false\n").unwrap();
//! assert!(!config.lint().datasets());
//! ```

use std::{fs, path::Path};

use log::info;
use serde::Deserialize;

use crate::JdlError;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Lint configuration section.
    #[serde(default)]
    lint: LintConfig,
}

impl AppConfig {
    pub fn new(lint: LintConfig) -> Self {
        Self { lint }
    }

    /// Returns the lint configuration.
    pub fn lint(&self) -> &LintConfig {
        &self.lint
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`JdlError::Config`] if the text is not valid TOML or does not
    /// match the configuration schema.
    pub fn from_toml_str(content: &str) -> Result<Self, JdlError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`JdlError::Io`] if the file cannot be read and
    /// [`JdlError::Config`] if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, JdlError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration");
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }
}

/// Controls which advisory checks run after a successful build.
#[derive(Debug, Clone, Deserialize)]
pub struct LintConfig {
    /// Run the dataset checks.
    #[serde(default = "enabled")]
    datasets: bool,
}

impl LintConfig {
    pub fn new(datasets: bool) -> Self {
        Self { datasets }
    }

    /// Returns `true` if dataset checks are enabled.
    pub fn datasets(&self) -> bool {
        self.datasets
    }
}

impl Default for LintConfig {
    fn default() -> Self {
        Self { datasets: enabled() }
    }
}

fn enabled() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_enables_dataset_lint() {
        assert!(AppConfig::default().lint().datasets());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert!(config.lint().datasets());

        let config = AppConfig::from_toml_str("[lint]\n").unwrap();
        assert!(config.lint().datasets());
    }

    #[test]
    fn test_disable_dataset_lint() {
        let config = AppConfig::from_toml_str("[lint]\ndatasets = false\n").unwrap();
        assert!(!config.lint().datasets());
    }

    #[test]
    fn test_invalid_value_is_config_error() {
        let err = AppConfig::from_toml_str("[lint]\ndatasets = \"sometimes\"\n").unwrap_err();
        assert!(matches!(err, JdlError::Config(_)));
    }
}
