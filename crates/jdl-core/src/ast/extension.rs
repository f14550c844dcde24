//! Raw payload declarations: datasets and JSON configs.

use serde::Serialize;

/// A named dataset with its raw payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dataset {
    name: String,
    payload: String,
}

impl Dataset {
    pub fn new(name: String, payload: String) -> Self {
        Self { name, payload }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Payload text with its block markers stripped.
    pub fn payload(&self) -> &str {
        &self.payload
    }
}

/// A named, typed JSON configuration payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonConfig {
    name: String,
    #[serde(rename = "type")]
    config_type: String,
    subtype: String,
    payload: String,
}

impl JsonConfig {
    pub fn new(name: String, config_type: String, subtype: String, payload: String) -> Self {
        Self {
            name,
            config_type,
            subtype,
            payload,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn config_type(&self) -> &str {
        &self.config_type
    }

    pub fn subtype(&self) -> &str {
        &self.subtype
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }
}
