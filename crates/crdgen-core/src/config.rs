//! Custom resource configuration
//!
//! The subset of the custom resource configuration this engine reads.

use serde::Deserialize;

use crate::error::Result;

/// Custom resource configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomResourceConfig {
    /// Explicit status type, or [`CustomResourceConfig::AUTODETECT`]
    #[serde(default = "default_status_class_name")]
    pub status_class_name: String,

    /// API group (e.g., "example.io")
    #[serde(default)]
    pub group: Option<String>,

    /// API version (e.g., "v1")
    #[serde(default)]
    pub version: Option<String>,

    /// Kind, defaults to the simple name of the root type
    #[serde(default)]
    pub kind: Option<String>,

    /// Plural resource name, defaults to the lowercase kind plus "s"
    #[serde(default)]
    pub plural: Option<String>,
}

fn default_status_class_name() -> String {
    CustomResourceConfig::AUTODETECT.to_string()
}

impl Default for CustomResourceConfig {
    fn default() -> Self {
        Self {
            status_class_name: default_status_class_name(),
            group: None,
            version: None,
            kind: None,
            plural: None,
        }
    }
}

impl CustomResourceConfig {
    /// Sentinel asking for the status type to be detected from properties
    pub const AUTODETECT: &'static str = "io.dekorate.crd.config.AutoDetect";

    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Configuration with an explicit status type
    pub fn with_status_class(mut self, name: impl Into<String>) -> Self {
        self.status_class_name = name.into();
        self
    }

    /// The explicit status type name, if one is configured
    pub fn explicit_status_class(&self) -> Option<&str> {
        (self.status_class_name != Self::AUTODETECT).then_some(self.status_class_name.as_str())
    }
}
