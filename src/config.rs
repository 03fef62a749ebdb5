//! Generator configuration
//!
//! Naming conventions that the analyzer and collector apply. Every field has
//! a default, so an empty YAML document is a valid configuration.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

// ============================================================================
// Generator Config
// ============================================================================

/// Configuration loaded from YAML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Synthetic field name the request and response values are analyzed under
    #[serde(default = "default_root_name")]
    pub root_name: String,

    /// Error handling type names
    #[serde(default)]
    pub errors: ErrorTypeConfig,

    /// Identifier legalization rules
    #[serde(default)]
    pub naming: NamingConfig,
}

fn default_root_name() -> String {
    "root".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            root_name: default_root_name(),
            errors: ErrorTypeConfig::default(),
            naming: NamingConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: path.display().to_string(),
                }
            } else {
                Error::config(format!(
                    "Failed to read config file '{}': {e}",
                    path.display()
                ))
            }
        })?;
        Self::from_yaml_str(&content)
    }

    /// Parse a configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: GeneratorConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every configured name is usable
    pub fn validate(&self) -> Result<()> {
        if self.root_name.is_empty() {
            return Err(Error::invalid_config("root_name", "cannot be empty"));
        }
        if self.errors.base_type.is_empty() {
            return Err(Error::invalid_config("errors.base_type", "cannot be empty"));
        }
        if self.errors.canonical_type.is_empty() {
            return Err(Error::invalid_config(
                "errors.canonical_type",
                "cannot be empty",
            ));
        }
        if self.naming.reserved_marker.is_empty() {
            return Err(Error::invalid_config(
                "naming.reserved_marker",
                "cannot be empty",
            ));
        }
        if self.naming.reserved_identifiers.iter().any(String::is_empty) {
            return Err(Error::invalid_config(
                "naming.reserved_identifiers",
                "entries cannot be empty",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Names of the designated base error type and its canonical form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTypeConfig {
    /// Type name renamed when its fields are registered
    #[serde(default = "default_base_type")]
    pub base_type: String,

    /// Name the base error type is registered under
    #[serde(default = "default_canonical_type")]
    pub canonical_type: String,

    /// Operation-name prefix that never yields an operation hint
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Pseudo-fields dropped from the canonical error type's field list
    #[serde(default = "default_suppressed_fields")]
    pub suppressed_fields: Vec<String>,
}

fn default_base_type() -> String {
    "ErrorResponseBase".to_string()
}

fn default_canonical_type() -> String {
    "ErrorResponse".to_string()
}

fn default_marker() -> String {
    "Error".to_string()
}

fn default_suppressed_fields() -> Vec<String> {
    vec!["isOutputStruct".to_string()]
}

impl Default for ErrorTypeConfig {
    fn default() -> Self {
        Self {
            base_type: default_base_type(),
            canonical_type: default_canonical_type(),
            marker: default_marker(),
            suppressed_fields: default_suppressed_fields(),
        }
    }
}

impl ErrorTypeConfig {
    pub fn is_base_type(&self, type_name: &str) -> bool {
        self.base_type == type_name
    }

    pub fn is_suppressed(&self, field: &str) -> bool {
        self.suppressed_fields.iter().any(|f| f == field)
    }
}

// ============================================================================
// Naming
// ============================================================================

/// Reserved identifiers and the marker appended to colliding field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Field names that collide with target-language keywords
    #[serde(default = "default_reserved_identifiers")]
    pub reserved_identifiers: BTreeSet<String>,

    /// Appended to a legalized field name found in `reserved_identifiers`
    #[serde(default = "default_reserved_marker")]
    pub reserved_marker: String,
}

fn default_reserved_identifiers() -> BTreeSet<String> {
    ["asm"].into_iter().map(String::from).collect()
}

fn default_reserved_marker() -> String {
    "_".to_string()
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            reserved_identifiers: default_reserved_identifiers(),
            reserved_marker: default_reserved_marker(),
        }
    }
}

impl NamingConfig {
    pub fn is_reserved(&self, identifier: &str) -> bool {
        self.reserved_identifiers.contains(identifier)
    }
}
