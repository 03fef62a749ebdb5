//! Error types for jsonmap
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for jsonmap
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Input Errors
    // ============================================================================
    #[error("Invalid input document: {message}")]
    InvalidDocument { message: String },

    #[error("{path}: invalid meta key '{key}': {message}")]
    InvalidMetaKey {
        path: String,
        key: String,
        message: String,
    },

    #[error("{path}: invalid type annotation '{annotation}': {message}")]
    InvalidTypeAnnotation {
        path: String,
        annotation: String,
        message: String,
    },

    // ============================================================================
    // Analysis Errors
    // ============================================================================
    #[error("{path}: inconsistent element types (expected {expected}, found {found})")]
    InconsistentElementTypes {
        path: String,
        expected: String,
        found: String,
    },

    #[error("{path}: nested arrays are not supported")]
    NestedArray { path: String },

    // ============================================================================
    // Collection Errors
    // ============================================================================
    #[error("{path}: list type {type_name} has no element to collect")]
    MissingElement { path: String, type_name: String },

    #[error("Type '{type_name}' defined twice with different fields: [{existing}] vs [{incoming}]")]
    ConflictingTypeDefinition {
        type_name: String,
        existing: String,
        incoming: String,
    },

    #[error("Type '{type_name}' is defined after '{referenced_by}', which refers to it")]
    ForwardReference {
        type_name: String,
        referenced_by: String,
    },

    #[error("document {index} ({name}): {source}")]
    Document {
        index: usize,
        name: String,
        #[source]
        source: Box<Error>,
    },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create an invalid document error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::InvalidDocument {
            message: message.into(),
        }
    }

    /// Create an invalid meta key error
    pub fn meta_key(
        path: impl Into<String>,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidMetaKey {
            path: path.into(),
            key: key.into(),
            message: message.into(),
        }
    }

    /// Create an invalid type annotation error
    pub fn annotation(
        path: impl Into<String>,
        annotation: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::InvalidTypeAnnotation {
            path: path.into(),
            annotation: annotation.into(),
            message: message.into(),
        }
    }

    /// Wrap an error raised while processing one document
    pub fn document(index: usize, name: impl Into<String>, source: Error) -> Self {
        Self::Document {
            index,
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// The innermost error, looking through document wrappers
    pub fn root_cause(&self) -> &Error {
        match self {
            Error::Document { source, .. } => source.root_cause(),
            other => other,
        }
    }

    /// Whether the error comes from the shape of an input document rather
    /// than from configuration or I/O
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.root_cause(),
            Error::InvalidDocument { .. }
                | Error::InvalidMetaKey { .. }
                | Error::InvalidTypeAnnotation { .. }
                | Error::InconsistentElementTypes { .. }
                | Error::NestedArray { .. }
                | Error::MissingElement { .. }
                | Error::ConflictingTypeDefinition { .. }
                | Error::ForwardReference { .. }
        )
    }
}

/// Result type alias for jsonmap
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}
