//! Error types for pipespec operations.
//!
//! Defines error types for the two subsystems:
//! - Component-spec structure and validation
//! - Document loading and the component registry

use thiserror::Error;

/// Errors that can occur while validating a parsed component specification.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("Unknown schema title '{0}': not registered in the artifact ontology")]
    UnknownSchemaTitle(String),

    #[error("Component name must be non-empty")]
    EmptyComponentName,

    #[error("Port name must be non-empty in component '{0}'")]
    EmptyPortName(String),

    #[error("Parameter type for port '{port}' must be a non-empty string")]
    EmptyParameterType { port: String },

    #[error("Duplicate port name '{name}' in component '{component}'")]
    DuplicatePortName { component: String, name: String },

    #[error("Missing required field '{field}' in component '{component}'")]
    MissingRequiredField { component: String, field: String },

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while loading component documents.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Component document is empty")]
    EmptyDocument,

    #[error("Failed to parse component document '{path}': {message}")]
    ParseError { path: String, message: String },

    #[error("Component '{0}' not found in registry")]
    NotFound(String),

    #[error("Component '{0}' already exists in registry")]
    DuplicateComponent(String),

    #[error("Spec validation failed: {0}")]
    Spec(#[from] SpecError),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
