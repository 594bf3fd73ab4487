//! Port type definitions for component inputs and outputs.
//!
//! Every port declares its data type as either an artifact (a typed data
//! object identified by a schema title) or a parameter (a scalar value
//! with a primitive type name). The serialized form is a single-key
//! mapping — `Artifact:` or `Parameter:` — and any other key fails
//! deserialization, so each port resolves to exactly one leaf type.

use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, SpecError};
use crate::ontology::{self, ArtifactKind};

/// Artifact port type: a typed data object passed between components.
///
/// The schema title is resolved against the artifact ontology; unknown
/// titles fail validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactSpec {
    /// Schema title naming this artifact's type in the ontology.
    pub schema_title: String,
}

impl ArtifactSpec {
    /// Creates an artifact spec from a raw schema title.
    ///
    /// The title is not checked here; resolution happens during
    /// validation so that parse and validate stay separate phases.
    pub fn new(schema_title: impl Into<String>) -> Self {
        Self {
            schema_title: schema_title.into(),
        }
    }

    /// Creates an artifact spec for a known artifact kind.
    pub fn of_kind(kind: ArtifactKind) -> Self {
        Self {
            schema_title: kind.schema_title().to_string(),
        }
    }

    /// Resolves the schema title to its concrete artifact kind.
    pub fn resolve(&self) -> Result<ArtifactKind, SpecError> {
        ontology::resolve_schema_title(&self.schema_title)
    }

    /// Validates that the schema title resolves against the ontology.
    pub fn validate(&self) -> Result<(), SpecError> {
        self.resolve().map(|_| ())
    }

    /// Rehydrates artifact metadata from a JSON string.
    ///
    /// Container entrypoints receive artifact metadata on the command
    /// line as JSON; this is the inverse of [`ArtifactSpec::to_json_string`].
    pub fn from_json_str(text: &str) -> Result<Self, LoaderError> {
        let artifact: ArtifactSpec = serde_json::from_str(text)?;
        artifact.validate()?;
        Ok(artifact)
    }

    /// Serializes artifact metadata to a JSON string for command-line
    /// transport.
    pub fn to_json_string(&self) -> Result<String, LoaderError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Parameter port type: a scalar value with a primitive type name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterSpec {
    /// Primitive type name of the parameter value (e.g. "String", "Integer").
    #[serde(rename = "type")]
    pub param_type: String,
}

impl ParameterSpec {
    /// Creates a parameter spec with the given type name.
    pub fn new(param_type: impl Into<String>) -> Self {
        Self {
            param_type: param_type.into(),
        }
    }

    /// Validates the parameter type name for the named port.
    pub fn validate(&self, port: &str) -> Result<(), SpecError> {
        if self.param_type.is_empty() {
            return Err(SpecError::EmptyParameterType {
                port: port.to_string(),
            });
        }
        Ok(())
    }
}

/// Declared data type of an input or output port.
///
/// Serialized as a single-key mapping whose key selects the leaf type;
/// port fields apply `serde_yaml::with::singleton_map` so the YAML form
/// is `Artifact:`/`Parameter:` rather than a YAML tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PortType {
    /// Typed data object resolved through the artifact ontology.
    Artifact(ArtifactSpec),
    /// Scalar/primitive value.
    Parameter(ParameterSpec),
}

impl PortType {
    /// Creates an artifact port type of a known kind.
    pub fn artifact(kind: ArtifactKind) -> Self {
        PortType::Artifact(ArtifactSpec::of_kind(kind))
    }

    /// Creates a parameter port type with the given type name.
    pub fn parameter(param_type: impl Into<String>) -> Self {
        PortType::Parameter(ParameterSpec::new(param_type))
    }

    /// Validates the leaf type for the named port.
    pub fn validate(&self, port: &str) -> Result<(), SpecError> {
        match self {
            PortType::Artifact(artifact) => artifact.validate(),
            PortType::Parameter(parameter) => parameter.validate(port),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_port_serialization_uses_tag_key() {
        let port = PortType::artifact(ArtifactKind::Dataset);
        let json = serde_json::to_string(&port).expect("serialization should succeed");
        assert!(json.contains("\"Artifact\""));
        assert!(json.contains("aiplatform.Dataset.v1"));
    }

    #[test]
    fn test_parameter_port_serialization_uses_tag_key() {
        let port = PortType::parameter("String");
        let json = serde_json::to_string(&port).expect("serialization should succeed");
        assert!(json.contains("\"Parameter\""));
        assert!(json.contains("\"type\":\"String\""));
    }

    #[test]
    fn test_unknown_tag_key_fails() {
        let result: Result<PortType, _> =
            serde_json::from_str(r#"{"Widget":{"schema_title":"aiplatform.Dataset.v1"}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_artifact_resolves_to_kind() {
        let artifact = ArtifactSpec::new("aiplatform.Model.v1");
        assert_eq!(
            artifact.resolve().expect("should resolve"),
            ArtifactKind::Model
        );
    }

    #[test]
    fn test_unknown_schema_title_fails_validation() {
        let artifact = ArtifactSpec::new("vendor.Unknown.v1");
        let result = artifact.validate();
        assert!(matches!(result, Err(SpecError::UnknownSchemaTitle(_))));
    }

    #[test]
    fn test_empty_parameter_type_fails_validation() {
        let parameter = ParameterSpec::new("");
        let result = parameter.validate("epochs");
        assert!(matches!(
            result,
            Err(SpecError::EmptyParameterType { port }) if port == "epochs"
        ));
    }

    #[test]
    fn test_parameter_missing_type_field_fails() {
        let result: Result<ParameterSpec, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }

    #[test]
    fn test_artifact_json_rehydration() {
        let artifact = ArtifactSpec::of_kind(ArtifactKind::Dataset);
        let json = artifact
            .to_json_string()
            .expect("serialization should succeed");

        let rehydrated =
            ArtifactSpec::from_json_str(&json).expect("rehydration should succeed");
        assert_eq!(rehydrated, artifact);
    }

    #[test]
    fn test_artifact_rehydration_rejects_unknown_title() {
        let result = ArtifactSpec::from_json_str(r#"{"schema_title":"vendor.Unknown.v1"}"#);
        assert!(matches!(
            result,
            Err(LoaderError::Spec(SpecError::UnknownSchemaTitle(_)))
        ));
    }
}
