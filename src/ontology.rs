//! Artifact type ontology.
//!
//! Artifact ports declare their type through a schema title, a string
//! naming an entry in a fixed ontology. Deserialization resolves each
//! title to the concrete [`ArtifactKind`] it names; titles absent from
//! the table are a hard error.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Schema title registered for dataset artifacts.
pub const DATASET_SCHEMA_TITLE: &str = "aiplatform.Dataset.v1";

/// Schema title registered for model artifacts.
pub const MODEL_SCHEMA_TITLE: &str = "aiplatform.Model.v1";

/// Concrete artifact types the ontology resolves to.
///
/// New artifact kinds are added by extending this enum and the table in
/// [`resolve_schema_title`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A dataset passed between pipeline steps.
    Dataset,
    /// A trained model produced or consumed by a pipeline step.
    Model,
}

impl ArtifactKind {
    /// Returns the schema title registered for this artifact kind.
    pub fn schema_title(&self) -> &'static str {
        match self {
            ArtifactKind::Dataset => DATASET_SCHEMA_TITLE,
            ArtifactKind::Model => MODEL_SCHEMA_TITLE,
        }
    }
}

/// Resolves a schema title to the artifact kind it names.
///
/// Titles not present in the ontology are rejected.
pub fn resolve_schema_title(schema_title: &str) -> Result<ArtifactKind, SpecError> {
    match schema_title {
        DATASET_SCHEMA_TITLE => Ok(ArtifactKind::Dataset),
        MODEL_SCHEMA_TITLE => Ok(ArtifactKind::Model),
        other => Err(SpecError::UnknownSchemaTitle(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_known_titles() {
        assert_eq!(
            resolve_schema_title("aiplatform.Dataset.v1").expect("should resolve"),
            ArtifactKind::Dataset
        );
        assert_eq!(
            resolve_schema_title("aiplatform.Model.v1").expect("should resolve"),
            ArtifactKind::Model
        );
    }

    #[test]
    fn test_resolve_unknown_title_fails() {
        let result = resolve_schema_title("aiplatform.Metrics.v1");
        assert!(matches!(result, Err(SpecError::UnknownSchemaTitle(_))));
    }

    #[test]
    fn test_schema_title_round_trip() {
        for kind in [ArtifactKind::Dataset, ArtifactKind::Model] {
            let resolved = resolve_schema_title(kind.schema_title()).expect("should resolve");
            assert_eq!(resolved, kind);
        }
    }
}
