//! Integration tests for component document loading.
//!
//! Exercises the full path: YAML text -> typed spec -> validation ->
//! digest, plus the registry over a directory of documents.

use std::fs;

use pipespec::loader::{self, ComponentRegistry};
use pipespec::ontology::ArtifactKind;
use pipespec::spec::PortType;
use pipespec::{LoaderError, SpecError};

const DEMO_COMPONENT: &str = r#"
name: My Demo Component
description: test
inputs:
  - name: dataset_in
    description: demo input
    type:
      Artifact:
        schema_title: aiplatform.Dataset.v1
outputs:
  - name: model_out
    description: demo output
    type:
      Artifact:
        schema_title: aiplatform.Model.v1
implementation:
  container:
    image: gcr.io/test-image
    args:
      - python3
      - myentrypoint.py
"#;

const TRAINER_COMPONENT: &str = r#"
name: trainer
description: Trains a model from transformed examples
inputs:
  - name: examples
    type:
      Artifact:
        schema_title: aiplatform.Dataset.v1
  - name: train_steps
    description: Number of training steps
    type:
      Parameter:
        type: Integer
outputs:
  - name: model
    type:
      Artifact:
        schema_title: aiplatform.Model.v1
implementation:
  container:
    image: gcr.io/my-project/trainer:0.15.0
    command:
      - python3
    args:
      - -m
      - trainer.task
"#;

#[test]
fn test_demo_component_loads() {
    let spec = loader::load_component_from_text(DEMO_COMPONENT).expect("loading should succeed");

    assert_eq!(spec.name, "My Demo Component");
    assert_eq!(spec.description.as_deref(), Some("test"));
    assert_eq!(spec.implementation.container.image, "gcr.io/test-image");
    assert_eq!(
        spec.implementation.container.args,
        vec!["python3", "myentrypoint.py"]
    );
}

#[test]
fn test_every_port_has_exactly_one_leaf_type() {
    let spec = loader::load_component_from_text(TRAINER_COMPONENT).expect("loading should succeed");

    assert_eq!(spec.inputs.len(), 2);
    assert_eq!(spec.outputs.len(), 1);

    match &spec.inputs[0].port_type {
        PortType::Artifact(artifact) => {
            assert_eq!(
                artifact.resolve().expect("should resolve"),
                ArtifactKind::Dataset
            );
        }
        PortType::Parameter(_) => panic!("examples should be an artifact port"),
    }
    match &spec.inputs[1].port_type {
        PortType::Parameter(parameter) => assert_eq!(parameter.param_type, "Integer"),
        PortType::Artifact(_) => panic!("train_steps should be a parameter port"),
    }
    match &spec.outputs[0].port_type {
        PortType::Artifact(artifact) => {
            assert_eq!(
                artifact.resolve().expect("should resolve"),
                ArtifactKind::Model
            );
        }
        PortType::Parameter(_) => panic!("model should be an artifact port"),
    }
}

#[test]
fn test_round_trip_preserves_fields() {
    let spec = loader::load_component_from_text(TRAINER_COMPONENT).expect("loading should succeed");
    let yaml = spec.to_yaml().expect("serialization should succeed");
    let reloaded = loader::load_component_from_text(&yaml).expect("reloading should succeed");

    assert_eq!(reloaded.name, spec.name);
    assert_eq!(reloaded.description, spec.description);
    assert_eq!(
        reloaded.implementation.container.image,
        spec.implementation.container.image
    );
    assert_eq!(
        reloaded.implementation.container.command,
        spec.implementation.container.command
    );
    assert_eq!(
        reloaded.implementation.container.args,
        spec.implementation.container.args
    );
    assert_eq!(reloaded.inputs, spec.inputs);
    assert_eq!(reloaded.outputs, spec.outputs);
    assert_eq!(reloaded.version, spec.version);
}

#[test]
fn test_unknown_schema_title_always_fails() {
    let text = DEMO_COMPONENT.replace("aiplatform.Model.v1", "aiplatform.Metrics.v1");
    let result = loader::load_component_from_text(&text);
    assert!(matches!(
        result,
        Err(LoaderError::Spec(SpecError::UnknownSchemaTitle(_)))
    ));
}

#[test]
fn test_unknown_port_type_tag_always_fails() {
    let text = DEMO_COMPONENT.replace("Artifact:", "Widget:");
    let result = loader::load_component_from_text(&text);
    assert!(result.is_err());
}

#[test]
fn test_digest_is_stable_across_line_endings() {
    let crlf = DEMO_COMPONENT.replace('\n', "\r\n");

    let spec = loader::load_component_from_text(DEMO_COMPONENT).expect("loading should succeed");
    let spec_crlf = loader::load_component_from_text(&crlf).expect("loading should succeed");

    assert!(spec.digest.is_some());
    assert_eq!(spec.digest, spec_crlf.digest);
}

#[test]
fn test_registry_scan_and_digest_lookup() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("demo.yaml"), DEMO_COMPONENT).expect("failed to write demo.yaml");
    fs::write(dir.path().join("trainer.yaml"), TRAINER_COMPONENT)
        .expect("failed to write trainer.yaml");

    let mut registry = ComponentRegistry::new();
    let count = registry
        .load_directory(dir.path())
        .expect("directory load should succeed");
    assert_eq!(count, 2);

    let trainer = registry.get("trainer").expect("trainer should be loaded");
    let digest = trainer.digest.clone().expect("loader should attach digest");

    let by_digest = registry
        .get_by_digest(&digest)
        .expect("digest lookup should hit");
    assert_eq!(by_digest.name, "trainer");
}

#[test]
fn test_registry_rejects_duplicate_names() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    fs::write(dir.path().join("a.yaml"), DEMO_COMPONENT).expect("failed to write a.yaml");
    fs::write(dir.path().join("b.yaml"), DEMO_COMPONENT).expect("failed to write b.yaml");

    let mut registry = ComponentRegistry::new();
    let result = registry.load_directory(dir.path());
    assert!(matches!(result, Err(LoaderError::DuplicateComponent(_))));
}
