//! Component specification tree.
//!
//! A component is one reusable, containerized pipeline step: named input
//! and output ports with declared types, plus the container invocation
//! implementing it. Specs are immutable after construction; the loader
//! builds them from YAML documents and the tree round-trips through serde
//! unchanged.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{LoaderError, SpecError};
use crate::spec::types::PortType;

/// Version string stamped on components that do not declare one.
pub const DEFAULT_COMPONENT_VERSION: &str = "pipespec/component/v1";

/// Container invocation for a component implementation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContainerSpec {
    /// Container image reference.
    pub image: String,
    /// Entrypoint override. Empty means the image default.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub command: Vec<String>,
    /// Ordered command-line arguments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<String>,
}

impl ContainerSpec {
    /// Creates a container spec with an image and arguments.
    pub fn new(image: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            image: image.into(),
            command: Vec::new(),
            args,
        }
    }

    /// Sets the entrypoint command.
    pub fn with_command(mut self, command: Vec<String>) -> Self {
        self.command = command;
        self
    }

    /// Validates the container invocation.
    pub fn validate(&self, component: &str) -> Result<(), SpecError> {
        if self.image.is_empty() {
            return Err(SpecError::MissingRequiredField {
                component: component.to_string(),
                field: "implementation.container.image".to_string(),
            });
        }
        Ok(())
    }
}

/// Component implementation selector.
///
/// Container execution is the only implementation supported; other kinds
/// (e.g. service calls) would add fields here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImplementationSpec {
    /// The container invocation implementing the component.
    pub container: ContainerSpec,
}

impl ImplementationSpec {
    /// Creates a container-backed implementation.
    pub fn new(container: ContainerSpec) -> Self {
        Self { container }
    }

    /// Validates the implementation.
    pub fn validate(&self, component: &str) -> Result<(), SpecError> {
        self.container.validate(component)
    }
}

/// A named, typed input port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputSpec {
    /// Port name, unique among the component's inputs.
    pub name: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared data type of the port.
    #[serde(rename = "type", with = "serde_yaml::with::singleton_map")]
    pub port_type: PortType,
}

impl InputSpec {
    /// Creates an input port with a name and declared type.
    pub fn new(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            name: name.into(),
            description: None,
            port_type,
        }
    }

    /// Adds a description to this port.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the port name and declared type.
    pub fn validate(&self, component: &str) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyPortName(component.to_string()));
        }
        self.port_type.validate(&self.name)
    }
}

/// A named, typed output port.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputSpec {
    /// Port name, unique among the component's outputs.
    pub name: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Declared data type of the port.
    #[serde(rename = "type", with = "serde_yaml::with::singleton_map")]
    pub port_type: PortType,
}

impl OutputSpec {
    /// Creates an output port with a name and declared type.
    pub fn new(name: impl Into<String>, port_type: PortType) -> Self {
        Self {
            name: name.into(),
            description: None,
            port_type,
        }
    }

    /// Adds a description to this port.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Validates the port name and declared type.
    pub fn validate(&self, component: &str) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyPortName(component.to_string()));
        }
        self.port_type.validate(&self.name)
    }
}

/// A reusable pipeline-step definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSpec {
    /// Component name.
    pub name: String,
    /// Human-readable description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordered input ports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<InputSpec>,
    /// Ordered output ports.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<OutputSpec>,
    /// The implementation executing this component.
    pub implementation: ImplementationSpec,
    /// Specification format version.
    #[serde(default = "default_version")]
    pub version: String,
    /// Content digest of the source document, attached by the loader.
    /// Hand-built specs have none; the digest is never serialized.
    #[serde(skip)]
    pub digest: Option<String>,
}

/// Default value for the `version` field.
fn default_version() -> String {
    DEFAULT_COMPONENT_VERSION.to_string()
}

impl ComponentSpec {
    /// Creates a component spec with the default version and no ports.
    pub fn new(name: impl Into<String>, implementation: ImplementationSpec) -> Self {
        Self {
            name: name.into(),
            description: None,
            inputs: Vec::new(),
            outputs: Vec::new(),
            implementation,
            version: default_version(),
            digest: None,
        }
    }

    /// Adds a description to the component.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Appends an input port.
    pub fn with_input(mut self, input: InputSpec) -> Self {
        self.inputs.push(input);
        self
    }

    /// Appends an output port.
    pub fn with_output(mut self, output: OutputSpec) -> Self {
        self.outputs.push(output);
        self
    }

    /// Overrides the specification format version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Validates the entire component tree.
    ///
    /// Checks the component name, the container implementation, every
    /// port (including ontology resolution for artifact ports), and
    /// port-name uniqueness within inputs and within outputs.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.name.is_empty() {
            return Err(SpecError::EmptyComponentName);
        }

        self.implementation.validate(&self.name)?;

        let mut input_names = HashSet::new();
        for input in &self.inputs {
            input.validate(&self.name)?;
            if !input_names.insert(input.name.as_str()) {
                return Err(SpecError::DuplicatePortName {
                    component: self.name.clone(),
                    name: input.name.clone(),
                });
            }
        }

        let mut output_names = HashSet::new();
        for output in &self.outputs {
            output.validate(&self.name)?;
            if !output_names.insert(output.name.as_str()) {
                return Err(SpecError::DuplicatePortName {
                    component: self.name.clone(),
                    name: output.name.clone(),
                });
            }
        }

        Ok(())
    }

    /// Serializes the component to a YAML document.
    pub fn to_yaml(&self) -> Result<String, LoaderError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes the component to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, LoaderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
