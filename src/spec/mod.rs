//! Component specification data model.
//!
//! This module defines the typed object graph a component document parses
//! into: [`ComponentSpec`] at the root, input/output ports with a
//! [`PortType`] each, and the container implementation. Construction
//! happens either through the loader (from YAML text) or through the
//! builder-style constructors; both paths end in the same immutable tree.
//!
//! # Example
//!
//! ```ignore
//! use pipespec::spec::{ComponentSpec, ContainerSpec, ImplementationSpec};
//!
//! let trainer = ComponentSpec::new(
//!     "trainer",
//!     ImplementationSpec::new(ContainerSpec::new(
//!         "gcr.io/my-project/trainer",
//!         vec!["python3".into(), "train.py".into()],
//!     )),
//! );
//! assert!(trainer.validate().is_ok());
//! ```

pub mod component;
pub mod types;

pub use component::{
    ComponentSpec, ContainerSpec, ImplementationSpec, InputSpec, OutputSpec,
    DEFAULT_COMPONENT_VERSION,
};
pub use types::{ArtifactSpec, ParameterSpec, PortType};
