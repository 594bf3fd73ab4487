//! Component document loading and the component registry.
//!
//! Parses component YAML documents into [`ComponentSpec`] trees, attaches
//! a content digest for identity/caching, and caches loaded components by
//! name. Loading is synchronous, in-memory object construction: the only
//! I/O is reading the document the caller points at.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};
use tracing::debug;

use crate::error::LoaderError;
use crate::spec::ComponentSpec;

/// Computes the content digest of a component document.
///
/// SHA-256 over the document bytes with `\r\n` normalized to `\n`, so the
/// same document hashes identically regardless of platform line endings.
/// Returned as lowercase hex.
pub fn content_digest(data: &[u8]) -> String {
    let mut normalized = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if data[i] == b'\r' && data.get(i + 1) == Some(&b'\n') {
            normalized.push(b'\n');
            i += 2;
        } else {
            normalized.push(data[i]);
            i += 1;
        }
    }

    let mut hasher = Sha256::new();
    hasher.update(&normalized);
    hex::encode(hasher.finalize())
}

/// Loads a component specification from YAML text.
///
/// Fails on empty/blank input, malformed documents, unresolvable schema
/// titles, and any structural validation error. The returned spec carries
/// the content digest of `text`.
pub fn load_component_from_text(text: &str) -> Result<ComponentSpec, LoaderError> {
    load_component_from_bytes(text.as_bytes())
}

/// Loads a component specification from raw document bytes.
pub fn load_component_from_bytes(data: &[u8]) -> Result<ComponentSpec, LoaderError> {
    if data.iter().all(|b| b.is_ascii_whitespace()) {
        return Err(LoaderError::EmptyDocument);
    }

    let mut spec: ComponentSpec = serde_yaml::from_slice(data)?;
    spec.validate()?;
    spec.digest = Some(content_digest(data));

    debug!(component = %spec.name, "loaded component spec");
    Ok(spec)
}

/// Loads a component specification from a YAML file on disk.
///
/// Parse failures are reported with the file path attached.
pub fn load_component_from_file<P: AsRef<Path>>(path: P) -> Result<ComponentSpec, LoaderError> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    load_component_from_bytes(&data).map_err(|e| match e {
        LoaderError::Yaml(err) => LoaderError::ParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        },
        other => other,
    })
}

/// Registry of loaded component specifications, keyed by component name.
///
/// The content digest doubles as an identity: [`ComponentRegistry::get_by_digest`]
/// finds a previously loaded component by its document hash, independent
/// of its name.
#[derive(Debug, Default)]
pub struct ComponentRegistry {
    /// Loaded components keyed by component name.
    components: HashMap<String, ComponentSpec>,
    /// Source paths of file-loaded components, keyed by component name.
    loaded_paths: HashMap<String, PathBuf>,
}

impl ComponentRegistry {
    /// Creates a new empty registry.
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
            loaded_paths: HashMap::new(),
        }
    }

    /// Loads a single component from a YAML file.
    ///
    /// The component is validated during loading. Duplicate component
    /// names are rejected and the registry is left unchanged.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P) -> Result<&ComponentSpec, LoaderError> {
        let path = path.as_ref();
        let spec = load_component_from_file(path)?;

        if self.components.contains_key(&spec.name) {
            return Err(LoaderError::DuplicateComponent(spec.name.clone()));
        }

        let name = spec.name.clone();
        self.components.insert(name.clone(), spec);
        self.loaded_paths.insert(name.clone(), path.to_path_buf());

        Ok(self
            .components
            .get(&name)
            .expect("component was just inserted"))
    }

    /// Loads all component YAML files from a directory (non-recursive).
    ///
    /// Files must have a `.yaml` or `.yml` extension to be loaded.
    /// Returns the number of components successfully loaded.
    pub fn load_directory<P: AsRef<Path>>(&mut self, dir: P) -> Result<usize, LoaderError> {
        let dir = dir.as_ref();
        let mut count = 0;

        let entries = fs::read_dir(dir).map_err(LoaderError::Io)?;

        for entry in entries {
            let entry = entry.map_err(LoaderError::Io)?;
            let path = entry.path();

            if path.is_dir() {
                continue;
            }

            let is_yaml = path
                .extension()
                .map(|ext| ext == "yaml" || ext == "yml")
                .unwrap_or(false);

            if is_yaml {
                self.load_file(&path)?;
                count += 1;
            }
        }

        Ok(count)
    }

    /// Registers a component directly without loading from file.
    ///
    /// The component is validated before being added.
    pub fn register(&mut self, spec: ComponentSpec) -> Result<(), LoaderError> {
        spec.validate()?;

        if self.components.contains_key(&spec.name) {
            return Err(LoaderError::DuplicateComponent(spec.name.clone()));
        }

        self.components.insert(spec.name.clone(), spec);
        Ok(())
    }

    /// Gets a component by its name.
    pub fn get(&self, name: &str) -> Result<&ComponentSpec, LoaderError> {
        self.components
            .get(name)
            .ok_or_else(|| LoaderError::NotFound(name.to_string()))
    }

    /// Gets a component by its name, returning None if not found.
    pub fn get_opt(&self, name: &str) -> Option<&ComponentSpec> {
        self.components.get(name)
    }

    /// Gets a component by its content digest.
    pub fn get_by_digest(&self, digest: &str) -> Option<&ComponentSpec> {
        self.components
            .values()
            .find(|spec| spec.digest.as_deref() == Some(digest))
    }

    /// Gets the file path from which a component was loaded, if any.
    pub fn get_path(&self, name: &str) -> Option<&Path> {
        self.loaded_paths.get(name).map(|p| p.as_path())
    }

    /// Returns the number of loaded components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Returns true if no components are loaded.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns an iterator over all component names.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(|s| s.as_str())
    }

    /// Returns an iterator over all loaded components.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ComponentSpec)> {
        self.components.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Removes a component from the registry.
    ///
    /// Returns true if the component was present and removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let removed = self.components.remove(name).is_some();
        self.loaded_paths.remove(name);
        removed
    }

    /// Clears all loaded components.
    pub fn clear(&mut self) {
        self.components.clear();
        self.loaded_paths.clear();
    }
}
