//! Custom UI components registered with the admin host.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::Serialize;

/// Reference to a registered component, by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ComponentRef(String);

impl ComponentRef {
    /// Component name as the host knows it.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Registry of custom components and the source files that implement them.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ComponentLoader {
    components: IndexMap<String, PathBuf>,
}

impl ComponentLoader {
    /// Create an empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component; re-registering a name replaces its source path.
    pub fn add(&mut self, name: impl Into<String>, path: impl Into<PathBuf>) -> ComponentRef {
        let name = name.into();
        self.components.insert(name.clone(), path.into());
        ComponentRef(name)
    }

    /// Source path of a registered component.
    pub fn path(&self, component: &ComponentRef) -> Option<&Path> {
        self.components.get(component.name()).map(PathBuf::as_path)
    }

    /// Number of registered components.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether no component is registered.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
