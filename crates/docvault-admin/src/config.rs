//! Admin panel configuration.

use std::path::{Path, PathBuf};

/// Default directory holding the custom component sources.
pub const DEFAULT_COMPONENT_ROOT: &str = "admin";

/// Environment variable carrying the relation feature license key.
pub const LICENSE_KEY_ENV: &str = "ADMINJS_RELATIONS_KEY";

/// Configuration for building the admin options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// License key for the host's relation feature, passed through untouched.
    pub license_key: Option<String>,

    /// Directory the custom component paths are resolved against.
    pub component_root: PathBuf,
}

impl AdminConfig {
    /// Create a configuration with the default component root and no license key.
    pub fn new() -> Self {
        Self {
            license_key: None,
            component_root: PathBuf::from(DEFAULT_COMPONENT_ROOT),
        }
    }

    /// Set the license key.
    pub fn with_license_key(mut self, license_key: impl Into<String>) -> Self {
        self.license_key = Some(license_key.into());
        self
    }

    /// Set the component root directory.
    pub fn with_component_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.component_root = root.into();
        self
    }

    /// Resolve a component source path against the component root.
    pub fn component_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.component_root.join(relative)
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::new()
    }
}
