//! Persistence handles consumed by the admin host.
//!
//! The admin panel never looks inside a model or client handle; it only
//! hands them to the host's resource adapter.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::{Error, Result};
use crate::model::ModelName;

/// Opaque handle for a persisted model.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ModelHandle(Value);

impl ModelHandle {
    /// Wrap a host-defined model handle.
    pub fn new(handle: Value) -> Self {
        Self(handle)
    }

    /// The raw handle value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Opaque handle for the persistence client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ClientHandle(Value);

impl ClientHandle {
    /// Wrap a host-defined client handle.
    pub fn new(handle: Value) -> Self {
        Self(handle)
    }

    /// The raw handle value.
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// Resolves model names to handles the host's resource adapter understands.
pub trait ModelResolver {
    /// Failure reported by the persistence collaborator.
    type Error;

    /// Look up the handle for a model.
    fn resolve(&self, model: ModelName) -> std::result::Result<ModelHandle, Self::Error>;

    /// The client handle attached to every resource.
    fn client(&self) -> ClientHandle;
}

/// In-memory resolver backed by a fixed set of registered models.
#[derive(Debug, Clone)]
pub struct CatalogResolver {
    client: ClientHandle,
    models: BTreeMap<ModelName, ModelHandle>,
}

impl CatalogResolver {
    /// Create an empty resolver for the given client.
    pub fn new(client: ClientHandle) -> Self {
        Self {
            client,
            models: BTreeMap::new(),
        }
    }

    /// Create a resolver with every known model registered under its own name.
    pub fn with_all_models(client: ClientHandle) -> Self {
        ModelName::ALL
            .into_iter()
            .fold(Self::new(client), |resolver, model| {
                resolver.with_model(model, ModelHandle::new(json!({ "name": model.as_str() })))
            })
    }

    /// Register a model handle.
    pub fn with_model(mut self, model: ModelName, handle: ModelHandle) -> Self {
        self.models.insert(model, handle);
        self
    }
}

impl ModelResolver for CatalogResolver {
    type Error = Error;

    fn resolve(&self, model: ModelName) -> Result<ModelHandle> {
        self.models
            .get(&model)
            .cloned()
            .ok_or_else(|| Error::UnknownModel(model.to_string()))
    }

    fn client(&self) -> ClientHandle {
        self.client.clone()
    }
}
