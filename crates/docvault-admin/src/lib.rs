//! DocVault Admin - resource and relation descriptors for the admin panel.
//!
//! This crate computes the configuration an external admin host uses to
//! render CRUD views for the DocVault models:
//! - one resource descriptor per model, with field visibility and action hooks
//! - relation features linking owners (User, Folder, File) to their children
//! - JSON-safe serialization of File sizes in list and show responses
//!
//! Nothing here runs queries or renders UI; persistence is reached only
//! through a [`ModelResolver`].

pub mod admin;
pub mod component;
pub mod config;
pub mod descriptor;
pub mod error;
pub mod factory;
pub mod model;
pub mod relation;
pub mod resolver;
pub mod serializer;

pub use admin::{Admin, AdminComponents, AdminOptions, Dashboard};
pub use component::{ComponentLoader, ComponentRef};
pub use config::AdminConfig;
pub use descriptor::{
    ActionName, ActionOptions, Feature, Hook, PropertyOptions, ResourceDescriptor,
    ResourceOptions, ResourceRef, ViewVisibility, Visibility,
};
pub use error::{Error, Result};
pub use factory::ResourceDescriptorFactory;
pub use model::{ModelName, RelationTarget, RelationshipType};
pub use relation::{
    OwningRelationSettings, RelationConfigBuilder, RelationEndpoint, RelationEntry,
    RelationFeatureConfig,
};
pub use resolver::{CatalogResolver, ClientHandle, ModelHandle, ModelResolver};
