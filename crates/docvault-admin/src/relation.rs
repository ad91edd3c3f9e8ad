//! Relation feature configuration.
//!
//! A parent model lists its child collections as [`RelationTarget`]s. Each
//! target becomes one entry of the relation map, keyed by the plural
//! collection name of the child:
//!
//! ```text
//! User -> [Authorization (one-to-many), SignIn (one-to-many)]
//!
//! authorizations: { type: one-to-many, target: { joinKey: "user", resourceId: "Authorization" } }
//! signIns:        { type: one-to-many, target: { joinKey: "user", resourceId: "SignIn" } }
//! ```

use std::collections::BTreeMap;
use std::sync::Arc;

use heck::{ToLowerCamelCase, ToSnakeCase};
use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::component::ComponentLoader;
use crate::descriptor::Feature;
use crate::model::{ModelName, RelationTarget, RelationshipType};

/// Relation entries keyed by collection name, in insertion order.
pub type RelationFeatureConfig = IndexMap<String, RelationEntry>;

/// One child collection in the relation map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationEntry {
    #[serde(rename = "type")]
    pub relationship_type: RelationshipType,
    pub target: RelationEndpoint,
}

/// Where the host finds the child records of a relation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationEndpoint {
    /// Field on the child records pointing at the parent.
    pub join_key: String,
    /// Resource holding the child records.
    pub resource_id: ModelName,
}

/// Payload of the owning-relation feature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OwningRelationSettings {
    pub component_loader: Arc<ComponentLoader>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_key: Option<String>,
    pub relations: RelationFeatureConfig,
}

/// Join key for children of `parent`: its name as lowercase words
/// separated by spaces (`UserProceeding` -> `user proceeding`).
pub fn join_key(parent: ModelName) -> String {
    parent.as_str().to_snake_case().replace('_', " ")
}

/// Builds relation features for parent and child resources.
#[derive(Debug, Clone)]
pub struct RelationConfigBuilder {
    component_loader: Arc<ComponentLoader>,
    license_key: Option<String>,
    plurals: BTreeMap<ModelName, String>,
}

impl RelationConfigBuilder {
    /// Create a builder sharing the host's component loader.
    ///
    /// The license key is passed to the host as given; a missing key is left
    /// for the host to handle.
    pub fn new(component_loader: Arc<ComponentLoader>, license_key: Option<String>) -> Self {
        Self {
            component_loader,
            license_key,
            plurals: BTreeMap::new(),
        }
    }

    /// Register the collection key of a model whose plural is irregular.
    pub fn with_plural(mut self, model: ModelName, key: impl Into<String>) -> Self {
        self.plurals.insert(model, key.into());
        self
    }

    /// Collection key for a child model.
    ///
    /// Registered plurals win; otherwise the lower camel case name plus `s`.
    pub fn plural_collection_key(&self, model: ModelName) -> String {
        match self.plurals.get(&model) {
            Some(key) => key.clone(),
            None => format!("{}s", model.as_str().to_lower_camel_case()),
        }
    }

    /// Relation map for a parent and its child collections.
    ///
    /// When two targets share a collection key the later one wins.
    pub fn relations(&self, parent: ModelName, targets: &[RelationTarget]) -> RelationFeatureConfig {
        let join_key = join_key(parent);
        let mut relations = RelationFeatureConfig::with_capacity(targets.len());

        for target in targets {
            let key = self.plural_collection_key(target.model_name);
            let entry = RelationEntry {
                relationship_type: target.relationship_type,
                target: RelationEndpoint {
                    join_key: join_key.clone(),
                    resource_id: target.model_name,
                },
            };
            if let Some(previous) = relations.insert(key.clone(), entry) {
                debug!(
                    parent = %parent,
                    key = %key,
                    replaced = %previous.target.resource_id,
                    "Relation key overwritten"
                );
            }
        }
        relations
    }

    /// Owning-relation feature for a parent and its child collections.
    pub fn owning(&self, parent: ModelName, targets: &[RelationTarget]) -> Feature {
        let relations = self.relations(parent, targets);
        debug!(parent = %parent, relations = relations.len(), "Built owning relation feature");

        Feature::OwningRelationSettings(OwningRelationSettings {
            component_loader: Arc::clone(&self.component_loader),
            license_key: self.license_key.clone(),
            relations,
        })
    }

    /// Feature marking a resource as linkable from its parents.
    pub fn target() -> Feature {
        Feature::TargetRelationSettings
    }
}
