//! Resource descriptors handed to the admin host.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

use crate::component::ComponentRef;
use crate::relation::OwningRelationSettings;
use crate::resolver::{ClientHandle, ModelHandle};
use crate::serializer;

/// Declarative description of one admin resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceDescriptor {
    /// Persistence handles the host's adapter operates on.
    pub resource: ResourceRef,
    /// Field visibility and action configuration.
    pub options: ResourceOptions,
    /// Features attached to the resource, in order.
    pub features: Vec<Feature>,
}

impl ResourceDescriptor {
    /// Create a descriptor with no features.
    pub fn new(resource: ResourceRef, options: ResourceOptions) -> Self {
        Self {
            resource,
            options,
            features: Vec::new(),
        }
    }

    /// Replace the options wholesale.
    pub fn with_options(mut self, options: ResourceOptions) -> Self {
        self.options = options;
        self
    }

    /// Append a feature.
    pub fn with_feature(mut self, feature: Feature) -> Self {
        self.features.push(feature);
        self
    }

    /// The `after` hook configured for an action.
    pub fn after_hook(&self, action: ActionName) -> Option<Hook> {
        self.options.action(action).and_then(|options| options.after)
    }

    /// Run the action's `after` hook over a host response.
    ///
    /// Actions without an `after` hook return the response unchanged.
    pub fn run_after(&self, action: ActionName, response: &Value) -> Value {
        match self.after_hook(action) {
            Some(hook) => hook.apply(response),
            None => response.clone(),
        }
    }
}

/// Model and client handles for a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceRef {
    pub model: ModelHandle,
    pub client: ClientHandle,
}

/// Per-field and per-action options of a resource.
///
/// Overrides are shallow: setting a property or an action replaces any
/// previous entry under that name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResourceOptions {
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, PropertyOptions>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub actions: IndexMap<ActionName, ActionOptions>,
}

impl ResourceOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the options of one field.
    pub fn with_property(mut self, name: impl Into<String>, options: PropertyOptions) -> Self {
        self.properties.insert(name.into(), options);
        self
    }

    /// Set the options of one action.
    pub fn with_action(mut self, action: ActionName, options: ActionOptions) -> Self {
        self.actions.insert(action, options);
        self
    }

    /// Options of a field, if overridden.
    pub fn property(&self, name: &str) -> Option<&PropertyOptions> {
        self.properties.get(name)
    }

    /// Options of an action, if overridden.
    pub fn action(&self, action: ActionName) -> Option<&ActionOptions> {
        self.actions.get(&action)
    }
}

/// Options of a single field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<Visibility>,
}

impl PropertyOptions {
    /// Hidden from every view.
    pub fn never_visible() -> Self {
        Self {
            is_visible: Some(Visibility::Always(false)),
        }
    }

    /// Visible in the selected views only.
    pub fn visible_in(views: ViewVisibility) -> Self {
        Self {
            is_visible: Some(Visibility::PerView(views)),
        }
    }
}

/// Field visibility: a single flag or one flag per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Visibility {
    Always(bool),
    PerView(ViewVisibility),
}

/// Visibility flags per view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewVisibility {
    pub list: bool,
    pub show: bool,
    pub edit: bool,
    pub filter: bool,
}

/// Actions whose configuration the host looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ActionName {
    List,
    Show,
    New,
    Edit,
}

/// Hook and access configuration of one action.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub before: Option<Hook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<Hook>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_accessible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    /// Custom component rendering the action.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<ComponentRef>,
}

impl ActionOptions {
    /// Create options with nothing overridden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transform the request before the action runs.
    pub fn with_before(mut self, hook: Hook) -> Self {
        self.before = Some(hook);
        self
    }

    /// Transform the response after the action runs.
    pub fn with_after(mut self, hook: Hook) -> Self {
        self.after = Some(hook);
        self
    }

    /// Allow or deny access to the action.
    pub fn with_accessible(mut self, accessible: bool) -> Self {
        self.is_accessible = Some(accessible);
        self
    }

    /// Show or hide the action button.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.is_visible = Some(visible);
        self
    }

    /// Render the action with a custom component.
    pub fn with_component(mut self, component: ComponentRef) -> Self {
        self.component = Some(component);
        self
    }
}

/// Response transforms the host can invoke by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Hook {
    /// Stringify `sizeBytes` on every record of a list response.
    SerializeFileList,
    /// Stringify `sizeBytes` on the record of a show response.
    SerializeFileShow,
}

impl Hook {
    /// Apply the hook to a host response.
    pub fn apply(&self, response: &Value) -> Value {
        match self {
            Hook::SerializeFileList => serializer::serialize_list(response),
            Hook::SerializeFileShow => serializer::serialize_show(response),
        }
    }
}

/// A feature attached to a resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Feature {
    /// The resource owns child collections shown as relation tabs.
    OwningRelationSettings(OwningRelationSettings),
    /// The resource can be linked from a parent's relation tab.
    TargetRelationSettings,
}
