//! Admin options assembled for the host.

use std::sync::Arc;

use serde::Serialize;
use tracing::info;

use crate::component::{ComponentLoader, ComponentRef};
use crate::config::AdminConfig;
use crate::descriptor::ResourceDescriptor;
use crate::factory::ResourceDescriptorFactory;
use crate::model::ModelName;
use crate::relation::RelationConfigBuilder;
use crate::resolver::ModelResolver;

/// Custom components the panel registers with the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminComponents {
    pub dashboard: ComponentRef,
    pub user_name: ComponentRef,
    pub authorization_form: ComponentRef,
}

impl AdminComponents {
    /// Register the panel's components, with sources under the configured
    /// component root.
    pub fn register(loader: &mut ComponentLoader, config: &AdminConfig) -> Self {
        Self {
            dashboard: loader.add("CustomDashboard", config.component_path("views/Dashboard")),
            user_name: loader.add("UserName", config.component_path("components/UserName")),
            authorization_form: loader.add(
                "AuthorizationForm",
                config.component_path("forms/AuthorizationForm"),
            ),
        }
    }
}

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub component: ComponentRef,
}

/// Everything the host needs to render the panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminOptions {
    pub resources: Vec<ResourceDescriptor>,
    pub dashboard: Dashboard,
    pub component_loader: Arc<ComponentLoader>,
}

/// The admin panel: a resolver, the registered components, and the relation
/// builder that shares them.
pub struct Admin<R> {
    resolver: R,
    component_loader: Arc<ComponentLoader>,
    components: AdminComponents,
    relations: RelationConfigBuilder,
}

impl<R: ModelResolver> Admin<R> {
    /// Register components and prepare the relation builder.
    pub fn new(resolver: R, config: &AdminConfig) -> Self {
        let mut loader = ComponentLoader::new();
        let components = AdminComponents::register(&mut loader, config);
        let component_loader = Arc::new(loader);
        let relations =
            RelationConfigBuilder::new(Arc::clone(&component_loader), config.license_key.clone());

        Self {
            resolver,
            component_loader,
            components,
            relations,
        }
    }

    /// Registered components.
    pub fn components(&self) -> &AdminComponents {
        &self.components
    }

    /// Shared component loader.
    pub fn component_loader(&self) -> &Arc<ComponentLoader> {
        &self.component_loader
    }

    /// Descriptor factory bound to this panel.
    pub fn factory(&self) -> ResourceDescriptorFactory<'_, R> {
        ResourceDescriptorFactory::new(&self.resolver, &self.components, &self.relations)
    }

    /// Descriptor of a single model.
    pub fn resource(&self, model: ModelName) -> Result<ResourceDescriptor, R::Error> {
        self.factory().build(model)
    }

    /// Descriptors of every model, in display order.
    pub fn resources(&self) -> Result<Vec<ResourceDescriptor>, R::Error> {
        self.factory().build_all()
    }

    /// Assemble the options handed to the host.
    pub fn admin_options(&self) -> Result<AdminOptions, R::Error> {
        let resources = self.resources()?;
        info!(
            resources = resources.len(),
            components = self.component_loader.len(),
            "Assembled admin options"
        );

        Ok(AdminOptions {
            resources,
            dashboard: Dashboard {
                component: self.components.dashboard.clone(),
            },
            component_loader: Arc::clone(&self.component_loader),
        })
    }
}
