//! Per-model resource descriptors.

use tracing::debug;

use crate::admin::AdminComponents;
use crate::descriptor::{
    ActionName, ActionOptions, Hook, PropertyOptions, ResourceDescriptor, ResourceOptions,
    ResourceRef, ViewVisibility,
};
use crate::model::{ModelName, RelationTarget};
use crate::relation::RelationConfigBuilder;
use crate::resolver::ModelResolver;

/// `id` is hidden from list and edit views but stays filterable.
const ID_VISIBILITY: ViewVisibility = ViewVisibility {
    list: false,
    show: true,
    edit: false,
    filter: true,
};

/// Options every resource starts from.
pub fn default_options() -> ResourceOptions {
    ResourceOptions::new().with_property("id", PropertyOptions::visible_in(ID_VISIBILITY))
}

/// Builds the descriptor of each model, applying model-specific overrides.
pub struct ResourceDescriptorFactory<'a, R> {
    resolver: &'a R,
    components: &'a AdminComponents,
    relations: &'a RelationConfigBuilder,
}

impl<'a, R: ModelResolver> ResourceDescriptorFactory<'a, R> {
    /// Create a factory over a resolver, the registered components and a
    /// relation builder.
    pub fn new(
        resolver: &'a R,
        components: &'a AdminComponents,
        relations: &'a RelationConfigBuilder,
    ) -> Self {
        Self {
            resolver,
            components,
            relations,
        }
    }

    /// Descriptor for any model.
    pub fn build(&self, model: ModelName) -> Result<ResourceDescriptor, R::Error> {
        let descriptor = match model {
            ModelName::User => self.build_user()?,
            ModelName::Folder => self.build_folder()?,
            ModelName::File => self.build_file()?,
            ModelName::Authorization => self.build_authorization()?,
            ModelName::SignIn => self.build_sign_in()?,
            ModelName::Case
            | ModelName::Proceeding
            | ModelName::UserProceeding
            | ModelName::LoginLink => self.build_default(model)?,
        };
        debug!(
            model = %model,
            features = descriptor.features.len(),
            "Built resource descriptor"
        );
        Ok(descriptor)
    }

    /// Descriptors for every model, in display order.
    pub fn build_all(&self) -> Result<Vec<ResourceDescriptor>, R::Error> {
        ModelName::ALL
            .into_iter()
            .map(|model| self.build(model))
            .collect()
    }

    /// Baseline descriptor: resolved handles plus [`default_options`].
    pub fn build_default(&self, model: ModelName) -> Result<ResourceDescriptor, R::Error> {
        let resource = ResourceRef {
            model: self.resolver.resolve(model)?,
            client: self.resolver.client(),
        };
        Ok(ResourceDescriptor::new(resource, default_options()))
    }

    /// Files: JSON-safe sizes on list/show, hidden owner, authorizations tab.
    pub fn build_file(&self) -> Result<ResourceDescriptor, R::Error> {
        let defaults = self.build_default(ModelName::File)?;
        let options = defaults
            .options
            .clone()
            .with_action(
                ActionName::List,
                ActionOptions::new().with_after(Hook::SerializeFileList),
            )
            .with_action(
                ActionName::Show,
                ActionOptions::new().with_after(Hook::SerializeFileShow),
            )
            .with_property("user", PropertyOptions::never_visible());

        Ok(defaults.with_options(options).with_feature(self.relations.owning(
            ModelName::File,
            &[RelationTarget::one_to_many(ModelName::Authorization)],
        )))
    }

    /// Folders replace the baseline options: `id` and owner are never shown.
    pub fn build_folder(&self) -> Result<ResourceDescriptor, R::Error> {
        let options = ResourceOptions::new()
            .with_property("id", PropertyOptions::never_visible())
            .with_property("user", PropertyOptions::never_visible());

        Ok(self
            .build_default(ModelName::Folder)?
            .with_options(options)
            .with_feature(self.relations.owning(
                ModelName::Folder,
                &[
                    RelationTarget::one_to_many(ModelName::Authorization),
                    RelationTarget::one_to_many(ModelName::File),
                ],
            )))
    }

    pub fn build_user(&self) -> Result<ResourceDescriptor, R::Error> {
        Ok(self
            .build_default(ModelName::User)?
            .with_feature(self.relations.owning(
                ModelName::User,
                &[
                    RelationTarget::one_to_many(ModelName::Authorization),
                    RelationTarget::one_to_many(ModelName::SignIn),
                ],
            )))
    }

    /// Authorizations are created through a custom form and linked from
    /// their owners.
    pub fn build_authorization(&self) -> Result<ResourceDescriptor, R::Error> {
        let options = ResourceOptions::new()
            .with_property("id", PropertyOptions::visible_in(ID_VISIBILITY))
            .with_property("user", PropertyOptions::never_visible())
            .with_action(
                ActionName::New,
                ActionOptions::new().with_component(self.components.authorization_form.clone()),
            );

        Ok(self
            .build_default(ModelName::Authorization)?
            .with_options(options)
            .with_feature(RelationConfigBuilder::target()))
    }

    /// Sign-ins are recorded by the application, never created by hand.
    pub fn build_sign_in(&self) -> Result<ResourceDescriptor, R::Error> {
        let defaults = self.build_default(ModelName::SignIn)?;
        let options = defaults
            .options
            .clone()
            .with_action(ActionName::New, ActionOptions::new().with_accessible(false));

        Ok(defaults
            .with_options(options)
            .with_feature(RelationConfigBuilder::target()))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use serde_json::json;

    use super::*;
    use crate::component::ComponentLoader;
    use crate::config::AdminConfig;
    use crate::descriptor::{Feature, Visibility};
    use crate::error::Error;
    use crate::resolver::{CatalogResolver, ClientHandle, ModelHandle};

    struct Fixture {
        resolver: CatalogResolver,
        components: AdminComponents,
        relations: RelationConfigBuilder,
    }

    impl Fixture {
        fn new() -> Self {
            Self::with_resolver(CatalogResolver::with_all_models(ClientHandle::new(json!("prisma"))))
        }

        fn with_resolver(resolver: CatalogResolver) -> Self {
            let mut loader = ComponentLoader::new();
            let components = AdminComponents::register(&mut loader, &AdminConfig::default());
            let relations = RelationConfigBuilder::new(Arc::new(loader), Some("key".to_string()));
            Self {
                resolver,
                components,
                relations,
            }
        }

        fn factory(&self) -> ResourceDescriptorFactory<'_, CatalogResolver> {
            ResourceDescriptorFactory::new(&self.resolver, &self.components, &self.relations)
        }
    }

    fn relation_keys(feature: &Feature) -> Vec<String> {
        match feature {
            Feature::OwningRelationSettings(settings) => settings.relations.keys().cloned().collect(),
            Feature::TargetRelationSettings => Vec::new(),
        }
    }

    #[test]
    fn test_default_descriptor() {
        let fixture = Fixture::new();
        let descriptor = fixture.factory().build_default(ModelName::Case).unwrap();

        assert!(descriptor.features.is_empty());
        assert_eq!(descriptor.options, default_options());
        assert_eq!(descriptor.resource.model.as_value(), &json!({ "name": "Case" }));
        assert_eq!(descriptor.resource.client.as_value(), &json!("prisma"));
        assert_eq!(
            descriptor.options.property("id").unwrap().is_visible,
            Some(Visibility::PerView(ID_VISIBILITY))
        );
    }

    #[test]
    fn test_bare_models_use_default_descriptor() {
        let fixture = Fixture::new();
        let factory = fixture.factory();

        for model in [
            ModelName::Case,
            ModelName::Proceeding,
            ModelName::UserProceeding,
            ModelName::LoginLink,
        ] {
            assert_eq!(factory.build(model).unwrap(), factory.build_default(model).unwrap());
            assert!(factory.build(model).unwrap().features.is_empty());
        }
    }

    #[test]
    fn test_file_descriptor() {
        let fixture = Fixture::new();
        let file = fixture.factory().build_file().unwrap();

        assert_eq!(file.after_hook(ActionName::List), Some(Hook::SerializeFileList));
        assert_eq!(file.after_hook(ActionName::Show), Some(Hook::SerializeFileShow));
        assert_eq!(file.options.property("user"), Some(&PropertyOptions::never_visible()));
        assert_eq!(
            file.options.property("id"),
            Some(&PropertyOptions::visible_in(ID_VISIBILITY))
        );
        assert_eq!(file.features.len(), 1);
        assert_eq!(relation_keys(&file.features[0]), ["authorizations"]);
    }

    #[test]
    fn test_folder_replaces_baseline_options() {
        let fixture = Fixture::new();
        let folder = fixture.factory().build_folder().unwrap();

        assert_eq!(folder.options.property("id"), Some(&PropertyOptions::never_visible()));
        assert_eq!(folder.options.property("user"), Some(&PropertyOptions::never_visible()));
        assert!(folder.options.actions.is_empty());
        assert_eq!(relation_keys(&folder.features[0]), ["authorizations", "files"]);
    }

    #[test]
    fn test_user_owns_authorizations_and_sign_ins() {
        let fixture = Fixture::new();
        let user = fixture.factory().build_user().unwrap();

        assert_eq!(user.options, default_options());
        let Feature::OwningRelationSettings(settings) = &user.features[0] else {
            panic!("expected owning relation feature");
        };
        assert_eq!(settings.license_key.as_deref(), Some("key"));
        assert_eq!(
            serde_json::to_value(&settings.relations).unwrap(),
            json!({
                "authorizations": {
                    "type": "one-to-many",
                    "target": { "joinKey": "user", "resourceId": "Authorization" }
                },
                "signIns": {
                    "type": "one-to-many",
                    "target": { "joinKey": "user", "resourceId": "SignIn" }
                }
            })
        );
    }

    #[test]
    fn test_authorization_uses_custom_form() {
        let fixture = Fixture::new();
        let authorization = fixture.factory().build_authorization().unwrap();

        let new = authorization.options.action(ActionName::New).unwrap();
        assert_eq!(new.component.as_ref().map(|c| c.name()), Some("AuthorizationForm"));
        assert_eq!(authorization.features, vec![Feature::TargetRelationSettings]);
    }

    #[test]
    fn test_sign_in_cannot_be_created() {
        let fixture = Fixture::new();
        let sign_in = fixture.factory().build_sign_in().unwrap();

        assert_eq!(
            sign_in.options.action(ActionName::New).unwrap().is_accessible,
            Some(false)
        );
        assert_eq!(sign_in.options.property("id"), default_options().property("id"));
        assert_eq!(sign_in.features, vec![Feature::TargetRelationSettings]);
    }

    #[test]
    fn test_build_all_follows_model_order() {
        let fixture = Fixture::new();
        let descriptors = fixture.factory().build_all().unwrap();

        let names: Vec<_> = descriptors
            .iter()
            .map(|d| d.resource.model.as_value()["name"].clone())
            .collect();
        let expected: Vec<_> = ModelName::ALL.iter().map(|m| json!(m.as_str())).collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_resolver_error_propagates() {
        let resolver = CatalogResolver::new(ClientHandle::new(json!(null)))
            .with_model(ModelName::User, ModelHandle::new(json!("users")));
        let fixture = Fixture::with_resolver(resolver);

        assert!(fixture.factory().build_user().is_ok());
        assert_eq!(
            fixture.factory().build_all().unwrap_err(),
            Error::UnknownModel("Folder".to_string())
        );
    }
}
