//! Integration tests for the assembled admin options.

use docvault_admin::{
    ActionName, Admin, AdminConfig, CatalogResolver, ClientHandle, Error, Feature, ModelHandle,
    ModelName, ModelResolver,
};
use serde_json::{json, Value};

fn admin(license_key: Option<&str>) -> Admin<CatalogResolver> {
    let resolver = CatalogResolver::with_all_models(ClientHandle::new(json!({ "provider": "postgresql" })));
    let mut config = AdminConfig::new().with_component_root("/srv/docvault/admin");
    if let Some(key) = license_key {
        config = config.with_license_key(key);
    }
    Admin::new(resolver, &config)
}

fn resource<'a>(options: &'a Value, model: &str) -> &'a Value {
    options["resources"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["resource"]["model"]["name"] == model)
        .unwrap_or_else(|| panic!("no resource for {model}"))
}

#[test]
fn test_wire_shape_of_user_resource() {
    let options = serde_json::to_value(admin(Some("rel-key")).admin_options().unwrap()).unwrap();
    let user = resource(&options, "User");

    assert_eq!(
        user["resource"],
        json!({ "model": { "name": "User" }, "client": { "provider": "postgresql" } })
    );
    assert_eq!(
        user["options"],
        json!({
            "properties": {
                "id": { "isVisible": { "list": false, "show": true, "edit": false, "filter": true } }
            }
        })
    );

    let feature = &user["features"][0]["owningRelationSettings"];
    assert_eq!(feature["licenseKey"], json!("rel-key"));
    assert_eq!(
        feature["componentLoader"]["components"]["AuthorizationForm"],
        json!("/srv/docvault/admin/forms/AuthorizationForm")
    );
    assert_eq!(
        feature["relations"],
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
fn test_wire_shape_of_target_resources() {
    let options = serde_json::to_value(admin(None).admin_options().unwrap()).unwrap();

    assert_eq!(
        resource(&options, "Authorization")["options"],
        json!({
            "properties": {
                "id": { "isVisible": { "list": false, "show": true, "edit": false, "filter": true } },
                "user": { "isVisible": false }
            },
            "actions": { "new": { "component": "AuthorizationForm" } }
        })
    );
    assert_eq!(
        resource(&options, "Authorization")["features"],
        json!(["targetRelationSettings"])
    );
    assert_eq!(
        resource(&options, "SignIn")["options"]["actions"],
        json!({ "new": { "isAccessible": false } })
    );
}

#[test]
fn test_dashboard_and_loader() {
    let options = serde_json::to_value(admin(None).admin_options().unwrap()).unwrap();

    assert_eq!(options["dashboard"], json!({ "component": "CustomDashboard" }));
    assert_eq!(
        options["componentLoader"],
        json!({
            "components": {
                "CustomDashboard": "/srv/docvault/admin/views/Dashboard",
                "UserName": "/srv/docvault/admin/components/UserName",
                "AuthorizationForm": "/srv/docvault/admin/forms/AuthorizationForm"
            }
        })
    );
}

#[test]
fn test_models_without_relations_have_no_features() {
    let admin = admin(None);
    for model in [
        ModelName::Case,
        ModelName::Proceeding,
        ModelName::UserProceeding,
        ModelName::LoginLink,
    ] {
        assert!(admin.resource(model).unwrap().features.is_empty(), "{model}");
    }
}

#[test]
fn test_owning_resources_share_join_key_of_parent() {
    let admin = admin(None);
    for (parent, join_key) in [
        (ModelName::User, "user"),
        (ModelName::Folder, "folder"),
        (ModelName::File, "file"),
    ] {
        let descriptor = admin.resource(parent).unwrap();
        let Feature::OwningRelationSettings(settings) = &descriptor.features[0] else {
            panic!("{parent} should own relations");
        };
        assert!(!settings.relations.is_empty());
        for entry in settings.relations.values() {
            assert_eq!(entry.target.join_key, join_key);
        }
    }
}

#[test]
fn test_file_hooks_serialize_host_responses() {
    let file = admin(None).resource(ModelName::File).unwrap();

    let list = json!({
        "meta": { "total": 2, "perPage": 10, "page": 1 },
        "records": [
            { "id": "1", "params": { "name": "scan.pdf", "sizeBytes": 9007199254740993u64 } },
            { "id": "2", "params": { "name": "empty.txt" } }
        ]
    });
    let listed = file.run_after(ActionName::List, &list);
    assert_eq!(listed["meta"], list["meta"]);
    assert_eq!(listed["records"][0]["params"]["sizeBytes"], json!("9007199254740993"));
    assert_eq!(listed["records"][1], list["records"][1]);

    let show = json!({ "record": { "id": "1", "params": { "sizeBytes": 512 } } });
    let shown = file.run_after(ActionName::Show, &show);
    assert_eq!(shown, json!({ "record": { "id": "1", "params": { "sizeBytes": "512" } } }));
    assert_eq!(file.run_after(ActionName::Show, &shown), shown);

    assert_eq!(file.run_after(ActionName::Edit, &show), show);
}

struct FailingResolver;

impl ModelResolver for FailingResolver {
    type Error = String;

    fn resolve(&self, model: ModelName) -> Result<ModelHandle, String> {
        Err(format!("schema has no model {model}"))
    }

    fn client(&self) -> ClientHandle {
        ClientHandle::new(Value::Null)
    }
}

#[test]
fn test_resolver_failures_propagate_unchanged() {
    let admin = Admin::new(FailingResolver, &AdminConfig::default());

    assert_eq!(
        admin.admin_options().unwrap_err(),
        "schema has no model User".to_string()
    );
}

#[test]
fn test_unregistered_model_in_catalog() {
    let resolver = CatalogResolver::new(ClientHandle::new(Value::Null));
    let admin = Admin::new(resolver, &AdminConfig::default());

    assert_eq!(
        admin.resource(ModelName::SignIn).unwrap_err(),
        Error::UnknownModel("SignIn".to_string())
    );
}
