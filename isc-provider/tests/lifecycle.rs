//! Lifecycle flows against a mock tenant

mod common;

use std::collections::BTreeMap;

use isc_core::attributes::Attributes;
use isc_core::provider::{
    DataSource, DynDataSource, DynResource, Provider, ProviderError, Resource,
};
use isc_core::value::Value;
use isc_provider::resources::connector::{ConnectorModel, ConnectorResource};
use isc_provider::resources::form_definition::{FormDefinitionModel, FormDefinitionResource};
use isc_provider::resources::lifecycle_state::{
    LifecycleStateDataSource, LifecycleStateModel, LifecycleStateResource,
};
use isc_provider::resources::managed_cluster::{ManagedClusterModel, ManagedClusterResource};
use isc_provider::resources::source::{SourceModel, SourceResource};
use isc_provider::resources::transform::{TransformModel, TransformResource};
use isc_provider::resources::ReferenceModel;
use isc_provider::{IscProvider, ProviderConfig, to_diagnostic};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, ResponseTemplate};

use common::{client, tenant};

const PROFILE: &str = "2c9180835d2e5168015d32f890ca1581";
const STATE_PATH: &str =
    "/v3/identity-profiles/2c9180835d2e5168015d32f890ca1581/lifecycle-states/ls-1";

fn lifecycle_body(enabled: bool, description: Option<&str>) -> serde_json::Value {
    json!({
        "id": "ls-1",
        "name": "Active",
        "technicalName": "active",
        "description": description,
        "enabled": enabled,
        "identityCount": 3,
        "identityState": "ACTIVE",
        "priority": 10
    })
}

#[tokio::test]
async fn lifecycle_state_update_patches_changed_fields_only() {
    let server = tenant().await;
    Mock::given(method("GET"))
        .and(path(STATE_PATH))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(lifecycle_body(true, Some("Active users"))),
        )
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(STATE_PATH))
        .and(header("content-type", "application/json-patch+json"))
        .and(body_json(json!([
            {"op": "replace", "path": "/enabled", "value": false},
            {"op": "replace", "path": "/description", "value": null}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(lifecycle_body(false, None)))
        .expect(1)
        .mount(&server)
        .await;

    let resource = LifecycleStateResource::new(client(&server));
    let state = resource.import_state(&format!("{}/ls-1", PROFILE)).await.unwrap();
    assert_eq!(state.identity_profile_id, Value::Known(PROFILE.to_string()));

    let mut plan = state.clone();
    plan.enabled = Value::Known(false);
    plan.description = Value::Null;
    plan.identity_count = Value::Unknown;

    let updated = resource.update(&plan, &state).await.unwrap();
    assert_eq!(updated.enabled, Value::Known(false));
    assert!(updated.description.is_null());
    assert_eq!(updated.identity_count, Value::Known(3));
}

#[tokio::test]
async fn read_of_deleted_object_returns_none() {
    let server = tenant().await;
    Mock::given(method("GET"))
        .and(path(STATE_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detailCode": "404 Not found"})))
        .mount(&server)
        .await;

    let resource = LifecycleStateResource::new(client(&server));
    let state = LifecycleStateModel {
        identity_profile_id: PROFILE.into(),
        id: "ls-1".into(),
        ..Default::default()
    };
    assert_eq!(resource.read(&state).await.unwrap(), None);

    let data_source = LifecycleStateDataSource::new(client(&server));
    let err = data_source.read(&state).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn connector_create_patches_fields_the_create_call_ignores() {
    let server = tenant().await;
    let created = json!({
        "name": "Custom JDBC",
        "type": "JDBC",
        "className": "sailpoint.connector.JDBCConnector",
        "scriptName": "custom-jdbc",
        "directConnect": true,
        "status": "DEVELOPMENT"
    });
    let mut patched = created.clone();
    patched["s3Location"] = json!("s3://bucket/jdbc");

    Mock::given(method("POST"))
        .and(path("/beta/connectors"))
        .and(body_json(json!({
            "name": "Custom JDBC",
            "type": "JDBC",
            "className": "sailpoint.connector.JDBCConnector",
            "directConnect": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(created))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/beta/connectors/custom-jdbc"))
        .and(body_json(json!([
            {"op": "replace", "path": "/s3Location", "value": "s3://bucket/jdbc"}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(patched))
        .expect(1)
        .mount(&server)
        .await;

    let plan = ConnectorModel {
        script_name: Value::Unknown,
        name: "Custom JDBC".into(),
        kind: "JDBC".into(),
        class_name: "sailpoint.connector.JDBCConnector".into(),
        direct_connect: Value::Known(true),
        s3_location: "s3://bucket/jdbc".into(),
        ..Default::default()
    };
    let state = ConnectorResource::new(client(&server))
        .create(&plan)
        .await
        .unwrap();
    assert_eq!(state.script_name, Value::Known("custom-jdbc".to_string()));
    assert_eq!(state.s3_location, Value::Known("s3://bucket/jdbc".to_string()));
}

#[tokio::test]
async fn connector_is_removed_when_follow_up_patch_fails() {
    let server = tenant().await;
    Mock::given(method("POST"))
        .and(path("/beta/connectors"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Custom JDBC",
            "type": "JDBC",
            "className": "sailpoint.connector.JDBCConnector",
            "scriptName": "c-1"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/beta/connectors/c-1"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/beta/connectors/c-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let plan = ConnectorModel {
        script_name: Value::Unknown,
        name: "Custom JDBC".into(),
        kind: "JDBC".into(),
        class_name: "sailpoint.connector.JDBCConnector".into(),
        s3_location: "s3://bucket/jdbc".into(),
        ..Default::default()
    };
    let err = ConnectorResource::new(client(&server))
        .create(&plan)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ProviderError::Api { ref operation, status: 500, ref body } if operation == "Update connector" && body == "boom"
    ));
}

#[tokio::test]
async fn registry_handlers_drive_the_api_through_attributes() {
    let server = tenant().await;
    Mock::given(method("GET"))
        .and(path("/v3/transforms/t-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "name": "Upper",
            "type": "upper",
            "internal": false
        })))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/v3/transforms/t-1"))
        .and(body_json(json!({
            "name": "Upper",
            "type": "upper",
            "attributes": {"input": "x"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "name": "Upper",
            "type": "upper",
            "attributes": {"input": "x"},
            "internal": false
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/transforms/t-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let provider = IscProvider::new("0.1.0");
    let client = client(&server);
    let transforms = provider.resource(&client, "isc_transform").unwrap();
    assert!(provider.resource(&client, "isc_unknown").is_none());

    let by_id = Attributes::from([("id".to_string(), Value::Known(json!("t-1")))]);
    let state = transforms.read(&by_id).await.unwrap().unwrap();
    assert_eq!(state["type"], Value::Known(json!("upper")));
    assert_eq!(state["attributes"], Value::Null);

    let mut plan = state.clone();
    plan.insert("attributes".to_string(), Value::Known(json!("{\"input\":\"x\"}")));
    let state = transforms.update(&plan, &state).await.unwrap();
    assert_eq!(state["attributes"], Value::Known(json!("{\"input\":\"x\"}")));

    transforms.delete(&state).await.unwrap();

    let lookup = provider.data_source(&client, "isc_transform").unwrap();
    let found = lookup.read(&by_id).await.unwrap();
    assert_eq!(found["name"], Value::Known(json!("Upper")));
}

#[tokio::test]
async fn managed_cluster_configuration_goes_out_camel_cased() {
    let server = tenant().await;
    Mock::given(method("PATCH"))
        .and(path("/beta/managed-clusters/mc-1"))
        .and(body_json(json!([
            {"op": "replace", "path": "/configuration", "value": {"gmtOffset": "+1"}}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "mc-1",
            "name": "Corp",
            "type": "idn",
            "configuration": {"gmtOffset": "+1"}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/beta/managed-clusters/mc-1"))
        .and(query_param("removeClients", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut configuration = BTreeMap::new();
    configuration.insert("gmt_offset".to_string(), "-5".to_string());
    let state = ManagedClusterModel {
        id: "mc-1".into(),
        name: "Corp".into(),
        kind: "idn".into(),
        configuration: Value::Known(configuration),
        ..Default::default()
    };
    let mut plan = state.clone();
    plan.configuration = Value::Known(BTreeMap::from([(
        "gmt_offset".to_string(),
        "+1".to_string(),
    )]));
    plan.remove_clients_on_delete = Value::Known(true);

    let resource = ManagedClusterResource::new(client(&server));
    let updated = resource.update(&plan, &state).await.unwrap();
    assert_eq!(
        updated.configuration.known().and_then(|c| c.get("gmt_offset")).map(String::as_str),
        Some("+1")
    );
    assert_eq!(updated.remove_clients_on_delete, Value::Known(true));

    resource.delete(&updated).await.unwrap();
}

#[tokio::test]
async fn invalid_connector_attributes_make_no_call() {
    let server = tenant().await;
    Mock::given(method("POST"))
        .and(path("/v3/sources"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let plan = SourceModel {
        name: "HR AD".into(),
        connector: "active-directory".into(),
        owner: Value::Known(ReferenceModel {
            kind: "IDENTITY".into(),
            id: "2c9180835d191a86015d28455b4a2330".into(),
            name: Value::Unknown,
        }),
        connector_attributes: "{broken".into(),
        ..Default::default()
    };
    let err = SourceResource::new(client(&server))
        .create(&plan)
        .await
        .unwrap_err();
    assert!(matches!(err, ProviderError::Conversion { .. }));
}

#[tokio::test]
async fn transform_update_replaces_whole_object() {
    let server = tenant().await;
    Mock::given(method("PUT"))
        .and(path("/v3/transforms/t-1"))
        .and(body_json(json!({
            "name": "Lower",
            "type": "lower",
            "attributes": {"input": {"type": "static", "attributes": {"value": "X"}}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "name": "Lower",
            "type": "lower",
            "attributes": {"input": {"type": "static", "attributes": {"value": "X"}}},
            "internal": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let state = TransformModel {
        id: "t-1".into(),
        name: "Lower".into(),
        kind: "lower".into(),
        attributes: Value::Null,
        internal: Value::Known(false),
    };
    let mut plan = state.clone();
    plan.attributes = "{\"input\": {\"type\": \"static\", \"attributes\": {\"value\": \"X\"}}}".into();

    let updated = TransformResource::new(client(&server))
        .update(&plan, &state)
        .await
        .unwrap();
    assert!(updated.attributes.is_known());
}

#[tokio::test]
async fn unchanged_form_definition_only_refreshes() {
    let server = tenant().await;
    let body = json!({
        "id": "f-1",
        "name": "Access Request Form",
        "owner": {"type": "IDENTITY", "id": "2c9180835d191a86015d28455b4a2330"},
        "formElements": []
    });
    Mock::given(method("GET"))
        .and(path("/beta/form-definitions/f-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/beta/form-definitions/f-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let resource = FormDefinitionResource::new(client(&server));
    let state: FormDefinitionModel = resource.import_state("f-1").await.unwrap();
    let mut plan = state.clone();
    plan.form_elements = "[ ]".into();

    let updated = resource.update(&plan, &state).await.unwrap();
    assert_eq!(updated, state);
}

#[tokio::test]
async fn api_failures_become_diagnostics_with_body() {
    let server = tenant().await;
    Mock::given(method("DELETE"))
        .and(path("/v3/sources/s-1"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "detailCode": "400.1 Bad Request Content",
            "messages": [{"text": "Source has accounts"}]
        })))
        .mount(&server)
        .await;

    let state = SourceModel {
        id: "s-1".into(),
        ..Default::default()
    };
    let err = SourceResource::new(client(&server))
        .delete(&state)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));

    let diagnostic = to_diagnostic("Error deleting source", &err);
    assert!(diagnostic.detail.contains("Source has accounts"));
    assert!(diagnostic.detail.contains("rejected as invalid"));
}

#[tokio::test]
async fn provider_configures_client_from_explicit_values() {
    let server = tenant().await;
    Mock::given(method("GET"))
        .and(path("/v3/transforms/t-1"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "name": "Upper",
            "type": "upper"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let provider = IscProvider::new("0.1.0");
    let client = provider
        .configure(ProviderConfig {
            base_url: Value::Known(server.uri()),
            client_id: "client".into(),
            client_secret: "secret".into(),
        })
        .unwrap();

    let state = TransformResource::new(client)
        .import_state("t-1")
        .await
        .unwrap();
    assert_eq!(state.kind, Value::Known("upper".to_string()));
    assert!(state.attributes.is_null());
}
