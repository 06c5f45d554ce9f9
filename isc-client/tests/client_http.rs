//! HTTP behaviour of the ISC client against a mock tenant

use isc_client::models::{CreateConnectorRequest, Transform};
use isc_client::{ClientConfig, ClientError, IscClient};
use isc_core::patch::PatchOperation;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_tenant() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .and(body_string_contains("grant_type=client_credentials"))
        .and(body_string_contains("client_id=test-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-123",
            "token_type": "bearer",
            "expires_in": 749
        })))
        .mount(&server)
        .await;
    server
}

fn client(server: &MockServer) -> IscClient {
    IscClient::new(ClientConfig::new(server.uri(), "test-client", "test-secret")).unwrap()
}

#[tokio::test]
async fn requests_carry_bearer_token() {
    let server = mock_tenant().await;
    Mock::given(method("GET"))
        .and(path("/v3/transforms/t-1"))
        .and(header("authorization", "Bearer tok-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "name": "Lower",
            "type": "lower",
            "attributes": {},
            "internal": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let transform = client(&server).get_transform("t-1").await.unwrap();
    assert_eq!(transform.name, "Lower");
    assert_eq!(transform.kind, "lower");
    assert_eq!(transform.internal, Some(false));
}

#[tokio::test]
async fn token_is_fetched_once_and_cached() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok-cached",
            "expires_in": 3600
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v3/transforms/t-1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(2)
        .mount(&server)
        .await;

    let client = client(&server);
    client.delete_transform("t-1").await.unwrap();
    client.delete_transform("t-1").await.unwrap();
}

#[tokio::test]
async fn rejected_credentials_are_auth_errors() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid_client"))
        .mount(&server)
        .await;

    let err = client(&server).get_source("s-1").await.unwrap_err();
    match err {
        ClientError::Auth(message) => assert!(message.contains("invalid_client")),
        other => panic!("Expected Auth error, got {:?}", other),
    }
}

#[tokio::test]
async fn patch_sends_json_patch_document_in_order() {
    let server = mock_tenant().await;
    Mock::given(method("PATCH"))
        .and(path("/v3/identity-profiles/p-1/lifecycle-states/ls-1"))
        .and(header("content-type", "application/json-patch+json"))
        .and(body_json(json!([
            {"op": "replace", "path": "/enabled", "value": false},
            {"op": "replace", "path": "/description", "value": null}
        ])))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "ls-1",
            "name": "Active",
            "technicalName": "active",
            "enabled": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let ops = vec![
        PatchOperation::replace("/enabled", false),
        PatchOperation::replace("/description", serde_json::Value::Null),
    ];
    let updated = client(&server)
        .update_lifecycle_state("p-1", "ls-1", &ops)
        .await
        .unwrap();
    assert_eq!(updated.enabled, Some(false));
    assert_eq!(updated.technical_name.as_deref(), Some("active"));
}

#[tokio::test]
async fn missing_object_is_a_404_status() {
    let server = mock_tenant().await;
    Mock::given(method("GET"))
        .and(path("/beta/connectors/gone"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "detailCode": "404 Not found"
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_connector("gone").await.unwrap_err();
    assert!(err.is_not_found());
    match err {
        ClientError::Status { body, .. } => assert!(body.contains("404 Not found")),
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn create_connector_posts_only_create_fields() {
    let server = mock_tenant().await;
    Mock::given(method("POST"))
        .and(path("/beta/connectors"))
        .and(body_json(json!({
            "name": "Custom JDBC",
            "type": "JDBC",
            "className": "sailpoint.connector.JDBCConnector"
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "name": "Custom JDBC",
            "type": "JDBC",
            "className": "sailpoint.connector.JDBCConnector",
            "scriptName": "custom-jdbc",
            "status": "DEVELOPMENT"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let request = CreateConnectorRequest {
        name: "Custom JDBC".to_string(),
        kind: "JDBC".to_string(),
        class_name: "sailpoint.connector.JDBCConnector".to_string(),
        direct_connect: None,
        status: None,
    };
    let created = client(&server).create_connector(&request).await.unwrap();
    assert_eq!(created.script_name.as_deref(), Some("custom-jdbc"));
}

#[tokio::test]
async fn delete_managed_cluster_passes_remove_clients() {
    let server = mock_tenant().await;
    Mock::given(method("DELETE"))
        .and(path("/beta/managed-clusters/mc-1"))
        .and(query_param("removeClients", "true"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .delete_managed_cluster("mc-1", true)
        .await
        .unwrap();
}

#[tokio::test]
async fn put_transform_replaces_body() {
    let server = mock_tenant().await;
    Mock::given(method("PUT"))
        .and(path("/v3/transforms/t-1"))
        .and(body_json(json!({
            "name": "Lower",
            "type": "lower",
            "attributes": {"input": "x"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "t-1",
            "name": "Lower",
            "type": "lower",
            "attributes": {"input": "x"},
            "internal": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let body = Transform {
        id: None,
        name: "Lower".to_string(),
        kind: "lower".to_string(),
        attributes: Some(json!({"input": "x"})),
        internal: None,
    };
    let updated = client(&server).put_transform("t-1", &body).await.unwrap();
    assert_eq!(updated.id.as_deref(), Some("t-1"));
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = mock_tenant().await;
    Mock::given(method("GET"))
        .and(path("/beta/form-definitions/f-1"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client(&server).get_form_definition("f-1").await.unwrap_err();
    match err {
        ClientError::Decode { body, .. } => assert_eq!(body, "not json"),
        other => panic!("Expected Decode error, got {:?}", other),
    }
}
