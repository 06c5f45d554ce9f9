use std::sync::Arc;

use isc_client::{ClientConfig, IscClient};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock tenant that hands out tokens
pub async fn tenant() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/oauth/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "tok",
            "expires_in": 3600
        })))
        .mount(&server)
        .await;
    server
}

pub fn client(server: &MockServer) -> Arc<IscClient> {
    Arc::new(IscClient::new(ClientConfig::new(server.uri(), "client", "secret")).unwrap())
}
