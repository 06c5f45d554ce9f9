//! HTTP plumbing shared by every endpoint
//!
//! One request per call: no retries, no backoff. Non-success statuses are
//! returned as [`ClientError::Status`] with the raw body.

use log::debug;
use reqwest::{Method, Url, header};
use serde::Serialize;
use serde::de::DeserializeOwned;

use isc_core::patch::PatchOperation;

use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

const JSON_PATCH_CONTENT_TYPE: &str = "application/json-patch+json";

/// Client for the ISC REST APIs
///
/// Cheap to clone; clones share the HTTP connection pool and token cache.
#[derive(Debug, Clone)]
pub struct IscClient {
    http: reqwest::Client,
    base_url: Url,
    auth: TokenProvider,
}

impl IscClient {
    pub fn new(config: ClientConfig) -> ClientResult<Self> {
        config.validate()?;

        let base_url = Url::parse(&config.base_url)
            .map_err(|e| ClientError::Config(format!("invalid base URL '{}': {}", config.base_url, e)))?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        let auth = TokenProvider::new(&config, http.clone());

        Ok(Self {
            http,
            base_url,
            auth,
        })
    }

    /// Build an endpoint URL from path segments (each segment is escaped)
    pub(crate) fn endpoint(&self, segments: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::Config(format!("base URL '{}' cannot have a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn request(&self, method: Method, url: Url) -> ClientResult<reqwest::RequestBuilder> {
        let token = self.auth.bearer_token().await?;
        Ok(self
            .http
            .request(method, url)
            .bearer_auth(token)
            .header(header::ACCEPT, "application/json"))
    }

    /// Send the request and return the body of a successful response
    async fn execute(&self, builder: reqwest::RequestBuilder) -> ClientResult<String> {
        let request = builder.build()?;
        let method = request.method().clone();
        let url = request.url().clone();
        debug!("{} {}", method, url);

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;
        debug!("{} {} -> {}", method, url, status.as_u16());

        if status.is_success() {
            Ok(body)
        } else {
            Err(ClientError::Status {
                status: status.as_u16(),
                body,
            })
        }
    }

    fn decode<T: DeserializeOwned>(body: String) -> ClientResult<T> {
        serde_json::from_str(&body).map_err(|e| ClientError::Decode {
            message: e.to_string(),
            body,
        })
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        let builder = self.request(Method::GET, url).await?;
        Self::decode(self.execute(builder).await?)
    }

    pub(crate) async fn post_json<B, T>(&self, url: Url, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self
            .request(Method::POST, url)
            .await?
            .header(header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?);
        Self::decode(self.execute(builder).await?)
    }

    pub(crate) async fn put_json<B, T>(&self, url: Url, body: &B) -> ClientResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self
            .request(Method::PUT, url)
            .await?
            .header(header::CONTENT_TYPE, "application/json")
            .body(serde_json::to_vec(body)?);
        Self::decode(self.execute(builder).await?)
    }

    /// Send a JSON Patch document; operations keep their order on the wire
    pub(crate) async fn patch_json<T: DeserializeOwned>(
        &self,
        url: Url,
        operations: &[PatchOperation],
    ) -> ClientResult<T> {
        let builder = self
            .request(Method::PATCH, url)
            .await?
            .header(header::CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE)
            .body(serde_json::to_vec(operations)?);
        Self::decode(self.execute(builder).await?)
    }

    /// DELETE; any response body (e.g., a task reference) is discarded
    pub(crate) async fn delete(&self, url: Url) -> ClientResult<()> {
        let builder = self.request(Method::DELETE, url).await?;
        self.execute(builder).await.map(|_| ())
    }
}
