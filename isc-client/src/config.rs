//! Client configuration

use std::time::Duration;

use crate::error::{ClientError, ClientResult};

/// Environment variable holding the tenant API base URL
pub const ENV_BASE_URL: &str = "SAIL_BASE_URL";
/// Environment variable holding the OAuth client id
pub const ENV_CLIENT_ID: &str = "SAIL_CLIENT_ID";
/// Environment variable holding the OAuth client secret
pub const ENV_CLIENT_SECRET: &str = "SAIL_CLIENT_SECRET";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for an ISC tenant
///
/// The [`Debug`] impl redacts the client secret.
#[derive(Clone)]
pub struct ClientConfig {
    /// Tenant API URL (e.g., "https://acme.api.identitynow.com")
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    /// Defaults to `{base_url}/oauth/token`
    pub token_url: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("token_url", &self.token_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(
        base_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("isc-provider/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    pub fn with_token_url(mut self, token_url: impl Into<String>) -> Self {
        self.token_url = Some(token_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn token_url(&self) -> String {
        self.token_url
            .clone()
            .unwrap_or_else(|| format!("{}/oauth/token", self.base_url))
    }

    /// Check that every field needed to authenticate is present
    pub fn validate(&self) -> ClientResult<()> {
        if self.base_url.is_empty() {
            return Err(ClientError::Config("base URL is empty".to_string()));
        }
        if !self.base_url.starts_with("https://") && !self.base_url.starts_with("http://") {
            return Err(ClientError::Config(format!(
                "base URL '{}' must start with https://",
                self.base_url
            )));
        }
        if self.client_id.is_empty() {
            return Err(ClientError::Config("client id is empty".to_string()));
        }
        if self.client_secret.is_empty() {
            return Err(ClientError::Config("client secret is empty".to_string()));
        }
        Ok(())
    }
}
