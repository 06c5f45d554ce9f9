//! OAuth2 client-credentials authentication
//!
//! The access token is fetched on first use and cached until shortly before it
//! expires. The cache is shared by every clone of the client.

use std::sync::Arc;
use std::time::{Duration, Instant};

use log::debug;
use serde::Deserialize;
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};

/// Tokens are refreshed this long before their stated expiry
const EXPIRY_MARGIN: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    expires_in: Option<u64>,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: Option<Instant>,
}

impl CachedToken {
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(exp) => Instant::now() >= exp,
            None => false,
        }
    }
}

/// Bearer token source for ISC API calls
#[derive(Clone)]
pub struct TokenProvider {
    token_url: String,
    client_id: String,
    client_secret: String,
    cached_token: Arc<RwLock<Option<CachedToken>>>,
    http_client: reqwest::Client,
}

impl std::fmt::Debug for TokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenProvider")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

impl TokenProvider {
    pub fn new(config: &ClientConfig, http_client: reqwest::Client) -> Self {
        Self {
            token_url: config.token_url(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            cached_token: Arc::new(RwLock::new(None)),
            http_client,
        }
    }

    /// Return a valid access token, fetching a new one if needed
    pub async fn bearer_token(&self) -> ClientResult<String> {
        {
            let cache = self.cached_token.read().await;
            if let Some(cached) = cache.as_ref()
                && !cached.is_expired()
            {
                return Ok(cached.access_token.clone());
            }
        }

        let token = self.fetch_token().await?;
        let access_token = token.access_token.clone();
        *self.cached_token.write().await = Some(token);
        Ok(access_token)
    }

    async fn fetch_token(&self) -> ClientResult<CachedToken> {
        debug!("Fetching OAuth2 access token from {}", self.token_url);

        let params = [
            ("grant_type", "client_credentials"),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.as_str()),
        ];

        let response = self
            .http_client
            .post(&self.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| ClientError::Auth(format!("Token request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Auth(format!(
                "Token endpoint returned {}: {}",
                status.as_u16(),
                body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Auth(format!("Invalid token response: {e}")))?;

        let expires_at = token
            .expires_in
            .map(|secs| Instant::now() + Duration::from_secs(secs).saturating_sub(EXPIRY_MARGIN));

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at,
        })
    }
}
