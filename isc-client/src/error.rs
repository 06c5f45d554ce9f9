//! Client error types

use isc_core::provider::{ProviderError, ProviderResult};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The API answered with a non-success status
    #[error("API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// Network or protocol failure
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Token endpoint rejected the credentials
    #[error("Authentication failed: {0}")]
    Auth(String),

    /// Response body did not match the expected shape
    #[error("Failed to decode response: {message}")]
    Decode { message: String, body: String },

    /// Request body could not be encoded
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Invalid client configuration: {0}")]
    Config(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Convert into a provider error naming the failed operation
    pub fn into_provider_error(self, operation: &str) -> ProviderError {
        match self {
            Self::Status { status, body } => ProviderError::Api {
                operation: operation.to_string(),
                status,
                body,
            },
            Self::Config(message) => ProviderError::Configuration(message),
            Self::Encode(e) => ProviderError::conversion(operation, e),
            other => ProviderError::Transport {
                operation: operation.to_string(),
                message: other.to_string(),
            },
        }
    }
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Attach an operation name when leaving the client layer
pub trait OperationContext<T> {
    fn during(self, operation: &str) -> ProviderResult<T>;
}

impl<T> OperationContext<T> for ClientResult<T> {
    fn during(self, operation: &str) -> ProviderResult<T> {
        self.map_err(|e| e.into_provider_error(operation))
    }
}
