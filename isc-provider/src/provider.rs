//! ISC Provider implementation
//!
//! Resolves tenant credentials (explicit configuration first, then the
//! `SAIL_*` environment variables), builds the shared API client and hands it
//! to every resource and data source handler.

use std::sync::Arc;

use isc_client::config::{ENV_BASE_URL, ENV_CLIENT_ID, ENV_CLIENT_SECRET};
use isc_client::{ClientConfig, IscClient};
use isc_core::provider::{
    DynDataSource, DynResource, Provider, ProviderError, ProviderMetadata, ProviderResult,
};
use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema};
use isc_core::value::Value;
use log::debug;

use crate::resources::{data_source_types, resource_types};

pub const PROVIDER_TYPE_NAME: &str = "isc";

/// Provider block as configured by the user
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderConfig {
    pub base_url: Value<String>,
    pub client_id: Value<String>,
    pub client_secret: Value<String>,
}

/// SailPoint Identity Security Cloud provider
#[derive(Debug, Clone, Default)]
pub struct IscProvider {
    version: String,
}

impl IscProvider {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
        }
    }

    /// Resolve the client configuration from explicit values and an environment lookup
    ///
    /// Explicit values win. Unknown values are rejected so that the client is
    /// never built from a placeholder.
    pub fn resolve_config(
        config: &ProviderConfig,
        env: impl Fn(&str) -> Option<String>,
    ) -> ProviderResult<ClientConfig> {
        let resolve = |value: &Value<String>, attribute: &str, env_name: &str| {
            match value {
                Value::Known(v) if !v.is_empty() => Ok(v.clone()),
                Value::Unknown => Err(ProviderError::configuration(format!(
                    "The provider cannot be configured because '{}' is not known yet. \
                     Set it statically or use the {} environment variable.",
                    attribute, env_name
                ))),
                _ => env(env_name).filter(|v| !v.is_empty()).ok_or_else(|| {
                    ProviderError::configuration(format!(
                        "Missing '{}': set it in the provider configuration or use the {} environment variable.",
                        attribute, env_name
                    ))
                }),
            }
        };

        let base_url = resolve(&config.base_url, "base_url", ENV_BASE_URL)?;
        let client_id = resolve(&config.client_id, "client_id", ENV_CLIENT_ID)?;
        let client_secret = resolve(&config.client_secret, "client_secret", ENV_CLIENT_SECRET)?;

        Ok(ClientConfig::new(base_url, client_id, client_secret))
    }
}

impl Provider for IscProvider {
    type Config = ProviderConfig;
    type Client = Arc<IscClient>;

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            type_name: PROVIDER_TYPE_NAME.to_string(),
            version: self.version.clone(),
        }
    }

    fn schema(&self) -> ResourceSchema {
        ResourceSchema::new(PROVIDER_TYPE_NAME)
            .with_description("Manage SailPoint Identity Security Cloud configuration")
            .attribute(
                AttributeSchema::new("base_url", AttributeType::String).with_description(
                    "Tenant API URL, e.g. https://acme.api.identitynow.com. May also be set with SAIL_BASE_URL.",
                ),
            )
            .attribute(
                AttributeSchema::new("client_id", AttributeType::String)
                    .with_description("OAuth client id. May also be set with SAIL_CLIENT_ID."),
            )
            .attribute(
                AttributeSchema::new("client_secret", AttributeType::String)
                    .sensitive()
                    .with_description(
                        "OAuth client secret. May also be set with SAIL_CLIENT_SECRET.",
                    ),
            )
    }

    fn configure(&self, config: Self::Config) -> ProviderResult<Self::Client> {
        let client_config = Self::resolve_config(&config, |name| std::env::var(name).ok())?;
        debug!("Configuring ISC client for {}", client_config.base_url);

        let client = IscClient::new(client_config)
            .map_err(|e| ProviderError::configuration(format!("Unable to create ISC client: {}", e)))?;
        Ok(Arc::new(client))
    }

    fn resources(&self, client: &Self::Client) -> Vec<Box<dyn DynResource>> {
        resource_types(client)
    }

    fn data_sources(&self, client: &Self::Client) -> Vec<Box<dyn DynDataSource>> {
        data_source_types(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isc_core::provider::ResourceType;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn explicit_values_override_environment() {
        let config = ProviderConfig {
            base_url: "https://explicit.api.identitynow.com".into(),
            client_id: Value::Null,
            client_secret: "explicit-secret".into(),
        };
        let resolved = IscProvider::resolve_config(
            &config,
            env(&[
                (ENV_BASE_URL, "https://env.api.identitynow.com"),
                (ENV_CLIENT_ID, "env-id"),
                (ENV_CLIENT_SECRET, "env-secret"),
            ]),
        )
        .unwrap();

        assert_eq!(resolved.base_url, "https://explicit.api.identitynow.com");
        assert_eq!(resolved.client_id, "env-id");
        assert_eq!(resolved.client_secret, "explicit-secret");
    }

    #[test]
    fn missing_credentials_are_configuration_errors() {
        let err = IscProvider::resolve_config(&ProviderConfig::default(), env(&[])).unwrap_err();
        assert!(matches!(err, ProviderError::Configuration(ref m) if m.contains("base_url")));
    }

    #[test]
    fn unknown_values_are_rejected() {
        let config = ProviderConfig {
            base_url: Value::Unknown,
            ..Default::default()
        };
        let err = IscProvider::resolve_config(
            &config,
            env(&[(ENV_BASE_URL, "https://env.api.identitynow.com")]),
        )
        .unwrap_err();
        assert!(err.to_string().contains("not known yet"));
    }

    #[test]
    fn configure_registers_every_resource_type() {
        let provider = IscProvider::new("0.1.0");
        let client = Arc::new(
            IscClient::new(ClientConfig::new("https://acme.api.identitynow.com", "id", "secret"))
                .unwrap(),
        );

        let names: Vec<String> = provider
            .resources(&client)
            .iter()
            .map(|r| r.metadata(&provider.metadata().type_name))
            .collect();
        assert_eq!(
            names,
            vec![
                "isc_connector",
                "isc_source",
                "isc_lifecycle_state",
                "isc_managed_cluster",
                "isc_identity_attribute",
                "isc_transform",
                "isc_form_definition",
            ]
        );
        assert_eq!(provider.data_sources(&client).len(), 7);
    }

    #[test]
    fn client_secret_is_sensitive() {
        let schema = IscProvider::default().schema();
        assert!(schema.get("client_secret").unwrap().sensitive);
        assert!(!schema.get("base_url").unwrap().sensitive);
    }
}
