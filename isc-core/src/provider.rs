//! Provider - Traits abstracting resource operations
//!
//! A Provider is configured once by the host and hands out resource and data
//! source handlers. Handlers receive the configured API client through their
//! constructor and map plan/state models to API calls.

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

use crate::attributes::{AttributeModel, Attributes};
use crate::schema::{ResourceSchema, TypeError};
use crate::value::{Value, ValueError};

/// Error type for Provider operations
///
/// Every variant is fatal to the current lifecycle call.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Invalid or incomplete provider/resource configuration
    #[error("{0}")]
    Configuration(String),

    /// A required attribute is null
    #[error("Missing required attribute '{0}'")]
    MissingAttribute(String),

    /// An attribute that must be concrete is still unknown
    #[error("Attribute '{0}' is not known yet")]
    UnknownValue(String),

    /// The API answered with a non-success status
    #[error("{operation} failed with status {status}: {body}")]
    Api {
        operation: String,
        status: u16,
        body: String,
    },

    /// The request could not be sent or the response could not be read
    #[error("{operation} failed: {message}")]
    Transport { operation: String, message: String },

    /// A JSON-encoded attribute could not be converted
    #[error("Failed to convert '{attribute}': {source}")]
    Conversion {
        attribute: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ProviderError {
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn conversion(attribute: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Conversion {
            attribute: attribute.into(),
            source,
        }
    }

    /// Status code for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

pub type ProviderResult<T> = Result<T, ProviderError>;

/// Read a value that must be concrete before an API call
pub fn require<'a, T>(value: &'a Value<T>, attribute: &str) -> ProviderResult<&'a T> {
    value.get().map_err(|e| match e {
        ValueError::Null => ProviderError::MissingAttribute(attribute.to_string()),
        ValueError::Unknown => ProviderError::UnknownValue(attribute.to_string()),
    })
}

/// Decode a JSON-encoded string attribute
pub fn decode_json(
    value: &Value<String>,
    attribute: &str,
) -> ProviderResult<Option<serde_json::Value>> {
    match value.as_deref() {
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| ProviderError::conversion(attribute, e)),
        None => Ok(None),
    }
}

// =============================================================================
// Diagnostics
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// User-facing message returned to the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: String,
    /// Attribute the diagnostic refers to, if any
    pub attribute: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn warning(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail: detail.into(),
            attribute: None,
        }
    }

    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attribute = Some(attribute.into());
        self
    }
}

// =============================================================================
// Lifecycle traits
// =============================================================================

/// Type name and schema shared by resources and data sources
pub trait ResourceType: Send + Sync {
    /// Name without the provider prefix (e.g., "connector")
    fn name(&self) -> &'static str;

    fn schema(&self) -> ResourceSchema;

    /// Full type name as registered with the host (e.g., "isc_connector")
    fn metadata(&self, provider_type_name: &str) -> String {
        format!("{}_{}", provider_type_name, self.name())
    }

    /// Static validation of a configuration against the schema
    fn validate_config(&self, config: &BTreeMap<String, Value<serde_json::Value>>) -> Vec<Diagnostic> {
        match self.schema().validate(config) {
            Ok(()) => Vec::new(),
            Err(errors) => errors.iter().map(type_error_diagnostic).collect(),
        }
    }
}

fn type_error_diagnostic(error: &TypeError) -> Diagnostic {
    let diagnostic = Diagnostic::error("Invalid configuration", error.to_string());
    match error {
        TypeError::MissingRequired { name }
        | TypeError::ComputedOnly { name }
        | TypeError::UnknownAttribute { name } => diagnostic.with_attribute(name.clone()),
        TypeError::MapValueError { key, .. } => diagnostic.with_attribute(key.clone()),
        _ => diagnostic,
    }
}

/// Managed resource lifecycle
#[async_trait]
pub trait Resource: ResourceType {
    type Model: Clone + Send + Sync;

    /// Create the resource and return the resulting state
    async fn create(&self, plan: &Self::Model) -> ProviderResult<Self::Model>;

    /// Refresh the state; `None` means the resource no longer exists
    async fn read(&self, state: &Self::Model) -> ProviderResult<Option<Self::Model>>;

    /// Apply the plan to an existing resource and return the new state
    async fn update(&self, plan: &Self::Model, state: &Self::Model)
    -> ProviderResult<Self::Model>;

    async fn delete(&self, state: &Self::Model) -> ProviderResult<()>;

    /// Build a state from an import identifier
    async fn import_state(&self, id: &str) -> ProviderResult<Self::Model>;
}

/// Read-only data source
#[async_trait]
pub trait DataSource: ResourceType {
    type Model: Clone + Send + Sync;

    async fn read(&self, config: &Self::Model) -> ProviderResult<Self::Model>;
}

// =============================================================================
// Dynamic dispatch
// =============================================================================

/// Object-safe view of a [`Resource`] working on attribute maps
///
/// This is what the host drives: it only knows type names and attribute maps,
/// so the typed model is decoded on the way in and encoded on the way out.
#[async_trait]
pub trait DynResource: ResourceType {
    async fn create(&self, plan: &Attributes) -> ProviderResult<Attributes>;

    async fn read(&self, state: &Attributes) -> ProviderResult<Option<Attributes>>;

    async fn update(&self, plan: &Attributes, state: &Attributes) -> ProviderResult<Attributes>;

    async fn delete(&self, state: &Attributes) -> ProviderResult<()>;

    async fn import_state(&self, id: &str) -> ProviderResult<Attributes>;
}

/// Object-safe view of a [`DataSource`] working on attribute maps
#[async_trait]
pub trait DynDataSource: ResourceType {
    async fn read(&self, config: &Attributes) -> ProviderResult<Attributes>;
}

/// Box a typed resource handler for the registry
pub fn boxed_resource<R>(resource: R) -> Box<dyn DynResource>
where
    R: Resource + 'static,
    R::Model: AttributeModel,
{
    Box::new(Handler(resource))
}

/// Box a typed data source handler for the registry
pub fn boxed_data_source<D>(data_source: D) -> Box<dyn DynDataSource>
where
    D: DataSource + 'static,
    D::Model: AttributeModel,
{
    Box::new(Handler(data_source))
}

struct Handler<H>(H);

impl<H: ResourceType> ResourceType for Handler<H> {
    fn name(&self) -> &'static str {
        self.0.name()
    }

    fn schema(&self) -> ResourceSchema {
        self.0.schema()
    }
}

#[async_trait]
impl<R> DynResource for Handler<R>
where
    R: Resource + 'static,
    R::Model: AttributeModel,
{
    async fn create(&self, plan: &Attributes) -> ProviderResult<Attributes> {
        let plan = R::Model::from_attributes(plan)?;
        Resource::create(&self.0, &plan)
            .await
            .map(|state| state.to_attributes())
    }

    async fn read(&self, state: &Attributes) -> ProviderResult<Option<Attributes>> {
        let state = R::Model::from_attributes(state)?;
        Resource::read(&self.0, &state)
            .await
            .map(|found| found.map(|state| state.to_attributes()))
    }

    async fn update(&self, plan: &Attributes, state: &Attributes) -> ProviderResult<Attributes> {
        let plan = R::Model::from_attributes(plan)?;
        let state = R::Model::from_attributes(state)?;
        Resource::update(&self.0, &plan, &state)
            .await
            .map(|state| state.to_attributes())
    }

    async fn delete(&self, state: &Attributes) -> ProviderResult<()> {
        let state = R::Model::from_attributes(state)?;
        Resource::delete(&self.0, &state).await
    }

    async fn import_state(&self, id: &str) -> ProviderResult<Attributes> {
        Resource::import_state(&self.0, id)
            .await
            .map(|state| state.to_attributes())
    }
}

#[async_trait]
impl<D> DynDataSource for Handler<D>
where
    D: DataSource + 'static,
    D::Model: AttributeModel,
{
    async fn read(&self, config: &Attributes) -> ProviderResult<Attributes> {
        let config = D::Model::from_attributes(config)?;
        DataSource::read(&self.0, &config)
            .await
            .map(|state| state.to_attributes())
    }
}

/// Provider-level metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderMetadata {
    /// Prefix of every resource type name (e.g., "isc")
    pub type_name: String,
    pub version: String,
}

/// Main Provider trait
///
/// `configure` builds the shared API client once; the client is then passed
/// to every handler constructor.
pub trait Provider: Send + Sync {
    type Config;
    type Client;

    fn metadata(&self) -> ProviderMetadata;

    fn schema(&self) -> ResourceSchema;

    fn configure(&self, config: Self::Config) -> ProviderResult<Self::Client>;

    /// Resource handlers this Provider can manage, bound to a configured client
    fn resources(&self, client: &Self::Client) -> Vec<Box<dyn DynResource>>;

    /// Data source handlers this Provider can read, bound to a configured client
    fn data_sources(&self, client: &Self::Client) -> Vec<Box<dyn DynDataSource>>;

    /// Resource handler registered under a full type name (e.g., "isc_source")
    fn resource(&self, client: &Self::Client, type_name: &str) -> Option<Box<dyn DynResource>> {
        let prefix = self.metadata().type_name;
        self.resources(client)
            .into_iter()
            .find(|r| r.metadata(&prefix) == type_name)
    }

    /// Data source handler registered under a full type name
    fn data_source(
        &self,
        client: &Self::Client,
        type_name: &str,
    ) -> Option<Box<dyn DynDataSource>> {
        let prefix = self.metadata().type_name;
        self.data_sources(client)
            .into_iter()
            .find(|d| d.metadata(&prefix) == type_name)
    }
}
