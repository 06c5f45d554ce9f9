//! Resource and data source handlers
//!
//! Each family lives in its own module with the same layout:
//! - `model` - Plan/state model and its mapping to and from the wire DTOs
//! - `schema` - Attribute schemas for the resource and the data source
//! - `resource` - Lifecycle handlers calling the ISC client

pub mod connector;
pub mod form_definition;
pub mod identity_attribute;
pub mod lifecycle_state;
pub mod managed_cluster;
mod reference;
pub mod source;
pub mod transform;

pub use reference::ReferenceModel;

use std::sync::Arc;

use isc_client::{ClientResult, IscClient, OperationContext};
use isc_core::provider::{
    DynDataSource, DynResource, ProviderError, ProviderResult, boxed_data_source, boxed_resource,
};
use isc_core::schema::{AttributeSchema, ResourceSchema};
use isc_core::value::Value;
use log::debug;

/// Returns every resource handler, bound to `client`
pub fn resource_types(client: &Arc<IscClient>) -> Vec<Box<dyn DynResource>> {
    vec![
        boxed_resource(connector::ConnectorResource::new(client.clone())),
        boxed_resource(source::SourceResource::new(client.clone())),
        boxed_resource(lifecycle_state::LifecycleStateResource::new(client.clone())),
        boxed_resource(managed_cluster::ManagedClusterResource::new(client.clone())),
        boxed_resource(identity_attribute::IdentityAttributeResource::new(client.clone())),
        boxed_resource(transform::TransformResource::new(client.clone())),
        boxed_resource(form_definition::FormDefinitionResource::new(client.clone())),
    ]
}

/// Returns every data source handler, bound to `client`
pub fn data_source_types(client: &Arc<IscClient>) -> Vec<Box<dyn DynDataSource>> {
    vec![
        boxed_data_source(connector::ConnectorDataSource::new(client.clone())),
        boxed_data_source(source::SourceDataSource::new(client.clone())),
        boxed_data_source(lifecycle_state::LifecycleStateDataSource::new(client.clone())),
        boxed_data_source(managed_cluster::ManagedClusterDataSource::new(client.clone())),
        boxed_data_source(identity_attribute::IdentityAttributeDataSource::new(client.clone())),
        boxed_data_source(transform::TransformDataSource::new(client.clone())),
        boxed_data_source(form_definition::FormDefinitionDataSource::new(client.clone())),
    ]
}

// =============================================================================
// Shared helpers
// =============================================================================

/// Derive a data source schema from a resource schema
///
/// `keys` become the required lookup attributes; everything else is computed.
pub(crate) fn lookup_schema(schema: ResourceSchema, keys: &[&str]) -> ResourceSchema {
    let mut lookup = ResourceSchema::new(schema.type_name.clone());
    for (name, attribute) in schema.attributes {
        let attribute = AttributeSchema {
            required: false,
            computed: false,
            requires_replace: false,
            ..attribute
        };
        lookup = lookup.attribute(if keys.contains(&name.as_str()) {
            attribute.required()
        } else {
            attribute.computed()
        });
    }
    lookup
}

/// Map a GET result for a resource read; a 404 means the object is gone
pub(crate) fn found<T>(result: ClientResult<T>, operation: &str) -> ProviderResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_not_found() => {
            debug!("{}: object not found, removing from state", operation);
            Ok(None)
        }
        Err(e) => Err(e.into_provider_error(operation)),
    }
}

/// Map a DELETE result; an object that is already gone counts as deleted
pub(crate) fn deleted(result: ClientResult<()>, operation: &str) -> ProviderResult<()> {
    match result {
        Err(e) if e.is_not_found() => {
            debug!("{}: object already deleted", operation);
            Ok(())
        }
        other => other.during(operation),
    }
}

/// Known value as an owned option; null and unknown become `None`
pub(crate) fn opt<T: Clone>(value: &Value<T>) -> Option<T> {
    value.known().cloned()
}

/// Decode a JSON-encoded attribute, keeping unknown values unknown
pub(crate) fn parse_json(
    value: &Value<String>,
    attribute: &str,
) -> ProviderResult<Value<serde_json::Value>> {
    match value {
        Value::Known(raw) => serde_json::from_str(raw)
            .map(Value::Known)
            .map_err(|e| ProviderError::conversion(attribute, e)),
        Value::Unknown => Ok(Value::Unknown),
        Value::Null => Ok(Value::Null),
    }
}

/// Encode a JSON sub-object received from the API as an attribute string
pub(crate) fn encode_json(
    value: Option<&serde_json::Value>,
    attribute: &str,
) -> ProviderResult<Value<String>> {
    match value {
        Some(v) if !v.is_null() => serde_json::to_string(v)
            .map(Value::Known)
            .map_err(|e| ProviderError::conversion(attribute, e)),
        _ => Ok(Value::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isc_client::ClientError;
    use serde_json::json;

    #[test]
    fn not_found_reads_as_none() {
        let result: ClientResult<u8> = Err(ClientError::Status {
            status: 404,
            body: String::new(),
        });
        assert_eq!(found(result, "Get transform").unwrap(), None);

        let result: ClientResult<u8> = Err(ClientError::Status {
            status: 500,
            body: "boom".to_string(),
        });
        let err = found(result, "Get transform").unwrap_err();
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn delete_of_missing_object_succeeds() {
        let result: ClientResult<()> = Err(ClientError::Status {
            status: 404,
            body: String::new(),
        });
        assert!(deleted(result, "Delete source").is_ok());
    }

    #[test]
    fn parse_json_keeps_unknown() {
        assert_eq!(parse_json(&Value::Unknown, "a").unwrap(), Value::Unknown);
        assert_eq!(parse_json(&Value::Null, "a").unwrap(), Value::Null);
        assert_eq!(
            parse_json(&"{\"x\":1}".into(), "a").unwrap(),
            Value::Known(json!({"x": 1}))
        );
        assert!(matches!(
            parse_json(&"{x".into(), "form_input"),
            Err(ProviderError::Conversion { .. })
        ));
    }

    #[test]
    fn encode_json_treats_json_null_as_absent() {
        assert_eq!(encode_json(None, "a").unwrap(), Value::Null);
        assert_eq!(encode_json(Some(&json!(null)), "a").unwrap(), Value::Null);
        assert_eq!(
            encode_json(Some(&json!({"x": 1})), "a").unwrap(),
            Value::Known("{\"x\":1}".to_string())
        );
    }
}
