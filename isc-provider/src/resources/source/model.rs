//! Source model; `connector_attributes` is carried as a JSON string

use isc_client::models::Source;
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::provider::{ProviderResult, decode_json, require};
use isc_core::value::Value;

use crate::resources::reference::reference_value;
use crate::resources::{ReferenceModel, encode_json, opt};

/// Plan/state model of `isc_source`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub owner: Value<ReferenceModel>,
    pub cluster: Value<ReferenceModel>,
    pub connector: Value<String>,
    pub connector_class: Value<String>,
    /// JSON-encoded object
    pub connector_attributes: Value<String>,
    pub delete_threshold: Value<i32>,
    pub authoritative: Value<bool>,
    pub features: Value<Vec<String>>,
    /// `type` attribute
    pub kind: Value<String>,
    pub connection_type: Value<String>,
    pub created: Value<String>,
    pub modified: Value<String>,
}

impl SourceModel {
    pub fn from_response(dto: Source) -> ProviderResult<Self> {
        Ok(Self {
            connector_attributes: encode_json(
                dto.connector_attributes.as_ref(),
                "connector_attributes",
            )?,
            id: Value::from_option(dto.id),
            name: Value::from_option(dto.name),
            description: Value::from_option(dto.description),
            owner: reference_value(dto.owner),
            cluster: reference_value(dto.cluster),
            connector: Value::from_option(dto.connector),
            connector_class: Value::from_option(dto.connector_class),
            delete_threshold: Value::from_option(dto.delete_threshold),
            authoritative: Value::from_option(dto.authoritative),
            features: Value::from_option(dto.features),
            kind: Value::from_option(dto.kind),
            connection_type: Value::from_option(dto.connection_type),
            created: Value::from_option(dto.created),
            modified: Value::from_option(dto.modified),
        })
    }

    /// Request body for create and full replacement
    ///
    /// Fails before any call when `connector_attributes` is not valid JSON.
    pub fn to_request(&self) -> ProviderResult<Source> {
        require(&self.owner, "owner")?;
        Ok(Source {
            id: opt(&self.id),
            name: Some(require(&self.name, "name")?.clone()),
            description: opt(&self.description),
            owner: self.owner.known().map(ReferenceModel::to_dto),
            cluster: self.cluster.known().map(ReferenceModel::to_dto),
            connector: Some(require(&self.connector, "connector")?.clone()),
            connector_class: opt(&self.connector_class),
            connector_attributes: decode_json(&self.connector_attributes, "connector_attributes")?,
            delete_threshold: opt(&self.delete_threshold),
            authoritative: opt(&self.authoritative),
            features: opt(&self.features),
            kind: opt(&self.kind),
            connection_type: opt(&self.connection_type),
            created: None,
            modified: None,
        })
    }
}

impl AttributeModel for SourceModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            id: attributes::get(attributes, "id")?,
            name: attributes::get(attributes, "name")?,
            description: attributes::get(attributes, "description")?,
            owner: attributes::get_object(attributes, "owner")?,
            cluster: attributes::get_object(attributes, "cluster")?,
            connector: attributes::get(attributes, "connector")?,
            connector_class: attributes::get(attributes, "connector_class")?,
            connector_attributes: attributes::get(attributes, "connector_attributes")?,
            delete_threshold: attributes::get(attributes, "delete_threshold")?,
            authoritative: attributes::get(attributes, "authoritative")?,
            features: attributes::get(attributes, "features")?,
            kind: attributes::get(attributes, "type")?,
            connection_type: attributes::get(attributes, "connection_type")?,
            created: attributes::get(attributes, "created")?,
            modified: attributes::get(attributes, "modified")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "id", &self.id);
        attributes::set(&mut attributes, "name", &self.name);
        attributes::set(&mut attributes, "description", &self.description);
        attributes::set_object(&mut attributes, "owner", &self.owner);
        attributes::set_object(&mut attributes, "cluster", &self.cluster);
        attributes::set(&mut attributes, "connector", &self.connector);
        attributes::set(&mut attributes, "connector_class", &self.connector_class);
        attributes::set(&mut attributes, "connector_attributes", &self.connector_attributes);
        attributes::set(&mut attributes, "delete_threshold", &self.delete_threshold);
        attributes::set(&mut attributes, "authoritative", &self.authoritative);
        attributes::set(&mut attributes, "features", &self.features);
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "connection_type", &self.connection_type);
        attributes::set(&mut attributes, "created", &self.created);
        attributes::set(&mut attributes, "modified", &self.modified);
        attributes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isc_core::provider::ProviderError;
    use serde_json::json;

    fn response() -> Source {
        serde_json::from_value(json!({
            "id": "2c9180835d191a86015d28455b4a2329",
            "name": "HR Active Directory",
            "description": "Corporate AD",
            "owner": {"type": "IDENTITY", "id": "2c9180835d191a86015d28455b4a2330", "name": "Jane Doe"},
            "cluster": {"type": "CLUSTER", "id": "2c9180866166b5b0016167c32ef31a66", "name": "Corp"},
            "connector": "active-directory",
            "connectorClass": "sailpoint.connector.LDAPConnector",
            "connectorAttributes": {"healthCheckTimeout": 30, "authSearchAttributes": ["cn", "uid"]},
            "deleteThreshold": 10,
            "authoritative": false,
            "features": ["PROVISIONING", "AUTHENTICATE"],
            "type": "Active Directory - Direct",
            "connectionType": "direct",
            "created": "2022-02-08T14:50:03.827Z",
            "modified": "2024-01-23T18:08:50.897Z"
        }))
        .unwrap()
    }

    #[test]
    fn response_maps_to_model() {
        let model = SourceModel::from_response(response()).unwrap();
        assert_eq!(model.owner.known().unwrap().name, Value::Known("Jane Doe".to_string()));
        assert_eq!(model.delete_threshold, Value::Known(10));

        let attributes: serde_json::Value =
            serde_json::from_str(model.connector_attributes.known().unwrap()).unwrap();
        assert_eq!(attributes["healthCheckTimeout"], json!(30));
    }

    #[test]
    fn request_round_trips_response() {
        let model = SourceModel::from_response(response()).unwrap();
        let request = model.to_request().unwrap();

        let mut expected = response();
        expected.created = None;
        expected.modified = None;
        assert_eq!(request, expected);
    }

    #[test]
    fn invalid_connector_attributes_fail_before_any_call() {
        let mut model = SourceModel::from_response(response()).unwrap();
        model.connector_attributes = "{not json".into();

        let err = model.to_request().unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Conversion { ref attribute, .. } if attribute == "connector_attributes"
        ));
    }

    #[test]
    fn attributes_nest_references() {
        let model = SourceModel::from_response(response()).unwrap();
        let attributes = model.to_attributes();
        assert_eq!(
            attributes["owner"],
            Value::Known(json!({
                "type": "IDENTITY",
                "id": "2c9180835d191a86015d28455b4a2330",
                "name": "Jane Doe"
            }))
        );
        assert_eq!(SourceModel::from_attributes(&attributes).unwrap(), model);
    }

    #[test]
    fn owner_is_required() {
        let mut model = SourceModel::from_response(response()).unwrap();
        model.owner = Value::Null;
        assert!(matches!(
            model.to_request().unwrap_err(),
            ProviderError::MissingAttribute(ref a) if a == "owner"
        ));
    }
}
