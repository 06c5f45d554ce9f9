//! Connector model and its mapping to the connector API

use isc_client::models::{ConnectorDetail, CreateConnectorRequest};
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::differ::{FieldRef, PatchField, Patchable};
use isc_core::provider::{ProviderResult, require};
use isc_core::value::Value;

use crate::resources::opt;

/// Plan/state model of `isc_connector`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectorModel {
    pub script_name: Value<String>,
    pub name: Value<String>,
    /// `type` attribute
    pub kind: Value<String>,
    pub class_name: Value<String>,
    pub direct_connect: Value<bool>,
    pub status: Value<String>,
    pub file_upload: Value<bool>,
    pub s3_location: Value<String>,
    pub source_config_xml: Value<String>,
    pub correlation_config_xml: Value<String>,
    pub application_xml: Value<String>,
    pub source_config: Value<String>,
}

impl ConnectorModel {
    pub fn from_response(dto: ConnectorDetail) -> Self {
        Self {
            script_name: Value::from_option(dto.script_name),
            name: Value::from_option(dto.name),
            kind: Value::from_option(dto.kind),
            class_name: Value::from_option(dto.class_name),
            direct_connect: Value::from_option(dto.direct_connect),
            status: Value::from_option(dto.status),
            file_upload: Value::from_option(dto.file_upload),
            s3_location: Value::from_option(dto.s3_location),
            source_config_xml: Value::from_option(dto.source_config_xml),
            correlation_config_xml: Value::from_option(dto.correlation_config_xml),
            application_xml: Value::from_option(dto.application_xml),
            source_config: Value::from_option(dto.source_config),
        }
    }

    /// Body of the create call; the create endpoint accepts only these fields
    pub fn to_create_request(&self) -> ProviderResult<CreateConnectorRequest> {
        Ok(CreateConnectorRequest {
            name: require(&self.name, "name")?.clone(),
            kind: require(&self.kind, "type")?.clone(),
            class_name: require(&self.class_name, "class_name")?.clone(),
            direct_connect: opt(&self.direct_connect),
            status: opt(&self.status),
        })
    }

    /// Configured values of `self`, anything else taken from `created`
    ///
    /// Diffing the result against `created` yields the follow-up patch for
    /// fields the create endpoint ignored, without clearing server defaults.
    pub fn configured_over(&self, created: &Self) -> Self {
        fn pick<T: Clone>(planned: &Value<T>, current: &Value<T>) -> Value<T> {
            planned.clone().or(current.clone())
        }
        Self {
            script_name: created.script_name.clone(),
            name: pick(&self.name, &created.name),
            kind: pick(&self.kind, &created.kind),
            class_name: pick(&self.class_name, &created.class_name),
            direct_connect: pick(&self.direct_connect, &created.direct_connect),
            status: pick(&self.status, &created.status),
            file_upload: pick(&self.file_upload, &created.file_upload),
            s3_location: pick(&self.s3_location, &created.s3_location),
            source_config_xml: pick(&self.source_config_xml, &created.source_config_xml),
            correlation_config_xml: pick(
                &self.correlation_config_xml,
                &created.correlation_config_xml,
            ),
            application_xml: pick(&self.application_xml, &created.application_xml),
            source_config: pick(&self.source_config, &created.source_config),
        }
    }
}

impl AttributeModel for ConnectorModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            script_name: attributes::get(attributes, "script_name")?,
            name: attributes::get(attributes, "name")?,
            kind: attributes::get(attributes, "type")?,
            class_name: attributes::get(attributes, "class_name")?,
            direct_connect: attributes::get(attributes, "direct_connect")?,
            status: attributes::get(attributes, "status")?,
            file_upload: attributes::get(attributes, "file_upload")?,
            s3_location: attributes::get(attributes, "s3_location")?,
            source_config_xml: attributes::get(attributes, "source_config_xml")?,
            correlation_config_xml: attributes::get(attributes, "correlation_config_xml")?,
            application_xml: attributes::get(attributes, "application_xml")?,
            source_config: attributes::get(attributes, "source_config")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "script_name", &self.script_name);
        attributes::set(&mut attributes, "name", &self.name);
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "class_name", &self.class_name);
        attributes::set(&mut attributes, "direct_connect", &self.direct_connect);
        attributes::set(&mut attributes, "status", &self.status);
        attributes::set(&mut attributes, "file_upload", &self.file_upload);
        attributes::set(&mut attributes, "s3_location", &self.s3_location);
        attributes::set(&mut attributes, "source_config_xml", &self.source_config_xml);
        attributes::set(&mut attributes, "correlation_config_xml", &self.correlation_config_xml);
        attributes::set(&mut attributes, "application_xml", &self.application_xml);
        attributes::set(&mut attributes, "source_config", &self.source_config);
        attributes
    }
}

impl Patchable for ConnectorModel {
    const RESOURCE_TYPE: &'static str = "isc_connector";

    fn patch_fields() -> Vec<PatchField<Self>> {
        vec![
            PatchField::<Self>::new("name", "/name", |m| FieldRef::String(&m.name)),
            PatchField::<Self>::new("direct_connect", "/directConnect", |m| {
                FieldRef::Bool(&m.direct_connect)
            }),
            PatchField::<Self>::new("status", "/status", |m| FieldRef::String(&m.status)),
            PatchField::<Self>::new("file_upload", "/fileUpload", |m| {
                FieldRef::Bool(&m.file_upload)
            }),
            PatchField::<Self>::new("s3_location", "/s3Location", |m| {
                FieldRef::String(&m.s3_location)
            }),
            PatchField::<Self>::new("source_config_xml", "/sourceConfigXml", |m| {
                FieldRef::String(&m.source_config_xml)
            }),
            PatchField::<Self>::new("correlation_config_xml", "/correlationConfigXml", |m| {
                FieldRef::String(&m.correlation_config_xml)
            }),
            PatchField::<Self>::new("application_xml", "/applicationXml", |m| {
                FieldRef::String(&m.application_xml)
            }),
            PatchField::<Self>::new("source_config", "/sourceConfig", |m| {
                FieldRef::String(&m.source_config)
            }),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isc_core::differ::diff;
    use isc_core::patch::PatchOperation;
    use isc_core::provider::ProviderError;
    use serde_json::json;

    fn response() -> ConnectorDetail {
        serde_json::from_value(json!({
            "name": "Custom JDBC",
            "type": "JDBC",
            "className": "sailpoint.connector.JDBCConnector",
            "scriptName": "custom-jdbc",
            "applicationXml": "<Application/>",
            "sourceConfig": "{}",
            "directConnect": true,
            "fileUpload": false,
            "status": "DEVELOPMENT"
        }))
        .unwrap()
    }

    #[test]
    fn response_mapping_agrees_with_diff() {
        let model = ConnectorModel::from_response(response());
        assert_eq!(model.script_name, Value::Known("custom-jdbc".to_string()));
        assert!(model.s3_location.is_null());
        assert!(diff(&model, &model.clone()).is_empty());
    }

    #[test]
    fn patch_follows_field_table_order() {
        let state = ConnectorModel::from_response(response());
        let mut plan = state.clone();
        plan.source_config = "{\"a\":1}".into();
        plan.status = "RELEASED".into();
        plan.name = "Renamed".into();

        assert_eq!(
            diff(&plan, &state),
            vec![
                PatchOperation::replace("/name", "Renamed"),
                PatchOperation::replace("/status", "RELEASED"),
                PatchOperation::replace("/sourceConfig", "{\"a\":1}"),
            ]
        );
    }

    #[test]
    fn clearing_xml_emits_null() {
        let state = ConnectorModel::from_response(response());
        let mut plan = state.clone();
        plan.application_xml = Value::Null;

        assert_eq!(
            diff(&plan, &state),
            vec![PatchOperation::replace("/applicationXml", serde_json::Value::Null)]
        );
    }

    #[test]
    fn attributes_map_type_to_kind() {
        let model = ConnectorModel::from_response(response());
        let attributes = model.to_attributes();
        assert_eq!(attributes["type"], Value::Known(json!("JDBC")));
        assert_eq!(attributes["s3_location"], Value::Null);
        assert_eq!(ConnectorModel::from_attributes(&attributes).unwrap(), model);
    }

    #[test]
    fn create_request_requires_type() {
        let plan = ConnectorModel {
            name: "Custom JDBC".into(),
            class_name: "x".into(),
            ..Default::default()
        };
        let err = plan.to_create_request().unwrap_err();
        assert!(matches!(err, ProviderError::MissingAttribute(ref a) if a == "type"));
    }

    #[test]
    fn follow_up_patch_only_carries_configured_fields() {
        let created = ConnectorModel::from_response(response());
        let plan = ConnectorModel {
            name: "Custom JDBC".into(),
            kind: "JDBC".into(),
            class_name: "sailpoint.connector.JDBCConnector".into(),
            s3_location: "s3://bucket/jdbc".into(),
            script_name: Value::Unknown,
            ..Default::default()
        };

        let ops = diff(&plan.configured_over(&created), &created);
        assert_eq!(
            ops,
            vec![PatchOperation::replace("/s3Location", "s3://bucket/jdbc")]
        );
    }
}
