//! Transform model

use isc_client::models::Transform;
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::provider::{ProviderResult, decode_json, require};
use isc_core::value::Value;

use crate::resources::encode_json;

/// Plan/state model of `isc_transform`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TransformModel {
    pub id: Value<String>,
    pub name: Value<String>,
    /// `type` attribute
    pub kind: Value<String>,
    /// JSON-encoded object
    pub attributes: Value<String>,
    pub internal: Value<bool>,
}

impl TransformModel {
    pub fn from_response(dto: Transform) -> ProviderResult<Self> {
        Ok(Self {
            attributes: encode_json(dto.attributes.as_ref(), "attributes")?,
            id: Value::from_option(dto.id),
            name: Value::Known(dto.name),
            kind: Value::Known(dto.kind),
            internal: Value::from_option(dto.internal),
        })
    }

    /// `{name, type, attributes}` body for create and replace
    pub fn to_request(&self) -> ProviderResult<Transform> {
        Ok(Transform {
            id: None,
            name: require(&self.name, "name")?.clone(),
            kind: require(&self.kind, "type")?.clone(),
            attributes: decode_json(&self.attributes, "attributes")?,
            internal: None,
        })
    }
}

impl AttributeModel for TransformModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            id: attributes::get(attributes, "id")?,
            name: attributes::get(attributes, "name")?,
            kind: attributes::get(attributes, "type")?,
            attributes: attributes::get(attributes, "attributes")?,
            internal: attributes::get(attributes, "internal")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "id", &self.id);
        attributes::set(&mut attributes, "name", &self.name);
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "attributes", &self.attributes);
        attributes::set(&mut attributes, "internal", &self.internal);
        attributes
    }
}
