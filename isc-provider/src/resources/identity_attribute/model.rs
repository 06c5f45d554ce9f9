//! Identity attribute model and its source list

use isc_client::models::{IdentityAttribute, IdentityAttributeSource};
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::provider::{ProviderResult, decode_json, require};
use isc_core::value::Value;

use crate::resources::{encode_json, opt};

/// Plan/state model of `isc_identity_attribute`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityAttributeModel {
    pub name: Value<String>,
    pub display_name: Value<String>,
    pub standard: Value<bool>,
    /// `type` attribute
    pub kind: Value<String>,
    pub multi: Value<bool>,
    pub searchable: Value<bool>,
    pub system: Value<bool>,
    pub sources: Value<Vec<IdentityAttributeSourceModel>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdentityAttributeSourceModel {
    /// `type` attribute (e.g., "rule", "accountAttribute")
    pub kind: Value<String>,
    /// JSON-encoded object
    pub properties: Value<String>,
}

impl IdentityAttributeSourceModel {
    fn from_dto(dto: IdentityAttributeSource) -> ProviderResult<Self> {
        Ok(Self {
            kind: Value::from_option(dto.kind),
            properties: encode_json(dto.properties.as_ref(), "sources.properties")?,
        })
    }

    fn to_dto(&self) -> ProviderResult<IdentityAttributeSource> {
        Ok(IdentityAttributeSource {
            kind: opt(&self.kind),
            properties: decode_json(&self.properties, "sources.properties")?,
        })
    }
}

impl AttributeModel for IdentityAttributeSourceModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            kind: attributes::get(attributes, "type")?,
            properties: attributes::get(attributes, "properties")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "properties", &self.properties);
        attributes
    }
}

impl IdentityAttributeModel {
    pub fn from_response(dto: IdentityAttribute) -> ProviderResult<Self> {
        let sources = match dto.sources {
            Some(sources) => Value::Known(
                sources
                    .into_iter()
                    .map(IdentityAttributeSourceModel::from_dto)
                    .collect::<ProviderResult<Vec<_>>>()?,
            ),
            None => Value::Null,
        };

        Ok(Self {
            name: Value::Known(dto.name),
            display_name: Value::from_option(dto.display_name),
            standard: Value::from_option(dto.standard),
            kind: Value::from_option(dto.kind),
            multi: Value::from_option(dto.multi),
            searchable: Value::from_option(dto.searchable),
            system: Value::from_option(dto.system),
            sources,
        })
    }

    /// Request body for create and full replacement; `system` is server-owned
    pub fn to_request(&self) -> ProviderResult<IdentityAttribute> {
        let sources = match self.sources.known() {
            Some(sources) => Some(
                sources
                    .iter()
                    .map(IdentityAttributeSourceModel::to_dto)
                    .collect::<ProviderResult<Vec<_>>>()?,
            ),
            None => None,
        };

        Ok(IdentityAttribute {
            name: require(&self.name, "name")?.clone(),
            display_name: opt(&self.display_name),
            standard: opt(&self.standard),
            kind: opt(&self.kind),
            multi: opt(&self.multi),
            searchable: opt(&self.searchable),
            system: None,
            sources,
        })
    }
}

impl AttributeModel for IdentityAttributeModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            name: attributes::get(attributes, "name")?,
            display_name: attributes::get(attributes, "display_name")?,
            standard: attributes::get(attributes, "standard")?,
            kind: attributes::get(attributes, "type")?,
            multi: attributes::get(attributes, "multi")?,
            searchable: attributes::get(attributes, "searchable")?,
            system: attributes::get(attributes, "system")?,
            sources: attributes::get_object_list(attributes, "sources")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "name", &self.name);
        attributes::set(&mut attributes, "display_name", &self.display_name);
        attributes::set(&mut attributes, "standard", &self.standard);
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "multi", &self.multi);
        attributes::set(&mut attributes, "searchable", &self.searchable);
        attributes::set(&mut attributes, "system", &self.system);
        attributes::set_object_list(&mut attributes, "sources", &self.sources);
        attributes
    }
}
