//! Object references shared by several resources

use isc_client::models::Reference;
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::provider::ProviderResult;
use isc_core::schema::{AttributeSchema, AttributeType, types};
use isc_core::value::Value;
use serde_json::json;

use super::opt;

/// Reference to another ISC object (`{type, id, name}`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceModel {
    pub kind: Value<String>,
    pub id: Value<String>,
    pub name: Value<String>,
}

impl ReferenceModel {
    pub fn from_dto(dto: Reference) -> Self {
        Self {
            kind: Value::from_option(dto.kind),
            id: Value::from_option(dto.id),
            name: Value::from_option(dto.name),
        }
    }

    pub fn to_dto(&self) -> Reference {
        Reference {
            kind: opt(&self.kind),
            id: opt(&self.id),
            name: opt(&self.name),
        }
    }

    /// Wire form used in patch documents; `name` is server-resolved and left out
    ///
    /// Unknown when `type` or `id` is not known yet.
    pub fn to_patch_json(&self) -> Value<serde_json::Value> {
        if self.kind.is_unknown() || self.id.is_unknown() {
            return Value::Unknown;
        }
        Value::Known(json!({
            "type": self.kind.known(),
            "id": self.id.known(),
        }))
    }

    /// Schema of a reference attribute whose `type` must be `kind`
    pub fn schema(name: &str, kind: &str) -> AttributeType {
        types::object(vec![
            AttributeSchema::new("type", types::enumeration(&[kind])).required(),
            AttributeSchema::new("id", AttributeType::String).required(),
            AttributeSchema::new("name", AttributeType::String)
                .computed()
                .with_description(format!("Name of the {} object", name)),
        ])
    }
}

impl AttributeModel for ReferenceModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            kind: attributes::get(attributes, "type")?,
            id: attributes::get(attributes, "id")?,
            name: attributes::get(attributes, "name")?,
        })
    }

    fn to_attributes(&self) -> Attributes {
        let mut attributes = Attributes::new();
        attributes::set(&mut attributes, "type", &self.kind);
        attributes::set(&mut attributes, "id", &self.id);
        attributes::set(&mut attributes, "name", &self.name);
        attributes
    }
}

/// Map an optional DTO reference into a tri-state model
pub(crate) fn reference_value(dto: Option<Reference>) -> Value<ReferenceModel> {
    Value::from_option(dto.map(ReferenceModel::from_dto))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn patch_json_omits_name() {
        let reference = ReferenceModel {
            kind: "IDENTITY".into(),
            id: "2c9180835d2e5168015d32f890ca1581".into(),
            name: "Jane Doe".into(),
        };
        assert_eq!(
            reference.to_patch_json(),
            Value::Known(json!({"type": "IDENTITY", "id": "2c9180835d2e5168015d32f890ca1581"}))
        );
    }

    #[test]
    fn patch_json_is_unknown_until_id_is_known() {
        let reference = ReferenceModel {
            kind: "IDENTITY".into(),
            id: Value::Unknown,
            name: Value::Null,
        };
        assert_eq!(reference.to_patch_json(), Value::Unknown);
    }

    #[test]
    fn attributes_use_type_key() {
        let reference = ReferenceModel {
            kind: "CLUSTER".into(),
            id: "abc".into(),
            name: Value::Null,
        };
        let attributes = reference.to_attributes();
        assert_eq!(attributes["type"], Value::Known(json!("CLUSTER")));
        assert_eq!(ReferenceModel::from_attributes(&attributes).unwrap(), reference);
    }

    #[test]
    fn dto_round_trip() {
        let dto = Reference {
            kind: Some("CLUSTER".to_string()),
            id: Some("abc".to_string()),
            name: None,
        };
        let model = ReferenceModel::from_dto(dto.clone());
        assert!(model.name.is_null());
        assert_eq!(model.to_dto(), dto);
    }
}
