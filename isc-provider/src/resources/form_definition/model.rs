//! Form definition model and its decoded patch view

use isc_client::models::FormDefinition;
use isc_core::attributes::{self, AttributeModel, Attributes};
use isc_core::differ::{FieldRef, PatchField, Patchable};
use isc_core::provider::{ProviderResult, decode_json, require};
use isc_core::value::Value;

use crate::resources::reference::reference_value;
use crate::resources::{ReferenceModel, encode_json, opt, parse_json};

/// Plan/state model of `isc_form_definition`
///
/// The form body attributes hold JSON-encoded strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDefinitionModel {
    pub id: Value<String>,
    pub name: Value<String>,
    pub description: Value<String>,
    pub owner: Value<ReferenceModel>,
    pub used_by: Value<String>,
    pub form_input: Value<String>,
    pub form_elements: Value<String>,
    pub form_conditions: Value<String>,
    pub created: Value<String>,
    pub modified: Value<String>,
}

impl FormDefinitionModel {
    pub fn from_response(dto: FormDefinition) -> ProviderResult<Self> {
        Ok(Self {
            used_by: encode_json(dto.used_by.as_ref(), "used_by")?,
            form_input: encode_json(dto.form_input.as_ref(), "form_input")?,
            form_elements: encode_json(dto.form_elements.as_ref(), "form_elements")?,
            form_conditions: encode_json(dto.form_conditions.as_ref(), "form_conditions")?,
            id: Value::from_option(dto.id),
            name: Value::from_option(dto.name),
            description: Value::from_option(dto.description),
            owner: reference_value(dto.owner),
            created: Value::from_option(dto.created),
            modified: Value::from_option(dto.modified),
        })
    }

    pub fn to_create_request(&self) -> ProviderResult<FormDefinition> {
        Ok(FormDefinition {
            id: None,
            name: Some(require(&self.name, "name")?.clone()),
            description: opt(&self.description),
            owner: self.owner.known().map(ReferenceModel::to_dto),
            used_by: decode_json(&self.used_by, "used_by")?,
            form_input: decode_json(&self.form_input, "form_input")?,
            form_elements: decode_json(&self.form_elements, "form_elements")?,
            form_conditions: decode_json(&self.form_conditions, "form_conditions")?,
            created: None,
            modified: None,
        })
    }
}

impl AttributeModel for FormDefinitionModel {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self> {
        Ok(Self {
            id: attributes::get(attributes, "id")?,
            name: attributes::get(attributes, "name")?,
            description: attributes::get(attributes, "description")?,
            owner: attributes::get_object(attributes, "owner")?,
            used_by: attributes::get(attributes, "used_by")?,
            form_input: attributes::get(attributes, "form_input")?,
            form_elements: attributes::get(attributes, "form_elements")?,
            form_conditions: attributes::get(attributes, "form_conditions")?,
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
        attributes::set(&mut attributes, "used_by", &self.used_by);
        attributes::set(&mut attributes, "form_input", &self.form_input);
        attributes::set(&mut attributes, "form_elements", &self.form_elements);
        attributes::set(&mut attributes, "form_conditions", &self.form_conditions);
        attributes::set(&mut attributes, "created", &self.created);
        attributes::set(&mut attributes, "modified", &self.modified);
        attributes
    }
}

/// Patchable view of a form definition with its JSON strings decoded
///
/// Diffing decoded documents ignores formatting differences between the
/// configured strings and the server's rendering.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDefinitionPatch {
    pub name: Value<String>,
    pub description: Value<String>,
    pub owner: Value<serde_json::Value>,
    pub used_by: Value<serde_json::Value>,
    pub form_input: Value<serde_json::Value>,
    pub form_elements: Value<serde_json::Value>,
    pub form_conditions: Value<serde_json::Value>,
}

impl TryFrom<&FormDefinitionModel> for FormDefinitionPatch {
    type Error = isc_core::provider::ProviderError;

    fn try_from(model: &FormDefinitionModel) -> ProviderResult<Self> {
        Ok(Self {
            name: model.name.clone(),
            description: model.description.clone(),
            owner: model.owner.as_ref().and_then(ReferenceModel::to_patch_json),
            used_by: parse_json(&model.used_by, "used_by")?,
            form_input: parse_json(&model.form_input, "form_input")?,
            form_elements: parse_json(&model.form_elements, "form_elements")?,
            form_conditions: parse_json(&model.form_conditions, "form_conditions")?,
        })
    }
}

impl Patchable for FormDefinitionPatch {
    const RESOURCE_TYPE: &'static str = "isc_form_definition";

    fn patch_fields() -> Vec<PatchField<Self>> {
        vec![
            PatchField::<Self>::new("name", "/name", |m| FieldRef::String(&m.name)),
            PatchField::<Self>::new("description", "/description", |m| {
                FieldRef::String(&m.description)
            }),
            PatchField::<Self>::new("owner", "/owner", |m| FieldRef::Json(m.owner.clone())),
            PatchField::<Self>::new("used_by", "/usedBy", |m| FieldRef::Json(m.used_by.clone())),
            PatchField::<Self>::new("form_input", "/formInput", |m| {
                FieldRef::Json(m.form_input.clone())
            }),
            PatchField::<Self>::new("form_elements", "/formElements", |m| {
                FieldRef::Json(m.form_elements.clone())
            }),
            PatchField::<Self>::new("form_conditions", "/formConditions", |m| {
                FieldRef::Json(m.form_conditions.clone())
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

    fn response() -> FormDefinition {
        serde_json::from_value(json!({
            "id": "00000000-0000-0000-0000-000000000000",
            "name": "Access Request Form",
            "description": "Collects a business justification",
            "owner": {"type": "IDENTITY", "id": "2c9180835d191a86015d28455b4a2330", "name": "Jane Doe"},
            "usedBy": [{"type": "WORKFLOW", "id": "61940a92-5484-42bc-bc10-b9982b218cdf"}],
            "formInput": [{"id": "00000000-0000-0000-0000-000000000000", "type": "STRING", "label": "input1"}],
            "formElements": [{"id": "00000000", "elementType": "TEXT", "key": "justification", "config": {"label": "Why?"}}],
            "formConditions": [],
            "created": "2023-07-12T20:14:57.74486Z",
            "modified": "2023-07-12T20:14:57.74486Z"
        }))
        .unwrap()
    }

    fn patch_view(model: &FormDefinitionModel) -> FormDefinitionPatch {
        FormDefinitionPatch::try_from(model).unwrap()
    }

    #[test]
    fn response_mapping_agrees_with_diff() {
        let model = FormDefinitionModel::from_response(response()).unwrap();
        let view = patch_view(&model);
        assert!(diff(&view, &view.clone()).is_empty());
    }

    #[test]
    fn formatting_differences_are_not_changes() {
        let state = FormDefinitionModel::from_response(response()).unwrap();
        let mut plan = state.clone();
        plan.form_conditions = "[ ]".into();
        plan.used_by = "[\n  {\"id\": \"61940a92-5484-42bc-bc10-b9982b218cdf\", \"type\": \"WORKFLOW\"}\n]".into();

        assert!(diff(&patch_view(&plan), &patch_view(&state)).is_empty());
    }

    #[test]
    fn changed_elements_are_sent_decoded() {
        let state = FormDefinitionModel::from_response(response()).unwrap();
        let mut plan = state.clone();
        plan.description = "Updated".into();
        plan.form_elements = "[]".into();

        assert_eq!(
            diff(&patch_view(&plan), &patch_view(&state)),
            vec![
                PatchOperation::replace("/description", "Updated"),
                PatchOperation::replace("/formElements", json!([])),
            ]
        );
    }

    #[test]
    fn owner_change_sends_type_and_id() {
        let state = FormDefinitionModel::from_response(response()).unwrap();
        let mut plan = state.clone();
        plan.owner = Value::Known(ReferenceModel {
            kind: "IDENTITY".into(),
            id: "2c9180835d191a86015d28455b4a9999".into(),
            name: Value::Unknown,
        });

        assert_eq!(
            diff(&patch_view(&plan), &patch_view(&state)),
            vec![PatchOperation::replace(
                "/owner",
                json!({"type": "IDENTITY", "id": "2c9180835d191a86015d28455b4a9999"})
            )]
        );
    }

    #[test]
    fn invalid_json_fails_before_diffing() {
        let mut plan = FormDefinitionModel::from_response(response()).unwrap();
        plan.form_input = "[{".into();

        let err = FormDefinitionPatch::try_from(&plan).unwrap_err();
        assert!(matches!(
            err,
            ProviderError::Conversion { ref attribute, .. } if attribute == "form_input"
        ));
    }

    #[test]
    fn owner_with_unknown_id_is_not_patched() {
        let state = FormDefinitionModel::from_response(response()).unwrap();
        let mut plan = state.clone();
        plan.owner = Value::Known(ReferenceModel {
            kind: "IDENTITY".into(),
            id: Value::Unknown,
            name: Value::Unknown,
        });

        assert!(diff(&patch_view(&plan), &patch_view(&state)).is_empty());
    }

    #[test]
    fn cleared_conditions_are_explicit_null() {
        let state = FormDefinitionModel::from_response(response()).unwrap();
        let mut plan = state.clone();
        plan.form_conditions = Value::Null;

        assert_eq!(
            diff(&patch_view(&plan), &patch_view(&state)),
            vec![PatchOperation::replace("/formConditions", serde_json::Value::Null)]
        );
    }
}
