use serde::{Deserialize, Serialize};

use super::Reference;

/// Form definition as returned by `/beta/form-definitions/{id}`
///
/// The form body (inputs, elements, conditions) is kept as raw JSON; the
/// provider stores it as JSON-encoded strings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Reference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub used_by: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_input: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_elements: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_conditions: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
}
