use serde::{Deserialize, Serialize};

/// Connector as returned by `/beta/connectors/{scriptName}`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_xml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correlation_config_xml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_config_xml: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_config: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub s3_location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_connect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_upload: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Body of `POST /beta/connectors`
///
/// The create endpoint only accepts these fields; everything else is applied
/// afterwards with a patch.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateConnectorRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub class_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direct_connect: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
