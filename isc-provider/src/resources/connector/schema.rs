//! Connector schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::resources::lookup_schema;
use crate::validation::CONNECTOR_STATUSES;

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_connector")
        .with_description("Custom connector registered in the tenant")
        .attribute(
            AttributeSchema::new("script_name", AttributeType::String)
                .computed()
                .with_description("Unique identifier derived from the name"),
        )
        .attribute(AttributeSchema::new("name", AttributeType::String).required())
        .attribute(
            AttributeSchema::new("type", AttributeType::String)
                .required()
                .requires_replace(),
        )
        .attribute(
            AttributeSchema::new("class_name", AttributeType::String)
                .required()
                .requires_replace(),
        )
        .attribute(AttributeSchema::new("direct_connect", AttributeType::Bool).optional_computed())
        .attribute(
            AttributeSchema::new("status", types::enumeration(CONNECTOR_STATUSES))
                .optional_computed(),
        )
        .attribute(AttributeSchema::new("file_upload", AttributeType::Bool).optional_computed())
        .attribute(AttributeSchema::new("s3_location", AttributeType::String))
        .attribute(AttributeSchema::new("source_config_xml", AttributeType::String))
        .attribute(AttributeSchema::new("correlation_config_xml", AttributeType::String))
        .attribute(AttributeSchema::new("application_xml", AttributeType::String))
        .attribute(AttributeSchema::new("source_config", AttributeType::String))
}

pub fn data_source_schema() -> ResourceSchema {
    lookup_schema(resource_schema(), &["script_name"])
        .with_description("Look up a connector by script name")
}
