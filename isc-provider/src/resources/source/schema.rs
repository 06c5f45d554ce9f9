//! Source schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::resources::{ReferenceModel, lookup_schema};

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_source")
        .with_description("Source of accounts and entitlements")
        .attribute(AttributeSchema::new("id", AttributeType::String).computed())
        .attribute(AttributeSchema::new("name", AttributeType::String).required())
        .attribute(AttributeSchema::new("description", AttributeType::String))
        .attribute(AttributeSchema::new("owner", ReferenceModel::schema("owner", "IDENTITY")).required())
        .attribute(
            AttributeSchema::new("cluster", ReferenceModel::schema("cluster", "CLUSTER"))
                .optional_computed(),
        )
        .attribute(
            AttributeSchema::new("connector", AttributeType::String)
                .required()
                .requires_replace(),
        )
        .attribute(AttributeSchema::new("connector_class", AttributeType::String).optional_computed())
        .attribute(
            AttributeSchema::new("connector_attributes", AttributeType::Json)
                .optional_computed()
                .with_description("JSON-encoded connector configuration"),
        )
        .attribute(
            AttributeSchema::new("delete_threshold", types::percentage()).optional_computed(),
        )
        .attribute(AttributeSchema::new("authoritative", AttributeType::Bool).optional_computed())
        .attribute(AttributeSchema::new("features", types::string_list()).optional_computed())
        .attribute(AttributeSchema::new("type", AttributeType::String).optional_computed())
        .attribute(AttributeSchema::new("connection_type", AttributeType::String).optional_computed())
        .attribute(AttributeSchema::new("created", AttributeType::String).computed())
        .attribute(AttributeSchema::new("modified", AttributeType::String).computed())
}

pub fn data_source_schema() -> ResourceSchema {
    lookup_schema(resource_schema(), &["id"]).with_description("Look up a source by id")
}
