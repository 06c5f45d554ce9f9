//! Form definition schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema};

use crate::resources::{ReferenceModel, lookup_schema};

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_form_definition")
        .with_description("Custom form used by workflows and access requests")
        .attribute(AttributeSchema::new("id", AttributeType::String).computed())
        .attribute(AttributeSchema::new("name", AttributeType::String).required())
        .attribute(AttributeSchema::new("description", AttributeType::String))
        .attribute(AttributeSchema::new("owner", ReferenceModel::schema("owner", "IDENTITY")).required())
        .attribute(
            AttributeSchema::new("used_by", AttributeType::Json)
                .optional_computed()
                .with_description("JSON-encoded list of objects using the form"),
        )
        .attribute(
            AttributeSchema::new("form_input", AttributeType::Json)
                .optional_computed()
                .with_description("JSON-encoded list of form inputs"),
        )
        .attribute(
            AttributeSchema::new("form_elements", AttributeType::Json)
                .optional_computed()
                .with_description("JSON-encoded list of form elements"),
        )
        .attribute(
            AttributeSchema::new("form_conditions", AttributeType::Json)
                .optional_computed()
                .with_description("JSON-encoded list of form conditions"),
        )
        .attribute(AttributeSchema::new("created", AttributeType::String).computed())
        .attribute(AttributeSchema::new("modified", AttributeType::String).computed())
}

pub fn data_source_schema() -> ResourceSchema {
    lookup_schema(resource_schema(), &["id"]).with_description("Look up a form definition by id")
}
