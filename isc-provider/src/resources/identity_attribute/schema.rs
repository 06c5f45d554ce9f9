//! Identity attribute schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::resources::lookup_schema;
use crate::validation::attribute_name;

fn attribute_source() -> AttributeType {
    types::object(vec![
        AttributeSchema::new("type", AttributeType::String).required(),
        AttributeSchema::new("properties", AttributeType::Json),
    ])
}

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_identity_attribute")
        .with_description("Identity attribute available to identity profiles")
        .attribute(
            AttributeSchema::new("name", attribute_name())
                .required()
                .requires_replace(),
        )
        .attribute(AttributeSchema::new("display_name", AttributeType::String).optional_computed())
        .attribute(AttributeSchema::new("standard", AttributeType::Bool).optional_computed())
        .attribute(AttributeSchema::new("type", AttributeType::String).optional_computed())
        .attribute(AttributeSchema::new("multi", AttributeType::Bool).optional_computed())
        .attribute(AttributeSchema::new("searchable", AttributeType::Bool).optional_computed())
        .attribute(AttributeSchema::new("system", AttributeType::Bool).computed())
        .attribute(AttributeSchema::new(
            "sources",
            AttributeType::List(Box::new(attribute_source())),
        ))
}

pub fn data_source_schema() -> ResourceSchema {
    lookup_schema(resource_schema(), &["name"]).with_description("Look up an identity attribute by name")
}
