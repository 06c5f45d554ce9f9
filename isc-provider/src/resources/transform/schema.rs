//! Transform schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::resources::lookup_schema;
use crate::validation::TRANSFORM_TYPES;

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_transform")
        .with_description("Transform applied to identity attribute values")
        .attribute(AttributeSchema::new("id", AttributeType::String).computed())
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .requires_replace(),
        )
        .attribute(
            AttributeSchema::new("type", types::enumeration(TRANSFORM_TYPES))
                .required()
                .requires_replace(),
        )
        .attribute(
            AttributeSchema::new("attributes", AttributeType::Json)
                .with_description("JSON-encoded transform attributes"),
        )
        .attribute(AttributeSchema::new("internal", AttributeType::Bool).computed())
}

pub fn data_source_schema() -> ResourceSchema {
    lookup_schema(resource_schema(), &["id"]).with_description("Look up a transform by id")
}
