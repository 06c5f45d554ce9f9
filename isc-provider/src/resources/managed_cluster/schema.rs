//! Managed cluster schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::resources::lookup_schema;
use crate::validation::CLUSTER_TYPES;

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_managed_cluster")
        .with_description("Managed cluster of virtual appliances")
        .attribute(AttributeSchema::new("id", AttributeType::String).computed())
        .attribute(AttributeSchema::new("name", AttributeType::String).required())
        .attribute(
            AttributeSchema::new("type", types::enumeration(CLUSTER_TYPES))
                .optional_computed()
                .requires_replace(),
        )
        .attribute(AttributeSchema::new("description", AttributeType::String))
        .attribute(
            AttributeSchema::new("configuration", types::string_map())
                .optional_computed()
                .with_description("Cluster settings with snake_case keys, e.g. gmt_offset"),
        )
        .attribute(AttributeSchema::new("client_type", AttributeType::String).computed())
        .attribute(AttributeSchema::new("ccg_version", AttributeType::String).computed())
        .attribute(AttributeSchema::new("pod", AttributeType::String).computed())
        .attribute(AttributeSchema::new("org", AttributeType::String).computed())
        .attribute(AttributeSchema::new("status", AttributeType::String).computed())
        .attribute(
            AttributeSchema::new("remove_clients_on_delete", AttributeType::Bool)
                .with_description("Also remove the cluster's virtual appliances on delete"),
        )
}

pub fn data_source_schema() -> ResourceSchema {
    let mut schema = lookup_schema(resource_schema(), &["id"])
        .with_description("Look up a managed cluster by id");
    schema.attributes.remove("remove_clients_on_delete");
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use isc_core::value::Value;
    use serde_json::json;
    use std::collections::BTreeMap;

    #[test]
    fn configuration_values_must_be_strings() {
        let mut config = BTreeMap::new();
        config.insert("name".to_string(), Value::Known(json!("Corporate Cluster")));
        config.insert(
            "configuration".to_string(),
            Value::Known(json!({"gmt_offset": "-5"})),
        );
        assert!(resource_schema().validate(&config).is_ok());

        config.insert(
            "configuration".to_string(),
            Value::Known(json!({"gmt_offset": -5})),
        );
        assert!(resource_schema().validate(&config).is_err());
    }

    #[test]
    fn data_source_has_no_local_attributes() {
        let schema = data_source_schema();
        assert!(schema.get("remove_clients_on_delete").is_none());
        assert!(schema.get("id").unwrap().required);
    }
}
