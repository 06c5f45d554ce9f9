//! Lifecycle state schema definitions

use isc_core::schema::{AttributeSchema, AttributeType, ResourceSchema, types};

use crate::resources::lookup_schema;
use crate::validation::{ACCOUNT_ACTIONS, IDENTITY_STATES, email, object_id};

fn email_notification_option() -> AttributeType {
    types::object(vec![
        AttributeSchema::new("notify_managers", AttributeType::Bool),
        AttributeSchema::new("notify_all_admins", AttributeType::Bool),
        AttributeSchema::new("notify_specific_users", AttributeType::Bool),
        AttributeSchema::new("email_address_list", AttributeType::List(Box::new(email()))),
    ])
}

fn account_action() -> AttributeType {
    types::object(vec![
        AttributeSchema::new("action", types::enumeration(ACCOUNT_ACTIONS)).required(),
        AttributeSchema::new("source_ids", AttributeType::List(Box::new(object_id()))),
        AttributeSchema::new("exclude_source_ids", AttributeType::List(Box::new(object_id()))),
        AttributeSchema::new("all_sources", AttributeType::Bool),
    ])
}

pub fn resource_schema() -> ResourceSchema {
    ResourceSchema::new("isc_lifecycle_state")
        .with_description("Lifecycle state of an identity profile")
        .attribute(
            AttributeSchema::new("identity_profile_id", object_id())
                .required()
                .requires_replace(),
        )
        .attribute(AttributeSchema::new("id", AttributeType::String).computed())
        .attribute(
            AttributeSchema::new("name", AttributeType::String)
                .required()
                .requires_replace(),
        )
        .attribute(
            AttributeSchema::new("technical_name", AttributeType::String)
                .required()
                .requires_replace(),
        )
        .attribute(AttributeSchema::new("description", AttributeType::String))
        .attribute(AttributeSchema::new("enabled", AttributeType::Bool).optional_computed())
        .attribute(AttributeSchema::new("identity_count", AttributeType::Int).computed())
        .attribute(
            AttributeSchema::new("identity_state", types::enumeration(IDENTITY_STATES))
                .optional_computed(),
        )
        .attribute(AttributeSchema::new("priority", types::non_negative_int()).optional_computed())
        .attribute(AttributeSchema::new(
            "access_profile_ids",
            AttributeType::List(Box::new(object_id())),
        ))
        .attribute(
            AttributeSchema::new("email_notification_option", email_notification_option())
                .optional_computed(),
        )
        .attribute(AttributeSchema::new(
            "account_actions",
            AttributeType::List(Box::new(account_action())),
        ))
        .attribute(AttributeSchema::new("created", AttributeType::String).computed())
        .attribute(AttributeSchema::new("modified", AttributeType::String).computed())
}

pub fn data_source_schema() -> ResourceSchema {
    lookup_schema(resource_schema(), &["identity_profile_id", "id"])
        .with_description("Look up a lifecycle state of an identity profile")
}

#[cfg(test)]
mod tests {
    use super::*;
    use isc_core::value::Value;
    use serde_json::json;
    use std::collections::BTreeMap;

    fn config() -> BTreeMap<String, Value<serde_json::Value>> {
        let mut config = BTreeMap::new();
        config.insert(
            "identity_profile_id".to_string(),
            Value::Known(json!("2c9180835d2e5168015d32f890ca1581")),
        );
        config.insert("name".to_string(), Value::Known(json!("Active")));
        config.insert("technical_name".to_string(), Value::Known(json!("active")));
        config
    }

    #[test]
    fn accepts_minimal_configuration() {
        assert!(resource_schema().validate(&config()).is_ok());
    }

    #[test]
    fn rejects_invalid_account_action() {
        let mut config = config();
        config.insert(
            "account_actions".to_string(),
            Value::Known(json!([{"action": "SUSPEND"}])),
        );
        assert!(resource_schema().validate(&config).is_err());
    }

    #[test]
    fn rejects_computed_identity_count() {
        let mut config = config();
        config.insert("identity_count".to_string(), Value::Known(json!(3)));
        assert!(resource_schema().validate(&config).is_err());
    }

    #[test]
    fn data_source_needs_profile_and_id() {
        let schema = data_source_schema();
        assert!(schema.get("identity_profile_id").unwrap().required);
        assert!(schema.get("id").unwrap().required);
        assert!(schema.get("technical_name").unwrap().computed);
    }
}
