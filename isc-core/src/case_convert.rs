//! Case conversion between provider attribute names and ISC wire names
//!
//! Provider attributes and map keys use snake_case (e.g., `gmt_offset`).
//! The ISC REST APIs use camelCase (e.g., `gmtOffset`).

use std::collections::BTreeMap;

use heck::{ToLowerCamelCase, ToSnakeCase};

/// Convert snake_case to camelCase
/// e.g., "gmt_offset" -> "gmtOffset"
pub fn to_camel_case(s: &str) -> String {
    s.to_lower_camel_case()
}

/// Convert camelCase to snake_case
/// e.g., "gmtOffset" -> "gmt_offset"
pub fn to_snake_case(s: &str) -> String {
    s.to_snake_case()
}

/// Convert the keys of a string map to camelCase (for sending to ISC)
pub fn map_keys_to_camel_case(map: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(k, v)| (to_camel_case(k), v.clone()))
        .collect()
}

/// Convert the keys of a string map to snake_case (for reading from ISC)
pub fn map_keys_to_snake_case(map: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    map.iter()
        .map(|(k, v)| (to_snake_case(k), v.clone()))
        .collect()
}

/// Recursively convert object keys to camelCase
///
/// Only keys are touched; string values pass through unchanged.
pub fn keys_to_camel_case(value: &serde_json::Value) -> serde_json::Value {
    convert_keys(value, &to_camel_case)
}

fn convert_keys(value: &serde_json::Value, convert: &dyn Fn(&str) -> String) -> serde_json::Value {
    match value {
        serde_json::Value::Object(map) => serde_json::Value::Object(
            map.iter()
                .map(|(k, v)| (convert(k), convert_keys(v, convert)))
                .collect(),
        ),
        serde_json::Value::Array(items) => {
            serde_json::Value::Array(items.iter().map(|v| convert_keys(v, convert)).collect())
        }
        other => other.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("gmt_offset"), "gmtOffset");
        assert_eq!(to_camel_case("debug"), "debug");
        assert_eq!(to_camel_case("cluster_external_id"), "clusterExternalId");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("gmtOffset"), "gmt_offset");
        assert_eq!(to_snake_case("debug"), "debug");
        assert_eq!(to_snake_case("clusterExternalId"), "cluster_external_id");
    }

    #[test]
    fn map_keys_round_trip() {
        let mut local = BTreeMap::new();
        local.insert("gmt_offset".to_string(), "-5".to_string());
        local.insert("debug".to_string(), "false".to_string());

        let wire = map_keys_to_camel_case(&local);
        assert_eq!(wire.get("gmtOffset"), Some(&"-5".to_string()));
        assert_eq!(map_keys_to_snake_case(&wire), local);
    }

    #[test]
    fn nested_keys_are_converted() {
        let local = json!({
            "gmt_offset": "-5",
            "nested_object": {"inner_key": "some_value"},
            "list_of": [{"item_key": 1}]
        });

        assert_eq!(
            keys_to_camel_case(&local),
            json!({
                "gmtOffset": "-5",
                "nestedObject": {"innerKey": "some_value"},
                "listOf": [{"itemKey": 1}]
            })
        );
    }
}
