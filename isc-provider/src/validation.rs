//! Validation - Static checks for ISC attribute values
//!
//! Each validator is exposed as an [`AttributeType`] so schemas can attach it
//! directly; the plain `validate_*` functions are shared with the handlers.

use std::sync::LazyLock;

use isc_core::schema::AttributeType;
use regex::Regex;

/// ISC object ids are 32 lowercase hex characters
static OBJECT_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("OBJECT_ID_REGEX is a valid pattern"));

/// Identity attribute names are alphanumeric and start with a letter
static ATTRIBUTE_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z][A-Za-z0-9]*$").expect("ATTRIBUTE_NAME_REGEX is a valid pattern")
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-z0-9._%+'-]+@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}$")
        .expect("EMAIL_REGEX is a valid pattern")
});

/// Transform types accepted by `/v3/transforms`
pub const TRANSFORM_TYPES: &[&str] = &[
    "accountAttribute",
    "base64Decode",
    "base64Encode",
    "concat",
    "conditional",
    "dateCompare",
    "dateFormat",
    "dateMath",
    "decomposeDiacriticalMarks",
    "e164phone",
    "firstValid",
    "getReference",
    "getReferenceIdentityAttribute",
    "identityAttribute",
    "indexOf",
    "iso3166",
    "lastIndexOf",
    "leftPad",
    "lookup",
    "lower",
    "nameNormalizer",
    "randomAlphaNumeric",
    "randomNumeric",
    "reference",
    "replace",
    "replaceAll",
    "rightPad",
    "rule",
    "split",
    "static",
    "substring",
    "trim",
    "upper",
    "usernameGenerator",
    "uuid",
];

pub const CONNECTOR_STATUSES: &[&str] = &["DEPRECATED", "DEVELOPMENT", "DEMO", "RELEASED"];

pub const IDENTITY_STATES: &[&str] = &["ACTIVE", "INACTIVE_SHORT_TERM", "INACTIVE_LONG_TERM"];

pub const ACCOUNT_ACTIONS: &[&str] = &["ENABLE", "DISABLE", "DELETE"];

pub const CLUSTER_TYPES: &[&str] = &["idn", "iai"];

pub fn validate_object_id(id: &str) -> Result<(), String> {
    if OBJECT_ID_REGEX.is_match(id) {
        Ok(())
    } else {
        Err(format!("'{}' is not a valid object id (32 hex characters)", id))
    }
}

pub fn validate_attribute_name(name: &str) -> Result<(), String> {
    if ATTRIBUTE_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(format!(
            "'{}' is not a valid identity attribute name: use letters and digits, starting with a letter",
            name
        ))
    }
}

pub fn validate_email(email: &str) -> Result<(), String> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(format!("'{}' is not a valid email address", email))
    }
}

fn with_string(value: &serde_json::Value, check: fn(&str) -> Result<(), String>) -> Result<(), String> {
    match value {
        serde_json::Value::String(s) => check(s),
        _ => Err("Expected string".to_string()),
    }
}

// =============================================================================
// Attribute types
// =============================================================================

pub fn object_id() -> AttributeType {
    AttributeType::Custom {
        name: "ObjectId".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| with_string(value, validate_object_id),
    }
}

pub fn attribute_name() -> AttributeType {
    AttributeType::Custom {
        name: "IdentityAttributeName".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| with_string(value, validate_attribute_name),
    }
}

pub fn email() -> AttributeType {
    AttributeType::Custom {
        name: "Email".to_string(),
        base: Box::new(AttributeType::String),
        validate: |value| with_string(value, validate_email),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_ids() {
        assert!(validate_object_id("2c9180835d2e5168015d32f890ca1581").is_ok());
        assert!(validate_object_id("2C9180835D2E5168015D32F890CA1581").is_err());
        assert!(validate_object_id("2c9180835d2e5168").is_err());
        assert!(validate_object_id("").is_err());
    }

    #[test]
    fn attribute_names() {
        assert!(validate_attribute_name("costCenter").is_ok());
        assert!(validate_attribute_name("dept2").is_ok());
        assert!(validate_attribute_name("cost_center").is_err());
        assert!(validate_attribute_name("2dept").is_err());
    }

    #[test]
    fn emails() {
        assert!(validate_email("ops@example.com").is_ok());
        assert!(validate_email("first.last+iam@corp.example.co").is_ok());
        assert!(validate_email("ops@").is_err());
        assert!(validate_email("example.com").is_err());
    }

    #[test]
    fn attribute_types_validate_json_values() {
        assert!(object_id().validate(&json!("2c9180835d2e5168015d32f890ca1581")).is_ok());
        assert!(object_id().validate(&json!("nope")).is_err());
        assert!(email().validate(&json!(42)).is_err());
        assert!(attribute_name().validate(&serde_json::Value::Null).is_ok());
    }
}
