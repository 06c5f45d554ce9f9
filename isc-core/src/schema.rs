//! Schema - Attribute schemas for resources and data sources
//!
//! Each resource type declares its attributes (type, required/computed flags,
//! static validators). The host validates configuration against the schema
//! before planning.

use std::collections::BTreeMap;
use std::fmt;

use crate::value::Value;

/// Attribute type
#[derive(Debug, Clone)]
pub enum AttributeType {
    String,
    Int,
    Bool,
    /// String restricted to a fixed set of values
    Enum(Vec<String>),
    /// String holding a JSON document
    Json,
    /// Custom type with a validation function
    Custom {
        name: String,
        base: Box<AttributeType>,
        validate: fn(&serde_json::Value) -> Result<(), String>,
    },
    List(Box<AttributeType>),
    Map(Box<AttributeType>),
    /// Nested object with its own attributes
    Object(BTreeMap<String, AttributeSchema>),
}

impl AttributeType {
    /// Check if a value conforms to this type
    pub fn validate(&self, value: &serde_json::Value) -> Result<(), TypeError> {
        use serde_json::Value as Json;

        match (self, value) {
            // Explicit nulls are left to the required check
            (_, Json::Null) => Ok(()),
            (AttributeType::String, Json::String(_)) => Ok(()),
            (AttributeType::Int, Json::Number(n)) if n.is_i64() => {
                match n.as_i64().map(i32::try_from) {
                    Some(Ok(_)) => Ok(()),
                    _ => Err(TypeError::ValidationFailed {
                        message: format!("{} does not fit in a 32-bit integer", n),
                    }),
                }
            }
            (AttributeType::Bool, Json::Bool(_)) => Ok(()),

            (AttributeType::Enum(variants), Json::String(s)) => {
                if variants.iter().any(|v| v == s) {
                    Ok(())
                } else {
                    Err(TypeError::InvalidEnumVariant {
                        value: s.clone(),
                        expected: variants.clone(),
                    })
                }
            }

            (AttributeType::Json, Json::String(s)) => serde_json::from_str::<Json>(s)
                .map(|_| ())
                .map_err(|e| TypeError::InvalidJson {
                    message: e.to_string(),
                }),

            (AttributeType::Custom { validate, base, .. }, v) => {
                base.validate(v)?;
                validate(v).map_err(|msg| TypeError::ValidationFailed { message: msg })
            }

            (AttributeType::List(inner), Json::Array(items)) => {
                for (i, item) in items.iter().enumerate() {
                    inner.validate(item).map_err(|e| TypeError::ListItemError {
                        index: i,
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Map(inner), Json::Object(map)) => {
                for (k, v) in map {
                    inner.validate(v).map_err(|e| TypeError::MapValueError {
                        key: k.clone(),
                        inner: Box::new(e),
                    })?;
                }
                Ok(())
            }

            (AttributeType::Object(attributes), Json::Object(map)) => {
                for (k, v) in map {
                    match attributes.get(k) {
                        Some(schema) => {
                            schema
                                .attr_type
                                .validate(v)
                                .map_err(|e| TypeError::MapValueError {
                                    key: k.clone(),
                                    inner: Box::new(e),
                                })?
                        }
                        None => return Err(TypeError::UnknownAttribute { name: k.clone() }),
                    }
                }
                for (name, schema) in attributes {
                    if schema.required && map.get(name).is_none_or(Json::is_null) {
                        return Err(TypeError::MissingRequired { name: name.clone() });
                    }
                }
                Ok(())
            }

            _ => Err(TypeError::TypeMismatch {
                expected: self.type_name(),
                got: json_type_name(value).to_string(),
            }),
        }
    }

    fn type_name(&self) -> String {
        match self {
            AttributeType::String => "String".to_string(),
            AttributeType::Int => "Int".to_string(),
            AttributeType::Bool => "Bool".to_string(),
            AttributeType::Enum(variants) => format!("Enum({})", variants.join(" | ")),
            AttributeType::Json => "Json".to_string(),
            AttributeType::Custom { name, .. } => name.clone(),
            AttributeType::List(inner) => format!("List<{}>", inner.type_name()),
            AttributeType::Map(inner) => format!("Map<{}>", inner.type_name()),
            AttributeType::Object(_) => "Object".to_string(),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.type_name())
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "Null",
        serde_json::Value::Bool(_) => "Bool",
        serde_json::Value::Number(_) => "Number",
        serde_json::Value::String(_) => "String",
        serde_json::Value::Array(_) => "List",
        serde_json::Value::Object(_) => "Object",
    }
}

/// Type error
#[derive(Debug, Clone, thiserror::Error)]
pub enum TypeError {
    #[error("Type mismatch: expected {expected}, got {got}")]
    TypeMismatch { expected: String, got: String },

    #[error("Invalid enum variant '{value}', expected one of: {}", expected.join(", "))]
    InvalidEnumVariant {
        value: String,
        expected: Vec<String>,
    },

    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String },

    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Required attribute '{name}' is missing")]
    MissingRequired { name: String },

    #[error("Attribute '{name}' is computed and cannot be configured")]
    ComputedOnly { name: String },

    #[error("Unknown attribute '{name}'")]
    UnknownAttribute { name: String },

    #[error("List item at index {index}: {inner}")]
    ListItemError { index: usize, inner: Box<TypeError> },

    #[error("Value for '{key}': {inner}")]
    MapValueError { key: String, inner: Box<TypeError> },
}

/// Attribute schema
#[derive(Debug, Clone)]
pub struct AttributeSchema {
    pub name: String,
    pub attr_type: AttributeType,
    pub required: bool,
    /// Set by the server; may also be configured when `optional` is set
    pub computed: bool,
    pub optional: bool,
    /// Value is redacted from plan output
    pub sensitive: bool,
    /// Changing this attribute destroys and recreates the resource
    pub requires_replace: bool,
    pub description: Option<String>,
}

impl AttributeSchema {
    pub fn new(name: impl Into<String>, attr_type: AttributeType) -> Self {
        Self {
            name: name.into(),
            attr_type,
            required: false,
            computed: false,
            optional: true,
            sensitive: false,
            requires_replace: false,
            description: None,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self.optional = false;
        self
    }

    /// Server-assigned, not configurable
    pub fn computed(mut self) -> Self {
        self.computed = true;
        self.optional = false;
        self
    }

    /// Configurable, falls back to the server value when omitted
    pub fn optional_computed(mut self) -> Self {
        self.computed = true;
        self.optional = true;
        self
    }

    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    pub fn requires_replace(mut self) -> Self {
        self.requires_replace = true;
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    fn is_configurable(&self) -> bool {
        self.required || self.optional
    }
}

/// Resource schema
#[derive(Debug, Clone)]
pub struct ResourceSchema {
    pub type_name: String,
    pub attributes: BTreeMap<String, AttributeSchema>,
    pub description: Option<String>,
}

impl ResourceSchema {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            attributes: BTreeMap::new(),
            description: None,
        }
    }

    pub fn attribute(mut self, schema: AttributeSchema) -> Self {
        self.attributes.insert(schema.name.clone(), schema);
        self
    }

    pub fn with_description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&AttributeSchema> {
        self.attributes.get(name)
    }

    /// Names of the attributes whose change forces replacement
    pub fn replace_attributes(&self) -> Vec<&str> {
        self.attributes
            .values()
            .filter(|a| a.requires_replace)
            .map(|a| a.name.as_str())
            .collect()
    }

    /// Validate a configuration
    ///
    /// Unknown values are skipped; they are checked again once known.
    pub fn validate(
        &self,
        config: &BTreeMap<String, Value<serde_json::Value>>,
    ) -> Result<(), Vec<TypeError>> {
        let mut errors = Vec::new();

        for (name, schema) in &self.attributes {
            let value = config.get(name).unwrap_or(&Value::Null);
            if schema.required && value.is_null() {
                errors.push(TypeError::MissingRequired { name: name.clone() });
            }
        }

        for (name, value) in config {
            let Some(schema) = self.attributes.get(name) else {
                errors.push(TypeError::UnknownAttribute { name: name.clone() });
                continue;
            };
            let Some(value) = value.known() else {
                continue;
            };
            if !schema.is_configurable() && !value.is_null() {
                errors.push(TypeError::ComputedOnly { name: name.clone() });
                continue;
            }
            if let Err(e) = schema.attr_type.validate(value) {
                errors.push(TypeError::MapValueError {
                    key: name.clone(),
                    inner: Box::new(e),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Helper functions for common types
pub mod types {
    use super::*;

    /// Percentage (0-100)
    pub fn percentage() -> AttributeType {
        AttributeType::Custom {
            name: "Percentage".to_string(),
            base: Box::new(AttributeType::Int),
            validate: |v| check_range(v, 0, 100),
        }
    }

    /// Non-negative integer
    pub fn non_negative_int() -> AttributeType {
        AttributeType::Custom {
            name: "NonNegativeInt".to_string(),
            base: Box::new(AttributeType::Int),
            validate: |v| check_range(v, 0, i64::from(i32::MAX)),
        }
    }

    fn check_range(value: &serde_json::Value, min: i64, max: i64) -> Result<(), String> {
        match value.as_i64() {
            Some(n) if n >= min && n <= max => Ok(()),
            Some(n) => Err(format!("{} is outside the range {}..={}", n, min, max)),
            None => Err("Expected integer".to_string()),
        }
    }

    pub fn enumeration(values: &[&str]) -> AttributeType {
        AttributeType::Enum(values.iter().map(|v| v.to_string()).collect())
    }

    pub fn string_list() -> AttributeType {
        AttributeType::List(Box::new(AttributeType::String))
    }

    pub fn string_map() -> AttributeType {
        AttributeType::Map(Box::new(AttributeType::String))
    }

    pub fn object(attributes: Vec<AttributeSchema>) -> AttributeType {
        AttributeType::Object(
            attributes
                .into_iter()
                .map(|a| (a.name.clone(), a))
                .collect(),
        )
    }
}
