//! Attributes - Untyped attribute maps exchanged with the host
//!
//! Handlers work on typed models; the host speaks in maps keyed by snake_case
//! attribute name. Nested objects are JSON objects using the same keys. An
//! object holding an unknown value anywhere is unknown as a whole.

use std::collections::BTreeMap;

use crate::provider::{ProviderError, ProviderResult};
use crate::value::Value;

/// Attribute values of one resource instance, keyed by attribute name
pub type Attributes = BTreeMap<String, Value<serde_json::Value>>;

/// Scalar and collection types that can appear as an attribute value
pub trait AttributeValue: Sized {
    fn to_json(&self) -> serde_json::Value;

    fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error>;
}

macro_rules! attribute_value {
    ($($ty:ty),*) => {
        $(
            impl AttributeValue for $ty {
                fn to_json(&self) -> serde_json::Value {
                    serde_json::Value::from(self.clone())
                }

                fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
                    serde_json::from_value(value)
                }
            }
        )*
    };
}

attribute_value!(String, bool, i32, Vec<String>);

impl AttributeValue for BTreeMap<String, String> {
    fn to_json(&self) -> serde_json::Value {
        self.iter()
            .map(|(k, v)| (k.clone(), serde_json::Value::from(v.as_str())))
            .collect::<serde_json::Map<_, _>>()
            .into()
    }

    fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// A typed model that converts to and from an attribute map
pub trait AttributeModel: Sized {
    fn from_attributes(attributes: &Attributes) -> ProviderResult<Self>;

    fn to_attributes(&self) -> Attributes;
}

fn lookup<'a>(attributes: &'a Attributes, name: &str) -> Value<&'a serde_json::Value> {
    match attributes.get(name) {
        Some(Value::Known(serde_json::Value::Null)) | Some(Value::Null) | None => Value::Null,
        Some(Value::Unknown) => Value::Unknown,
        Some(Value::Known(v)) => Value::Known(v),
    }
}

/// Read a scalar or collection attribute; a missing key reads as null
pub fn get<T: AttributeValue>(attributes: &Attributes, name: &str) -> ProviderResult<Value<T>> {
    match lookup(attributes, name) {
        Value::Known(v) => T::from_json(v.clone())
            .map(Value::Known)
            .map_err(|e| ProviderError::conversion(name, e)),
        Value::Null => Ok(Value::Null),
        Value::Unknown => Ok(Value::Unknown),
    }
}

pub fn set<T: AttributeValue>(attributes: &mut Attributes, name: &str, value: &Value<T>) {
    attributes.insert(name.to_string(), value.as_ref().map(T::to_json));
}

/// Read a nested object attribute
pub fn get_object<T: AttributeModel>(
    attributes: &Attributes,
    name: &str,
) -> ProviderResult<Value<T>> {
    match lookup(attributes, name) {
        Value::Known(v) => object_from_json(v, name).map(Value::Known),
        Value::Null => Ok(Value::Null),
        Value::Unknown => Ok(Value::Unknown),
    }
}

pub fn set_object<T: AttributeModel>(attributes: &mut Attributes, name: &str, value: &Value<T>) {
    let json = value.as_ref().and_then(object_json);
    attributes.insert(name.to_string(), json);
}

/// Read a list-of-objects attribute
pub fn get_object_list<T: AttributeModel>(
    attributes: &Attributes,
    name: &str,
) -> ProviderResult<Value<Vec<T>>> {
    match lookup(attributes, name) {
        Value::Known(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| object_from_json(item, name))
            .collect::<ProviderResult<Vec<_>>>()
            .map(Value::Known),
        Value::Known(other) => Err(ProviderError::configuration(format!(
            "Attribute '{}' must be a list of objects, got {}",
            name, other
        ))),
        Value::Null => Ok(Value::Null),
        Value::Unknown => Ok(Value::Unknown),
    }
}

pub fn set_object_list<T: AttributeModel>(
    attributes: &mut Attributes,
    name: &str,
    value: &Value<Vec<T>>,
) {
    let json = value.as_ref().and_then(|items| object_list_json(items));
    attributes.insert(name.to_string(), json);
}

fn object_from_json<T: AttributeModel>(value: &serde_json::Value, name: &str) -> ProviderResult<T> {
    match value {
        serde_json::Value::Object(map) => {
            let attributes: Attributes = map
                .iter()
                .map(|(k, v)| {
                    let v = if v.is_null() {
                        Value::Null
                    } else {
                        Value::Known(v.clone())
                    };
                    (k.clone(), v)
                })
                .collect();
            T::from_attributes(&attributes)
        }
        other => Err(ProviderError::configuration(format!(
            "Attribute '{}' must be an object, got {}",
            name, other
        ))),
    }
}

/// JSON object form of a nested model, unknown if any field is unknown
pub fn object_json<T: AttributeModel>(model: &T) -> Value<serde_json::Value> {
    let mut object = serde_json::Map::new();
    for (name, value) in model.to_attributes() {
        match value {
            Value::Known(v) => {
                object.insert(name, v);
            }
            Value::Null => {
                object.insert(name, serde_json::Value::Null);
            }
            Value::Unknown => return Value::Unknown,
        }
    }
    Value::Known(serde_json::Value::Object(object))
}

/// JSON array form of a list of nested models, unknown if any item is unknown
pub fn object_list_json<T: AttributeModel>(items: &[T]) -> Value<serde_json::Value> {
    let mut array = Vec::with_capacity(items.len());
    for item in items {
        match object_json(item) {
            Value::Known(v) => array.push(v),
            _ => return Value::Unknown,
        }
    }
    Value::Known(serde_json::Value::Array(array))
}
