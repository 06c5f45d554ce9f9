//! Differ - Compare a plan with the prior state to build a JSON Patch
//!
//! Each patchable resource type supplies an explicit table of fields (name,
//! wire path, accessor, key transform). The differ walks that table in order
//! and emits one `replace` operation per changed field, so the emitted order is
//! always the table order.

use std::collections::BTreeMap;

use log::debug;

use crate::case_convert::keys_to_camel_case;
use crate::patch::{PatchBuilder, PatchOperation};
use crate::value::Value;

/// Borrowed view of one field of a model
#[derive(Debug, Clone, PartialEq)]
pub enum FieldRef<'a> {
    String(&'a Value<String>),
    Bool(&'a Value<bool>),
    Int(&'a Value<i32>),
    StringList(&'a Value<Vec<String>>),
    StringMap(&'a Value<BTreeMap<String, String>>),
    /// Object-shaped fields already rendered in their wire form
    Json(Value<serde_json::Value>),
}

impl FieldRef<'_> {
    fn is_unknown(&self) -> bool {
        match self {
            FieldRef::String(v) => v.is_unknown(),
            FieldRef::Bool(v) => v.is_unknown(),
            FieldRef::Int(v) => v.is_unknown(),
            FieldRef::StringList(v) => v.is_unknown(),
            FieldRef::StringMap(v) => v.is_unknown(),
            FieldRef::Json(v) => v.is_unknown(),
        }
    }

    /// Plan/state equality: both known and equal, or both not known
    fn matches(&self, other: &FieldRef<'_>) -> bool {
        match (self, other) {
            (FieldRef::String(a), FieldRef::String(b)) => a.matches(b),
            (FieldRef::Bool(a), FieldRef::Bool(b)) => a.matches(b),
            (FieldRef::Int(a), FieldRef::Int(b)) => a.matches(b),
            (FieldRef::StringList(a), FieldRef::StringList(b)) => a.matches(b),
            (FieldRef::StringMap(a), FieldRef::StringMap(b)) => a.matches(b),
            (FieldRef::Json(a), FieldRef::Json(b)) => a.matches(b),
            _ => false,
        }
    }

    /// JSON form of a known value
    fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            FieldRef::String(v) => v.known().map(|s| serde_json::Value::from(s.as_str())),
            FieldRef::Bool(v) => v.known().map(|b| serde_json::Value::from(*b)),
            FieldRef::Int(v) => v.known().map(|i| serde_json::Value::from(*i)),
            FieldRef::StringList(v) => v.known().map(|items| serde_json::Value::from(items.clone())),
            FieldRef::StringMap(v) => v.known().map(|map| {
                serde_json::Value::Object(
                    map.iter()
                        .map(|(k, v)| (k.clone(), serde_json::Value::from(v.as_str())))
                        .collect(),
                )
            }),
            FieldRef::Json(v) => v.known().cloned(),
        }
    }
}

/// Transformation applied to a value before it is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    #[default]
    None,
    /// Convert object keys from snake_case to camelCase
    CamelCaseKeys,
}

impl Transform {
    fn apply(self, value: serde_json::Value) -> serde_json::Value {
        match self {
            Transform::None => value,
            Transform::CamelCaseKeys => keys_to_camel_case(&value),
        }
    }
}

/// One row of a resource's patch table
pub struct PatchField<R> {
    /// Provider attribute name (e.g., "identity_state")
    pub name: &'static str,
    /// Wire path (e.g., "/identityState")
    pub path: &'static str,
    pub get: fn(&R) -> FieldRef<'_>,
    pub transform: Transform,
}

impl<R> PatchField<R> {
    pub fn new(name: &'static str, path: &'static str, get: fn(&R) -> FieldRef<'_>) -> Self {
        Self {
            name,
            path,
            get,
            transform: Transform::None,
        }
    }

    pub fn camel_case_keys(mut self) -> Self {
        self.transform = Transform::CamelCaseKeys;
        self
    }
}

/// A model that can be updated through JSON Patch
pub trait Patchable: Sized {
    /// Resource type name used in log output
    const RESOURCE_TYPE: &'static str;

    /// Fields the API accepts in a patch, in emission order
    fn patch_fields() -> Vec<PatchField<Self>>;
}

/// Compute the patch that moves `state` to `plan`
///
/// A field that is known in the state but null in the plan is cleared with an
/// explicit `null`. A field that is unknown in the plan is never emitted.
pub fn diff<R: Patchable>(plan: &R, state: &R) -> Vec<PatchOperation> {
    let mut builder = PatchBuilder::new();

    for field in R::patch_fields() {
        let planned = (field.get)(plan);
        let current = (field.get)(state);

        if planned.matches(&current) {
            continue;
        }

        if planned.is_unknown() {
            debug!(
                "{}: skipping '{}', planned value is unknown",
                R::RESOURCE_TYPE,
                field.name
            );
            continue;
        }

        match (&planned, planned.to_json()) {
            (FieldRef::String(v), _) => builder.add_replace_optional_string(field.path, v.as_deref()),
            (_, Some(value)) => builder.add_replace(field.path, field.transform.apply(value)),
            (_, None) => builder.add_replace(field.path, serde_json::Value::Null),
        }
    }

    builder.build()
}

/// Names of the patchable fields that differ between plan and state
pub fn changed_fields<R: Patchable>(plan: &R, state: &R) -> Vec<&'static str> {
    R::patch_fields()
        .into_iter()
        .filter(|field| !(field.get)(plan).matches(&(field.get)(state)))
        .map(|field| field.name)
        .collect()
}
