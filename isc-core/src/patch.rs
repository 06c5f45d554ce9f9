//! Patch - JSON Patch (RFC 6902) documents
//!
//! Operations are kept in insertion order. The server applies them one after
//! another, so the builder never removes or reorders anything once added.

use serde::{Deserialize, Serialize};

/// Patch operation kind
///
/// Only `replace` is ever emitted against the ISC APIs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Replace,
}

/// A single `{op, path, value}` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    /// JSON pointer into the wire object (e.g., "/enabled")
    pub path: String,
    pub value: serde_json::Value,
}

impl PatchOperation {
    pub fn replace(path: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            op: PatchOp::Replace,
            path: path.into(),
            value: value.into(),
        }
    }
}

/// Accumulates patch operations in FIFO order
#[derive(Debug, Clone, Default)]
pub struct PatchBuilder {
    operations: Vec<PatchOperation>,
}

impl PatchBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a replace operation
    pub fn add_replace(&mut self, path: impl Into<String>, value: impl Into<serde_json::Value>) {
        self.operations.push(PatchOperation::replace(path, value));
    }

    /// Append a replace operation for an optional string
    ///
    /// `None` replaces with an explicit `null`, which clears the field on the
    /// server. An empty string is sent as `""`. To leave a field untouched, do
    /// not call this at all.
    pub fn add_replace_optional_string(&mut self, path: impl Into<String>, value: Option<&str>) {
        let value = match value {
            Some(s) => serde_json::Value::String(s.to_string()),
            None => serde_json::Value::Null,
        };
        self.add_replace(path, value);
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.operations
    }

    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.operations.len()
    }

    pub fn build(self) -> Vec<PatchOperation> {
        self.operations
    }
}
