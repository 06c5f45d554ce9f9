//! Value - Tri-state attribute values
//!
//! Every attribute of a plan or state is either absent from the configuration,
//! not yet known (a placeholder for something computed during apply), or known.
//! Collapsing the first two loses information the differ depends on, so they are
//! kept as distinct variants.

use thiserror::Error;

/// A planned or stored attribute value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value<T> {
    /// Absent from configuration
    Null,
    /// Not known until apply
    Unknown,
    /// Concrete value
    Known(T),
}

/// Error returned when reading a non-known value as concrete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValueError {
    #[error("value is null")]
    Null,
    #[error("value is not known until apply")]
    Unknown,
}

impl<T> Default for Value<T> {
    fn default() -> Self {
        Value::Null
    }
}

impl<T> Value<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Value::Unknown)
    }

    /// True iff the value is neither null nor unknown
    pub fn is_known(&self) -> bool {
        matches!(self, Value::Known(_))
    }

    /// Borrow the concrete value, if any
    pub fn known(&self) -> Option<&T> {
        match self {
            Value::Known(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the concrete value, failing for null and unknown values
    pub fn get(&self) -> Result<&T, ValueError> {
        match self {
            Value::Known(v) => Ok(v),
            Value::Null => Err(ValueError::Null),
            Value::Unknown => Err(ValueError::Unknown),
        }
    }

    /// `None` becomes `Null`
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Value::Known(v),
            None => Value::Null,
        }
    }

    pub fn as_ref(&self) -> Value<&T> {
        match self {
            Value::Known(v) => Value::Known(v),
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Value<U> {
        match self {
            Value::Known(v) => Value::Known(f(v)),
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
        }
    }

    pub fn and_then<U>(self, f: impl FnOnce(T) -> Value<U>) -> Value<U> {
        match self {
            Value::Known(v) => f(v),
            Value::Null => Value::Null,
            Value::Unknown => Value::Unknown,
        }
    }

    /// Keep a known value, otherwise fall back to `other`
    ///
    /// Used when a computed attribute is unknown in the plan and the prior
    /// state already holds its value.
    pub fn or(self, other: Value<T>) -> Value<T> {
        match self {
            Value::Known(_) => self,
            _ => other,
        }
    }

    /// Plan/state equality used by the differ
    ///
    /// Two values match when both are known and equal, or when neither is known.
    pub fn matches(&self, other: &Value<T>) -> bool
    where
        T: PartialEq,
    {
        match (self.known(), other.known()) {
            (Some(a), Some(b)) => a == b,
            (None, None) => true,
            _ => false,
        }
    }
}

impl Value<String> {
    pub fn as_deref(&self) -> Option<&str> {
        self.known().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Value<T> {
    fn from(value: Option<T>) -> Self {
        Value::from_option(value)
    }
}

impl From<&str> for Value<String> {
    fn from(value: &str) -> Self {
        Value::Known(value.to_string())
    }
}
