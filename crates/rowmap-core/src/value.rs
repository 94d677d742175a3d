//! Driver-neutral parameter and result values
//!
//! [`Value`] is the currency between the statement builders, the
//! [`Executor`](crate::executor::Executor) boundary and hydration. The
//! variants mirror SQLite's storage classes, which keeps the bundled
//! driver mapping one-to-one.

use thiserror::Error;

/// A single SQL parameter or result cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Integer(i64),
    Real(f64),
    Text(String),
    Blob(Vec<u8>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Storage-class name, used in mapping diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Integer(_) => "integer",
            Value::Real(_) => "real",
            Value::Text(_) => "text",
            Value::Blob(_) => "blob",
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Integer(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Real(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Blob(v)
    }
}

impl<T> From<Option<T>> for Value
where
    T: Into<Value>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

/// A value could not be converted to the requested Rust type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected {expected}, got {actual}")]
pub struct ValueTypeError {
    expected: &'static str,
    actual: &'static str,
}

impl ValueTypeError {
    fn new(expected: &'static str, actual: &'static str) -> Self {
        Self { expected, actual }
    }
}

/// Fallible extraction of a typed field value from a [`Value`].
///
/// Implementations are strict about storage class; the one deliberate
/// widening is integer-to-real, since drivers may return an integer for
/// a REAL column.
pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueTypeError>;
}

impl FromValue for i64 {
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Integer(i) => Ok(i),
            other => Err(ValueTypeError::new("integer", other.type_name())),
        }
    }
}

impl FromValue for i32 {
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Integer(i) => i32::try_from(i)
                .map_err(|_| ValueTypeError::new("32-bit integer", "out-of-range integer")),
            other => Err(ValueTypeError::new("integer", other.type_name())),
        }
    }
}

impl FromValue for bool {
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Integer(i) => Ok(i != 0),
            other => Err(ValueTypeError::new("integer", other.type_name())),
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Real(f) => Ok(f),
            Value::Integer(i) => Ok(i as f64),
            other => Err(ValueTypeError::new("real", other.type_name())),
        }
    }
}

impl FromValue for String {
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Text(s) => Ok(s),
            other => Err(ValueTypeError::new("text", other.type_name())),
        }
    }
}

impl FromValue for Vec<u8> {
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Blob(b) => Ok(b),
            other => Err(ValueTypeError::new("blob", other.type_name())),
        }
    }
}

impl<T> FromValue for Option<T>
where
    T: FromValue,
{
    fn from_value(value: Value) -> Result<Self, ValueTypeError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}
