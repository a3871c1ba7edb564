//! Typed field values
//!
//! Decoded message fields are loosely typed on the wire; this module pins
//! each one to an explicit variant so consumers cannot misread a value's
//! type or mistake "not recorded" for real data.

use serde::{Deserialize, Serialize};

/// A single decoded field value from a log message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldValue {
    /// Numeric value (all integer and float wire types widen to f64)
    Number(f64),
    /// Boolean flag
    Bool(bool),
    /// Text value
    Text(String),
    /// The decoder did not supply this field for this record
    Null,
}

impl FieldValue {
    /// Get as a number, returning None for any other variant
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as a bool, returning None for any other variant
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as text, returning None for any other variant
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    /// True if the decoder supplied no value
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        FieldValue::Number(v)
    }
}

impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        FieldValue::Bool(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        FieldValue::Text(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        FieldValue::Text(v)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => FieldValue::Null,
        }
    }
}
