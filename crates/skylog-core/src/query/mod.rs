//! Parameter queries
//!
//! Resolves a `"TYPE.FIELD"` parameter path plus a requested time domain
//! into aligned time/value sequences, with a fixed domain fallback when a
//! record does not carry the requested domain.

mod error;

pub use error::QueryError;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::telemetry::{FieldValue, MessageStore};
use crate::timebase::DomainPriority;

/// A parsed `"TYPE.FIELD"` parameter path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Message type, e.g. `GPS`
    pub message_type: String,
    /// Field within the type, e.g. `Alt`
    pub field: String,
}

impl FromStr for QualifiedName {
    type Err = QueryError;

    /// The first dot separates type from field; both halves must be
    /// non-empty.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('.') {
            Some((message_type, field)) if !message_type.is_empty() && !field.is_empty() => {
                Ok(Self {
                    message_type: message_type.to_string(),
                    field: field.to_string(),
                })
            }
            _ => Err(QueryError::MalformedName(s.to_string())),
        }
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.message_type, self.field)
    }
}

/// An aligned pair of time and value sequences for one parameter.
///
/// Points appear in store order (the decoder's arrival order), not sorted
/// by time; callers needing sorted output must sort explicitly. Values
/// are never `Null` — records without a value contribute no point.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Series {
    times: Vec<f64>,
    values: Vec<FieldValue>,
}

impl Series {
    /// Timestamps, aligned by index with `values`
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Values, aligned by index with `times`
    pub fn values(&self) -> &[FieldValue] {
        &self.values
    }

    /// Number of points
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True if no record yielded a usable (timestamp, value) pair. This
    /// is a valid result for a known type, distinct from an unknown-type
    /// error.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over (timestamp, value) points in store order
    pub fn iter(&self) -> impl Iterator<Item = (f64, &FieldValue)> {
        self.times.iter().copied().zip(self.values.iter())
    }

    fn push(&mut self, time: f64, value: FieldValue) {
        self.times.push(time);
        self.values.push(value);
    }
}

/// Extract the series for a parameter under a requested time domain.
///
/// Each record of the type contributes one point when it has a non-null
/// value for the field and a usable timestamp: the requested domain if
/// the record carries it, else the first carried domain in `priority`
/// order. Records missing either are skipped.
///
/// An unknown type is an error; a known type where nothing qualifies
/// yields an empty series.
pub fn series(
    store: &MessageStore,
    priority: &DomainPriority,
    parameter: &str,
    domain: &str,
) -> Result<Series, QueryError> {
    let name: QualifiedName = parameter.parse()?;

    let records = store
        .records(&name.message_type)
        .ok_or_else(|| QueryError::UnknownMessageType(name.message_type.clone()))?;

    let mut result = Series::default();
    for record in records {
        let value = record.field(&name.field);
        if value.is_null() {
            continue;
        }
        if let Some(time) = priority.resolve(record, domain) {
            result.push(time, value.clone());
        }
    }

    Ok(result)
}
