//! Message records
//!
//! One record per decoded log message, split into timestamps and payload
//! fields. Timestamp-bearing raw fields (the microsecond counter, the GPS
//! week/millisecond pair) live only in the timestamp map, never in the
//! field map.

use std::collections::HashMap;

use super::FieldValue;

/// A single decoded message with its timestamps separated out
#[derive(Debug, Clone, PartialEq)]
pub struct MessageRecord {
    /// Time-domain name -> seconds in that domain. Only the domains this
    /// particular message carried are present.
    timestamps: HashMap<String, f64>,
    /// Field name -> decoded value (`Null` when the decoder supplied none)
    fields: HashMap<String, FieldValue>,
}

impl MessageRecord {
    /// Create a record from its timestamp and field maps
    pub fn new(timestamps: HashMap<String, f64>, fields: HashMap<String, FieldValue>) -> Self {
        Self { timestamps, fields }
    }

    /// Get the timestamp in a domain, if this message carried it
    pub fn timestamp(&self, domain: &str) -> Option<f64> {
        self.timestamps.get(domain).copied()
    }

    /// True if this message carried a timestamp in the domain
    pub fn has_domain(&self, domain: &str) -> bool {
        self.timestamps.contains_key(domain)
    }

    /// Domain names this message carried
    pub fn domains(&self) -> impl Iterator<Item = &str> {
        self.timestamps.keys().map(String::as_str)
    }

    /// Get a field value; absent fields read as `Null`
    pub fn field(&self, name: &str) -> &FieldValue {
        self.fields.get(name).unwrap_or(&FieldValue::Null)
    }

    /// Field names in this record (map order, not schema order)
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Set a timestamp in a domain (used by time-domain backfill)
    pub(crate) fn set_timestamp(&mut self, domain: &str, seconds: f64) {
        self.timestamps.insert(domain.to_string(), seconds);
    }
}
