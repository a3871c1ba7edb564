//! Message store
//!
//! Per-type ordered record sequences. Append-only while a log is being
//! ingested, read-only afterwards; ordering is the decoder's arrival
//! order, which is expected but not guaranteed to be time-monotonic.

use std::collections::{BTreeSet, HashMap};

use super::{FieldValue, MessageRecord};

/// Ordered record storage keyed by message type
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: HashMap<String, Vec<MessageRecord>>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record for a message type, creating the sequence on
    /// first use. Each call either stores the whole record or nothing;
    /// identical records are kept as separate entries in order.
    pub fn append(
        &mut self,
        message_type: &str,
        timestamps: HashMap<String, f64>,
        fields: HashMap<String, FieldValue>,
    ) {
        self.messages
            .entry(message_type.to_string())
            .or_default()
            .push(MessageRecord::new(timestamps, fields));
    }

    /// True if at least one record of this type was stored
    pub fn contains_type(&self, message_type: &str) -> bool {
        self.messages.contains_key(message_type)
    }

    /// Records of a type in arrival order, None for an unknown type
    pub fn records(&self, message_type: &str) -> Option<&[MessageRecord]> {
        self.messages.get(message_type).map(Vec::as_slice)
    }

    /// Message type names, sorted for deterministic iteration
    pub fn types(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self.messages.keys().map(String::as_str).collect();
        types.sort_unstable();
        types
    }

    /// Number of records stored for a type (0 for an unknown type)
    pub fn record_count(&self, message_type: &str) -> usize {
        self.messages.get(message_type).map_or(0, Vec::len)
    }

    /// Total number of records across all types
    pub fn total_records(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    /// True if no records have been stored
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Union of the time domains carried by records of a type
    pub fn type_domains(&self, message_type: &str) -> BTreeSet<String> {
        let mut domains = BTreeSet::new();
        if let Some(records) = self.messages.get(message_type) {
            for record in records {
                domains.extend(record.domains().map(str::to_string));
            }
        }
        domains
    }

    /// Union of the time domains carried by any record in the store
    pub fn all_domains(&self) -> BTreeSet<String> {
        let mut domains = BTreeSet::new();
        for records in self.messages.values() {
            for record in records {
                domains.extend(record.domains().map(str::to_string));
            }
        }
        domains
    }

    /// Mutable record iteration, for the reconciler's backfill pass
    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut MessageRecord> {
        self.messages.values_mut().flatten()
    }
}
