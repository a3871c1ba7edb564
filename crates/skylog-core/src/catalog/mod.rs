//! Parameter catalog
//!
//! A derived tree of message types and their fields, with per-field data
//! availability and per-type time domains, built for presentation in a
//! parameter picker. Entirely recomputable from the store at any time.

mod descriptions;

pub use descriptions::{CatalogError, DescriptionIndex};

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::telemetry::MessageStore;

/// Catalog of every message type observed in the log
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct ParameterCatalog {
    types: BTreeMap<String, MessageTypeEntry>,
}

/// One message type in the catalog
#[derive(Debug, Clone, Serialize)]
pub struct MessageTypeEntry {
    /// Human-readable description, empty when unknown
    pub description: String,
    /// Union of the time domains carried by this type's records
    pub time_domains: BTreeSet<String>,
    /// Fields by name. Taken from the first record of the type: differing
    /// field sets in later records are not reconciled.
    pub fields: BTreeMap<String, FieldEntry>,
}

/// One field of a message type
#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    /// Full `"TYPE.FIELD"` parameter path for querying
    pub qualified_name: String,
    /// True if at least one record has a non-null value for this field
    pub has_data: bool,
    /// Human-readable description, empty when unknown
    pub description: String,
}

impl ParameterCatalog {
    /// Build the catalog from the current store contents
    pub fn build(store: &MessageStore, descriptions: &DescriptionIndex) -> Self {
        let mut types = BTreeMap::new();

        for message_type in store.types() {
            let records = match store.records(message_type) {
                Some(records) if !records.is_empty() => records,
                _ => continue,
            };

            let mut fields = BTreeMap::new();
            for field_name in records[0].field_names() {
                let has_data = records
                    .iter()
                    .any(|record| !record.field(field_name).is_null());

                let qualified_name = format!("{message_type}.{field_name}");
                let description = descriptions.describe(&qualified_name).to_string();
                fields.insert(
                    field_name.to_string(),
                    FieldEntry {
                        qualified_name,
                        has_data,
                        description,
                    },
                );
            }

            types.insert(
                message_type.to_string(),
                MessageTypeEntry {
                    description: descriptions.describe(message_type).to_string(),
                    time_domains: store.type_domains(message_type),
                    fields,
                },
            );
        }

        Self { types }
    }

    /// Look up one message type's entry
    pub fn get(&self, message_type: &str) -> Option<&MessageTypeEntry> {
        self.types.get(message_type)
    }

    /// Iterate over (type name, entry) in sorted order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageTypeEntry)> {
        self.types.iter().map(|(name, entry)| (name.as_str(), entry))
    }

    /// Number of message types
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// True if the store held no records
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::telemetry::FieldValue;
    use crate::timebase::{GPS, TIME_US};
    use std::collections::HashMap;

    fn append_gps(store: &mut MessageStore, seconds: f64, alt: FieldValue) {
        let mut timestamps = HashMap::new();
        timestamps.insert(TIME_US.to_string(), seconds);
        let mut fields = HashMap::new();
        fields.insert("Alt".to_string(), alt);
        store.append("GPS", timestamps, fields);
    }

    #[test]
    fn test_has_data_flag() {
        let mut store = MessageStore::new();
        append_gps(&mut store, 1.0, FieldValue::Null);
        append_gps(&mut store, 2.0, FieldValue::Null);

        let catalog = ParameterCatalog::build(&store, &DescriptionIndex::default());
        assert!(!catalog.get("GPS").unwrap().fields["Alt"].has_data);

        append_gps(&mut store, 3.0, FieldValue::Number(120.0));
        let catalog = ParameterCatalog::build(&store, &DescriptionIndex::default());
        assert!(catalog.get("GPS").unwrap().fields["Alt"].has_data);
    }

    #[test]
    fn test_fields_come_from_first_record() {
        let mut store = MessageStore::new();
        append_gps(&mut store, 1.0, FieldValue::Number(100.0));

        // A later record with an extra field does not widen the catalog
        let mut timestamps = HashMap::new();
        timestamps.insert(TIME_US.to_string(), 2.0);
        let mut fields = HashMap::new();
        fields.insert("Alt".to_string(), FieldValue::Number(110.0));
        fields.insert("Spd".to_string(), FieldValue::Number(12.0));
        store.append("GPS", timestamps, fields);

        let catalog = ParameterCatalog::build(&store, &DescriptionIndex::default());
        let entry = catalog.get("GPS").unwrap();
        assert!(entry.fields.contains_key("Alt"));
        assert!(!entry.fields.contains_key("Spd"));
    }

    #[test]
    fn test_time_domains_and_descriptions() {
        let mut store = MessageStore::new();
        append_gps(&mut store, 1.0, FieldValue::Number(100.0));
        let mut timestamps = HashMap::new();
        timestamps.insert(GPS.to_string(), 1000.0);
        store.append("GPS", timestamps, HashMap::new());

        let descriptions =
            DescriptionIndex::from_json_str(r#"{"GPS": "GPS fix", "GPS.Alt": "Altitude (m)"}"#)
                .unwrap();
        let catalog = ParameterCatalog::build(&store, &descriptions);

        let entry = catalog.get("GPS").unwrap();
        assert_eq!(entry.description, "GPS fix");
        assert_eq!(entry.fields["Alt"].description, "Altitude (m)");
        assert_eq!(entry.fields["Alt"].qualified_name, "GPS.Alt");
        assert!(entry.time_domains.contains(TIME_US));
        assert!(entry.time_domains.contains(GPS));
    }
}
