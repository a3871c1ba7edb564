//! Queryable flight log
//!
//! The finished product of one ingestion pass: an immutable record store
//! plus its reconciliation result, exposing the query surface the UI
//! consumes. All methods take `&self` and are safe to call from several
//! readers at once.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::catalog::{DescriptionIndex, ParameterCatalog};
use crate::query::{self, QueryError, Series};
use crate::telemetry::MessageStore;
use crate::timebase::{DomainPriority, Reconciliation};

/// Per-type summary presented alongside query failures ("this type only
/// has these domains")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypeStatistics {
    /// Number of records stored for the type
    pub records: usize,
    /// Union of the time domains carried by the type's records
    pub time_domains: BTreeSet<String>,
}

/// An ingested, reconciled, queryable flight log
#[derive(Debug)]
pub struct FlightLog {
    store: MessageStore,
    reconciliation: Reconciliation,
    descriptions: DescriptionIndex,
    priority: DomainPriority,
}

impl FlightLog {
    pub(crate) fn new(
        store: MessageStore,
        reconciliation: Reconciliation,
        descriptions: DescriptionIndex,
    ) -> Self {
        Self {
            store,
            reconciliation,
            descriptions,
            priority: DomainPriority::default(),
        }
    }

    /// Replace the domain fallback order used by queries
    pub fn set_domain_priority(&mut self, priority: DomainPriority) {
        self.priority = priority;
    }

    /// Extract the time-series for a `"TYPE.FIELD"` parameter under a
    /// requested time domain. An unknown type is an error; a known type
    /// with no usable points yields an empty series.
    pub fn series(&self, parameter: &str, domain: &str) -> Result<Series, QueryError> {
        query::series(&self.store, &self.priority, parameter, domain)
    }

    /// Build the parameter catalog from the current store contents
    pub fn catalog(&self) -> ParameterCatalog {
        ParameterCatalog::build(&self.store, &self.descriptions)
    }

    /// Union of the time domains seen anywhere in the log
    pub fn available_domains(&self) -> BTreeSet<String> {
        self.store.all_domains()
    }

    /// Union of the time domains seen on one message type
    pub fn type_domains(&self, message_type: &str) -> BTreeSet<String> {
        self.store.type_domains(message_type)
    }

    /// Per-type record counts and domain availability
    pub fn statistics(&self) -> BTreeMap<String, TypeStatistics> {
        self.store
            .types()
            .into_iter()
            .map(|message_type| {
                (
                    message_type.to_string(),
                    TypeStatistics {
                        records: self.store.record_count(message_type),
                        time_domains: self.store.type_domains(message_type),
                    },
                )
            })
            .collect()
    }

    /// The time-domain reconciliation outcome for this log
    pub fn reconciliation(&self) -> &Reconciliation {
        &self.reconciliation
    }

    /// The reconciled monotonic-to-absolute offset in seconds (`0.0` when
    /// reconciliation was skipped)
    pub fn time_offset(&self) -> f64 {
        self.reconciliation.offset()
    }

    /// Read access to the underlying record store
    pub fn store(&self) -> &MessageStore {
        &self.store
    }
}
