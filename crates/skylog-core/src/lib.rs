//! # SkyLog Core Library
//!
//! Core functionality for the SkyLog flight log analysis software.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Telemetry record storage for decoded dataflash log messages
//! - Time-domain reconciliation between the autopilot's monotonic clock
//!   and absolute GPS time
//! - Parameter time-series queries with timestamp-domain fallback
//! - A discoverable catalog of message types and fields
//!
//! Binary log decoding is not part of this crate: an external decoder
//! feeds already-decoded messages through [`ingest::IngestSession`].
//!
//! ## Example
//!
//! ```rust,ignore
//! use skylog_core::prelude::*;
//!
//! // Feed decoded messages from the log decoder
//! let mut session = IngestSession::new();
//! session.run(&mut decoder, &CancellationToken::new())?;
//!
//! // Reconcile time domains and query
//! let log = session.finish(DescriptionIndex::default());
//! let series = log.series("GPS.Alt", "TimeUS")?;
//! println!("{} altitude samples", series.len());
//! ```

pub mod catalog;
pub mod ingest;
pub mod log;
pub mod query;
pub mod telemetry;
pub mod timebase;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::catalog::{DescriptionIndex, FieldEntry, MessageTypeEntry, ParameterCatalog};
    pub use crate::ingest::{
        DecodedMessage, IngestError, IngestSession, IngestStatus, MessageSource,
    };
    pub use crate::log::{FlightLog, TypeStatistics};
    pub use crate::query::{QualifiedName, QueryError, Series};
    pub use crate::telemetry::{FieldValue, MessageRecord, MessageStore};
    pub use crate::timebase::{DomainPriority, Reconciliation};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
