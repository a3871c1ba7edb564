//! Log ingestion
//!
//! The seam between the external log decoder and the record store. The
//! decoder hands over one [`DecodedMessage`] at a time through a
//! [`MessageSource`]; an [`IngestSession`] accumulates them and is then
//! finished into an immutable, queryable [`crate::log::FlightLog`].

mod session;

pub use session::{IngestSession, IngestStatus};

use thiserror::Error;

use crate::telemetry::FieldValue;

/// Errors that can occur during an ingestion pass
#[derive(Error, Debug)]
pub enum IngestError {
    /// The decoder failed hard mid-log. Individual malformed messages are
    /// tolerated upstream; this aborts the whole pass.
    #[error("log decoder failure: {0}")]
    Source(#[source] anyhow::Error),
}

/// One decoded log message as handed over by the decoder collaborator.
///
/// Raw timestamp fields are carried here, not in `fields`: the session
/// converts them into time-domain seconds on append.
#[derive(Debug, Clone, Default)]
pub struct DecodedMessage {
    /// Message type identifier, e.g. `"GPS"` or `"ATT"`
    pub message_type: String,
    /// Raw monotonic counter in microseconds since boot, if carried
    pub time_us: Option<u64>,
    /// GPS week number, if carried
    pub gps_week: Option<u32>,
    /// Milliseconds into the GPS week, if carried
    pub gps_ms: Option<u32>,
    /// Decoded payload fields in schema order
    pub fields: Vec<(String, FieldValue)>,
}

impl DecodedMessage {
    /// Create a message with no timestamps and no fields
    pub fn new(message_type: &str) -> Self {
        Self {
            message_type: message_type.to_string(),
            ..Self::default()
        }
    }

    /// Attach the raw monotonic microsecond counter
    pub fn with_time_us(mut self, time_us: u64) -> Self {
        self.time_us = Some(time_us);
        self
    }

    /// Attach the raw GPS week / milliseconds-of-week pair
    pub fn with_gps_time(mut self, week: u32, ms: u32) -> Self {
        self.gps_week = Some(week);
        self.gps_ms = Some(ms);
        self
    }

    /// Attach one decoded field
    pub fn with_field(mut self, name: &str, value: impl Into<FieldValue>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }
}

/// Sequential feed of decoded messages, implemented by the external
/// decoder collaborator
pub trait MessageSource {
    /// Produce the next decoded message, `None` at end of log. An `Err`
    /// is a hard decode failure and aborts the ingestion pass.
    fn next_message(&mut self) -> anyhow::Result<Option<DecodedMessage>>;
}

/// Adapter feeding an in-memory message sequence as a source, mainly for
/// tests and replays
pub struct VecSource {
    messages: std::vec::IntoIter<DecodedMessage>,
}

impl VecSource {
    /// Wrap a message sequence
    pub fn new(messages: Vec<DecodedMessage>) -> Self {
        Self {
            messages: messages.into_iter(),
        }
    }
}

impl MessageSource for VecSource {
    fn next_message(&mut self) -> anyhow::Result<Option<DecodedMessage>> {
        Ok(self.messages.next())
    }
}
