//! Ingestion session
//!
//! Single-writer accumulation of one log's messages. Each `push` is
//! atomic: a record is either fully stored or not at all, so checking the
//! cancellation token between pushes is the only cancellation point
//! needed. Finishing the session consumes it and hands the store to an
//! immutable [`FlightLog`], so no query can ever observe an in-progress
//! pass.

use std::collections::HashMap;

use tokio_util::sync::CancellationToken;

use super::{DecodedMessage, IngestError, MessageSource};
use crate::catalog::DescriptionIndex;
use crate::log::FlightLog;
use crate::telemetry::MessageStore;
use crate::timebase::{gps_week_to_epoch, OffsetEstimator, GPS, TIME_US};

/// How an ingestion run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestStatus {
    /// The source reported end of log
    Completed,
    /// The caller cancelled between messages; the store holds everything
    /// appended up to that point
    Cancelled,
}

/// Accumulates decoded messages and time-offset samples for one log
#[derive(Debug, Default)]
pub struct IngestSession {
    store: MessageStore,
    offsets: OffsetEstimator,
    messages_seen: usize,
}

impl IngestSession {
    /// Start an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one decoded message.
    ///
    /// Raw timestamps become time-domain entries (`TimeUS` in seconds,
    /// the week/ms pair as epoch seconds under `GPS`); when a message
    /// carries both, it also contributes one offset sample. Whatever
    /// fields the decoder managed to supply are stored as-is.
    pub fn push(&mut self, message: DecodedMessage) {
        let mut timestamps = HashMap::new();

        let monotonic = message.time_us.map(|us| us as f64 / 1e6);
        if let Some(seconds) = monotonic {
            timestamps.insert(TIME_US.to_string(), seconds);
        }

        if let (Some(week), Some(ms)) = (message.gps_week, message.gps_ms) {
            let epoch = gps_week_to_epoch(week, ms);
            timestamps.insert(GPS.to_string(), epoch);

            if let Some(seconds) = monotonic {
                self.offsets.observe(seconds, epoch);
            }
        }

        let fields: HashMap<_, _> = message.fields.into_iter().collect();
        self.store.append(&message.message_type, timestamps, fields);
        self.messages_seen += 1;
    }

    /// Drive a message source to completion, checking for cancellation
    /// between messages. A decoder error aborts the pass; cancellation
    /// does not, it just stops early with the store still consistent.
    pub fn run(
        &mut self,
        source: &mut dyn MessageSource,
        cancel: &CancellationToken,
    ) -> Result<IngestStatus, IngestError> {
        loop {
            if cancel.is_cancelled() {
                tracing::debug!("ingestion cancelled after {} messages", self.messages_seen);
                return Ok(IngestStatus::Cancelled);
            }

            match source.next_message().map_err(IngestError::Source)? {
                Some(message) => self.push(message),
                None => return Ok(IngestStatus::Completed),
            }
        }
    }

    /// Number of messages appended so far
    pub fn messages_seen(&self) -> usize {
        self.messages_seen
    }

    /// Number of time-offset samples observed so far
    pub fn offset_samples(&self) -> usize {
        self.offsets.sample_count()
    }

    /// Reconcile time domains and freeze the session into a queryable
    /// log. Backfill runs here, before any query exists.
    pub fn finish(self, descriptions: DescriptionIndex) -> FlightLog {
        let Self {
            mut store,
            offsets,
            messages_seen,
        } = self;

        let samples = offsets.sample_count();
        let reconciliation = offsets.finish();
        reconciliation.backfill(&mut store);

        tracing::info!(
            "ingested {messages_seen} messages, offset {:.6}s from {samples} samples",
            reconciliation.offset()
        );

        FlightLog::new(store, reconciliation, descriptions)
    }
}
