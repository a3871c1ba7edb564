//! Time-domain reconciliation
//!
//! Estimates the scalar offset between the monotonic counter and absolute
//! GPS time from messages that carry both, then backfills the absolute
//! domain onto records that only carry the counter. A single global
//! offset assumes clock drift over one log is negligible at query
//! resolution; averaging all samples smooths jitter in the GPS fields.

use crate::telemetry::MessageStore;
use crate::timebase::{GPS, TIME_US};

/// Accumulates offset samples during an ingestion pass
#[derive(Debug, Default)]
pub struct OffsetEstimator {
    samples: Vec<f64>,
}

impl OffsetEstimator {
    /// Create an estimator with no samples
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one co-occurrence of both clock domains on a single message
    pub fn observe(&mut self, monotonic_seconds: f64, epoch_seconds: f64) {
        self.samples.push(epoch_seconds - monotonic_seconds);
    }

    /// Number of samples observed so far
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Collapse the samples into a reconciliation result. No samples is
    /// not an error: the log simply never exposed both domains together.
    pub fn finish(self) -> Reconciliation {
        if self.samples.is_empty() {
            return Reconciliation::Skipped;
        }
        let offset = self.samples.iter().sum::<f64>() / self.samples.len() as f64;
        Reconciliation::Resolved {
            offset,
            samples: self.samples.len(),
        }
    }
}

/// Outcome of one reconciliation pass, fixed for the lifetime of the log
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reconciliation {
    /// Offset estimated from at least one co-occurring timestamp pair
    Resolved {
        /// Mean of `epoch_seconds - monotonic_seconds` over all samples
        offset: f64,
        /// Number of samples the mean was taken over
        samples: usize,
    },
    /// No message ever carried both domains; absolute time stays unknown
    Skipped,
}

impl Reconciliation {
    /// The reconciled offset in seconds, `0.0` when skipped
    pub fn offset(&self) -> f64 {
        match self {
            Reconciliation::Resolved { offset, .. } => *offset,
            Reconciliation::Skipped => 0.0,
        }
    }

    /// True if no offset could be estimated
    pub fn is_skipped(&self) -> bool {
        matches!(self, Reconciliation::Skipped)
    }

    /// Backfill the absolute domain onto every record that carries the
    /// monotonic counter but not absolute time. A skipped reconciliation
    /// backfills nothing: absolute time is never fabricated from an unset
    /// offset.
    pub fn backfill(&self, store: &mut MessageStore) {
        let offset = match self {
            Reconciliation::Resolved { offset, .. } => *offset,
            Reconciliation::Skipped => return,
        };

        for record in store.records_mut() {
            if let Some(monotonic) = record.timestamp(TIME_US) {
                if !record.has_domain(GPS) {
                    record.set_timestamp(GPS, monotonic + offset);
                }
            }
        }
    }
}
