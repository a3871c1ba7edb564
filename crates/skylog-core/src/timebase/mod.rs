//! Time domains
//!
//! A flight log carries timestamps in more than one clock domain: the
//! autopilot's monotonic microsecond counter and absolute GPS time. The
//! domains are not natively synchronized; the [`OffsetEstimator`]
//! estimates the offset between them.

mod reconcile;

pub use reconcile::{OffsetEstimator, Reconciliation};

use chrono::{DateTime, Utc};

use crate::telemetry::MessageRecord;

/// Monotonic microsecond-counter domain (seconds since autopilot boot)
pub const TIME_US: &str = "TimeUS";

/// Absolute GPS time domain (seconds since the Unix epoch)
pub const GPS: &str = "GPS";

/// Unix time of the GPS epoch, 1980-01-06T00:00:00Z
pub const GPS_EPOCH_UNIX: f64 = 315_964_800.0;

/// Seconds in a GPS week
pub const SECONDS_PER_WEEK: f64 = 604_800.0;

/// Convert a GPS week number and milliseconds-of-week into seconds since
/// the Unix epoch.
pub fn gps_week_to_epoch(week: u32, ms: u32) -> f64 {
    GPS_EPOCH_UNIX + f64::from(week) * SECONDS_PER_WEEK + f64::from(ms) / 1000.0
}

/// Render absolute-domain seconds as a UTC wall-clock instant, for axis
/// and cursor labels. None if the value is outside the representable
/// range.
pub fn epoch_to_datetime(epoch_seconds: f64) -> Option<DateTime<Utc>> {
    if !epoch_seconds.is_finite() {
        return None;
    }
    let secs = epoch_seconds.floor();
    let nanos = ((epoch_seconds - secs) * 1e9).round() as u32;
    DateTime::from_timestamp(secs as i64, nanos.min(999_999_999))
}

/// Ordered list of domains a query falls back through when the requested
/// domain is absent from a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainPriority {
    domains: Vec<String>,
}

impl Default for DomainPriority {
    fn default() -> Self {
        Self::new(vec![TIME_US.to_string(), GPS.to_string()])
    }
}

impl DomainPriority {
    /// Create a priority list from domain names, most preferred first
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    /// The configured domain names, most preferred first
    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    /// Resolve a record's timestamp: the requested domain when the record
    /// carries it, otherwise the first carried domain in priority order.
    /// None when the record carries no usable domain at all.
    pub fn resolve(&self, record: &MessageRecord, requested: &str) -> Option<f64> {
        if let Some(seconds) = record.timestamp(requested) {
            return Some(seconds);
        }
        self.domains
            .iter()
            .find_map(|domain| record.timestamp(domain))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_gps_week_to_epoch() {
        // Week 2190 + 123456 ms lands on 2021-12-22
        let epoch = gps_week_to_epoch(2190, 123_456);
        assert!((epoch - 1_640_172_471.456).abs() < 1e-9);
    }

    #[test]
    fn test_epoch_to_datetime() {
        let dt = epoch_to_datetime(1_640_172_471.456).unwrap();
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2021-12-22");

        assert!(epoch_to_datetime(f64::NAN).is_none());
    }

    #[test]
    fn test_priority_fallback() {
        let mut timestamps = HashMap::new();
        timestamps.insert(TIME_US.to_string(), 42.0);
        let record = MessageRecord::new(timestamps, HashMap::new());

        let priority = DomainPriority::default();

        // Requested domain missing, falls back to TimeUS
        assert_eq!(priority.resolve(&record, GPS), Some(42.0));
        // Requested domain present wins
        assert_eq!(priority.resolve(&record, TIME_US), Some(42.0));

        let empty = MessageRecord::new(HashMap::new(), HashMap::new());
        assert_eq!(priority.resolve(&empty, GPS), None);
    }
}
