//! Tests for the parameter catalog and description index

use std::io::Write;

use pretty_assertions::assert_eq;

use skylog_core::catalog::DescriptionIndex;
use skylog_core::ingest::{DecodedMessage, IngestSession};
use skylog_core::telemetry::FieldValue;
use skylog_core::timebase::{GPS, TIME_US};

fn ingest_basic(descriptions: DescriptionIndex) -> skylog_core::log::FlightLog {
    let mut session = IngestSession::new();
    session.push(
        DecodedMessage::new("GPS")
            .with_time_us(1_000_000)
            .with_gps_time(2190, 123_456)
            .with_field("Alt", 100.0)
            .with_field("Spare", FieldValue::Null),
    );
    session.push(
        DecodedMessage::new("GPS")
            .with_time_us(2_000_000)
            .with_field("Alt", 110.0)
            .with_field("Spare", FieldValue::Null),
    );
    session.push(
        DecodedMessage::new("ATT")
            .with_time_us(1_500_000)
            .with_field("Roll", 0.5),
    );
    session.finish(descriptions)
}

#[test]
fn test_has_data_distinguishes_recorded_from_spare_fields() {
    let log = ingest_basic(DescriptionIndex::default());
    let catalog = log.catalog();

    let gps = catalog.get("GPS").unwrap();
    assert!(gps.fields["Alt"].has_data);
    assert!(!gps.fields["Spare"].has_data);
}

#[test]
fn test_catalog_domains_reflect_backfill() {
    let log = ingest_basic(DescriptionIndex::default());
    let catalog = log.catalog();

    // The GPS message carried both domains; ATT only carried the counter
    // but gains absolute time through backfill
    assert!(catalog.get("GPS").unwrap().time_domains.contains(GPS));
    assert!(catalog.get("ATT").unwrap().time_domains.contains(GPS));
    assert!(catalog.get("ATT").unwrap().time_domains.contains(TIME_US));
}

#[test]
fn test_descriptions_resolve_with_empty_default() {
    let descriptions = DescriptionIndex::from_json_str(
        r#"{"GPS": "GPS navigation fix", "GPS.Alt": "Altitude above MSL (m)"}"#,
    )
    .unwrap();
    let log = ingest_basic(descriptions);
    let catalog = log.catalog();

    let gps = catalog.get("GPS").unwrap();
    assert_eq!(gps.description, "GPS navigation fix");
    assert_eq!(gps.fields["Alt"].description, "Altitude above MSL (m)");
    assert_eq!(gps.fields["Spare"].description, "");
    assert_eq!(catalog.get("ATT").unwrap().description, "");
}

#[test]
fn test_description_index_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"ATT": "Attitude estimate"}}"#).unwrap();

    let index = DescriptionIndex::from_file(file.path()).unwrap();
    assert_eq!(index.describe("ATT"), "Attitude estimate");

    let missing = DescriptionIndex::load_or_default(file.path().join("nope"));
    assert!(missing.is_empty());
}

#[test]
fn test_statistics_and_domain_unions() {
    let log = ingest_basic(DescriptionIndex::default());

    let stats = log.statistics();
    assert_eq!(stats["GPS"].records, 2);
    assert_eq!(stats["ATT"].records, 1);
    assert!(stats["ATT"].time_domains.contains(TIME_US));

    assert_eq!(log.available_domains().len(), 2);
    assert!(log.type_domains("GPS").contains(GPS));
    assert!(log.type_domains("NOPE").is_empty());
}

#[test]
fn test_catalog_serializes_for_the_ui() {
    let log = ingest_basic(DescriptionIndex::default());
    let json = serde_json::to_value(log.catalog()).unwrap();

    assert_eq!(json["GPS"]["fields"]["Alt"]["qualified_name"], "GPS.Alt");
    assert_eq!(json["GPS"]["fields"]["Alt"]["has_data"], true);
}
