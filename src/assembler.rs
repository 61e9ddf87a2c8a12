use crate::types::{AlertSnapshot, AlertSource, Sighting};
use chrono::NaiveDateTime;

/// ISO-8601 with microsecond precision, no offset.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Wraps extracted sightings with run metadata.
/// `total_sightings` is always derived from `sightings`.
pub fn assemble(
    sightings: Vec<Sighting>,
    captured_at: NaiveDateTime,
    source: &AlertSource,
) -> AlertSnapshot {
    AlertSnapshot {
        last_updated: captured_at.format(TIMESTAMP_FORMAT).to_string(),
        alert_name: source.name.clone(),
        alert_url: source.url.clone(),
        total_sightings: sightings.len(),
        sightings,
    }
}
