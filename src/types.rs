use serde::{Deserialize, Serialize};

/// One rare-bird sighting pulled from an observation block.
///
/// Every field is optional except that a retained record always carries a
/// non-empty `species`. `latitude` and `longitude` are set together or not at all.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sighting {
    pub species: Option<String>,
    pub scientific_name: Option<String>,
    pub count: Option<String>,
    pub status: Option<String>,
    pub date: Option<String>,
    pub checklist_url: Option<String>,
    pub location: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub observer: Option<String>,
}

/// Where a snapshot came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertSource {
    pub name: String,
    pub url: String,
}

/// The document persisted at the end of each run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertSnapshot {
    pub last_updated: String,
    pub alert_name: String,
    pub alert_url: String,
    pub total_sightings: usize,
    pub sightings: Vec<Sighting>,
}
