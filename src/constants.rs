/// Fixed identity of the alert feed this crate snapshots.
/// These are the defaults; `config.toml` may override any of them.

// Source identity
pub const ALERT_NAME: &str = "New York Rare Bird Alert";
pub const ALERT_URL: &str = "https://ebird.org/alert/summary?sid=SN35466";
pub const SITE_ORIGIN: &str = "https://ebird.org";

// HTTP
pub const USER_AGENT: &str =
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";
pub const FETCH_TIMEOUT_SECONDS: u64 = 30;

// Output
pub const OUTPUT_PATH: &str = "data.json";
pub const CONFIG_PATH: &str = "config.toml";
pub const CONFIG_PATH_ENV: &str = "EBIRD_ALERTS_CONFIG";

// Markup markers used on the alert summary page
pub const OBSERVATION_CLASS: &str = "Observation";
pub const SPECIES_CLASS: &str = "Heading-main";
pub const SCIENTIFIC_NAME_CLASS: &str = "Heading-sub--sci";
pub const COUNT_CLASS: &str = "Observation-numberObserved";
pub const TAGS_CLASS: &str = "Observation-tags";
pub const GRID_CELL_CLASS: &str = "GridFlex-cell";
pub const HIDDEN_LABEL_CLASS: &str = "is-visuallyHidden";
pub const CHECKLIST_HREF_MARKER: &str = "/checklist/";
pub const MAP_HREF_MARKER: &str = "google.com/maps";

/// Leading label stripped from the observed-count text.
pub const COUNT_LABEL: &str = "Number observed:";
/// Hidden accessibility label that marks the observer cell.
pub const OBSERVER_LABEL: &str = "Observer";
