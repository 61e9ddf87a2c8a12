use anyhow::Result;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime};
use ebird_alerts::app::ports::{PageFetcher, SnapshotStore};
use ebird_alerts::error::{Result as ScraperResult, ScraperError};
use ebird_alerts::infra::json_file_store::JsonFileStore;
use ebird_alerts::parser::AlertPageParser;
use ebird_alerts::pipeline::Pipeline;
use ebird_alerts::types::{AlertSnapshot, AlertSource};
use serde_json::Value;
use std::sync::Mutex;
use tempfile::tempdir;

const ALERT_PAGE: &str = include_str!("fixtures/alert_summary.html");

struct StaticPage(&'static str);

#[async_trait]
impl PageFetcher for StaticPage {
    async fn fetch(&self, _url: &str) -> ScraperResult<String> {
        Ok(self.0.to_string())
    }
}

struct FailingFetcher;

#[async_trait]
impl PageFetcher for FailingFetcher {
    async fn fetch(&self, url: &str) -> ScraperResult<String> {
        Err(ScraperError::Status {
            url: url.to_string(),
            status: 503,
        })
    }
}

#[derive(Default)]
struct MemoryStore {
    saved: Mutex<Vec<AlertSnapshot>>,
}

#[async_trait]
impl SnapshotStore for MemoryStore {
    async fn save(&self, snapshot: &AlertSnapshot) -> ScraperResult<()> {
        self.saved.lock().unwrap().push(snapshot.clone());
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

fn source() -> AlertSource {
    AlertSource {
        name: "New York Rare Bird Alert".to_string(),
        url: "https://ebird.org/alert/summary?sid=SN35466".to_string(),
    }
}

fn fixed_clock() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 3)
        .unwrap()
        .and_hms_micro_opt(9, 30, 0, 123456)
        .unwrap()
}

#[tokio::test]
async fn test_run_writes_snapshot_file() -> Result<()> {
    let temp_dir = tempdir()?;
    let fetcher = StaticPage(ALERT_PAGE);
    let store = JsonFileStore::new(temp_dir.path().join("data.json"));
    let pipeline = Pipeline::new(&fetcher, &store, AlertPageParser::default(), source());

    let result = pipeline.run_at(fixed_clock).await?;
    assert_eq!(result.snapshot.total_sightings, 3);

    let written: Value = serde_json::from_str(&std::fs::read_to_string(store.path())?)?;
    assert_eq!(written["last_updated"], "2024-01-03T09:30:00.123456");
    assert_eq!(written["alert_name"], "New York Rare Bird Alert");
    assert_eq!(written["alert_url"], "https://ebird.org/alert/summary?sid=SN35466");
    assert_eq!(written["total_sightings"], 3);

    let first = &written["sightings"][0];
    assert_eq!(first["species"], "Snowy Owl");
    assert_eq!(first["latitude"], 40.7);
    assert_eq!(first["longitude"], -74.0);
    assert_eq!(first["checklist_url"], "https://ebird.org/checklist/S12345");

    let minimal = &written["sightings"][1];
    let keys: Vec<&str> = minimal
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys.len(), 10);
    for key in [
        "scientific_name",
        "count",
        "status",
        "date",
        "checklist_url",
        "location",
        "latitude",
        "longitude",
        "observer",
    ] {
        assert!(minimal[key].is_null(), "{} should be null", key);
    }
    Ok(())
}

#[tokio::test]
async fn test_empty_page_still_produces_a_snapshot() -> Result<()> {
    let fetcher = StaticPage("<html><body><p>Nothing to report</p></body></html>");
    let store = MemoryStore::default();
    let pipeline = Pipeline::new(&fetcher, &store, AlertPageParser::default(), source());

    let result = pipeline.run_at(fixed_clock).await?;
    assert_eq!(result.output_location, "memory");

    let saved = store.saved.lock().unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].total_sightings, 0);
    assert!(saved[0].sightings.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_fetch_failure_aborts_without_writing() -> Result<()> {
    let temp_dir = tempdir()?;
    let output = temp_dir.path().join("data.json");
    std::fs::write(&output, "{\"previous\": true}")?;

    let store = JsonFileStore::new(&output);
    let pipeline = Pipeline::new(&FailingFetcher, &store, AlertPageParser::default(), source());

    let err = pipeline.run_at(fixed_clock).await.unwrap_err();
    assert!(matches!(err, ScraperError::Status { status: 503, .. }));
    assert_eq!(std::fs::read_to_string(&output)?, "{\"previous\": true}");
    Ok(())
}
