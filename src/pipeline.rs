use crate::app::ports::{PageFetcher, SnapshotStore};
use crate::assembler::assemble;
use crate::error::Result;
use crate::parser::AlertPageParser;
use crate::types::{AlertSnapshot, AlertSource};
use chrono::{Local, NaiveDateTime};
use tracing::{info, instrument};

/// Result of a complete run
#[derive(Debug)]
pub struct PipelineResult {
    pub snapshot: AlertSnapshot,
    pub output_location: String,
}

/// Fetch, extract, assemble, persist. Any fetch or storage failure aborts the
/// run before anything is written.
pub struct Pipeline<'a> {
    fetcher: &'a dyn PageFetcher,
    store: &'a dyn SnapshotStore,
    parser: AlertPageParser,
    source: AlertSource,
}

impl<'a> Pipeline<'a> {
    pub fn new(
        fetcher: &'a dyn PageFetcher,
        store: &'a dyn SnapshotStore,
        parser: AlertPageParser,
        source: AlertSource,
    ) -> Self {
        Self {
            fetcher,
            store,
            parser,
            source,
        }
    }

    pub async fn run(&self) -> Result<PipelineResult> {
        self.run_at(|| Local::now().naive_local()).await
    }

    /// Runs with an explicit clock; the timestamp is taken after extraction.
    #[instrument(skip_all, fields(alert_url = %self.source.url))]
    pub async fn run_at<F>(&self, clock: F) -> Result<PipelineResult>
    where
        F: FnOnce() -> NaiveDateTime,
    {
        info!("Fetching {}", self.source.url);
        let html = self.fetcher.fetch(&self.source.url).await?;

        let sightings = self.parser.parse(&html);
        let snapshot = assemble(sightings, clock(), &self.source);

        self.store.save(&snapshot).await?;
        info!(
            total = snapshot.total_sightings,
            "Snapshot written to {}",
            self.store.location()
        );

        Ok(PipelineResult {
            snapshot,
            output_location: self.store.location(),
        })
    }
}
