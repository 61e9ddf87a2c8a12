use anyhow::Context;
use chrono::Local;
use clap::Parser;
use tracing::error;

use ebird_alerts::assembler::TIMESTAMP_FORMAT;
use ebird_alerts::config::Config;
use ebird_alerts::infra::http_client::ReqwestFetcher;
use ebird_alerts::infra::json_file_store::JsonFileStore;
use ebird_alerts::logging;
use ebird_alerts::parser::AlertPageParser;
use ebird_alerts::pipeline::Pipeline;
use ebird_alerts::types::AlertSource;

#[derive(Parser)]
#[command(name = "ebird_alerts")]
#[command(about = "Snapshot eBird rare bird alert sightings to a JSON file")]
#[command(version)]
struct Cli {}

async fn run() -> anyhow::Result<()> {
    let config = Config::load().context("loading configuration")?;

    let fetcher = ReqwestFetcher::new(&config.http).context("building HTTP client")?;
    let store = JsonFileStore::new(&config.output.path);
    let source = AlertSource {
        name: config.alert.name.clone(),
        url: config.alert.url.clone(),
    };
    let pipeline = Pipeline::new(
        &fetcher,
        &store,
        AlertPageParser::new(&config.alert.origin),
        source,
    );

    println!("Fetching: {}", config.alert.url);
    let result = pipeline
        .run()
        .await
        .with_context(|| format!("snapshot of {} failed", config.alert.url))?;

    println!("Found {} sightings", result.snapshot.total_sightings);
    println!(
        "Saved {} sightings to {}",
        result.snapshot.total_sightings, result.output_location
    );
    println!("Last updated: {}", result.snapshot.last_updated);
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_logging();
    let _cli = Cli::parse();

    println!("Starting scrape at {}", Local::now().format(TIMESTAMP_FORMAT));

    if let Err(e) = run().await {
        error!("Run failed: {:#}", e);
        return Err(e);
    }
    Ok(())
}
