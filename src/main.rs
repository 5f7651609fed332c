use std::path::Path;
use std::process::ExitCode;

use catalog_harvest::fetch::BlobFetcher;
use catalog_harvest::records::Record;
use catalog_harvest::{export, utils, HarvestConfig, Harvester};
use clap::Parser;

mod args;
use args::Args;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let config = match args.resolve_config() {
        Ok(config) => config,
        Err(e) => {
            ::log::error!("Invalid configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    println!("Note: Harvesting requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL or --webdriver-url if not using {}",
        config.webdriver_url
    );

    ::log::info!("Starting harvest of {} seeds", config.seeds.len());

    let harvester = match Harvester::new(config.clone()) {
        Ok(harvester) => harvester,
        Err(e) => {
            ::log::error!("Failed to build harvester: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let start_time = std::time::Instant::now();
    let result = harvester.run().await;

    println!(
        "Harvest complete in {:.2} seconds: {} seeds attempted, {} failed, {} unique records",
        start_time.elapsed().as_secs_f64(),
        result.seeds_attempted(),
        result.seeds_failed(),
        result.unique_records()
    );
    for outcome in result.outcomes.iter().filter(|o| o.failed()) {
        println!(
            "  seed failed: {}: {}",
            outcome.seed,
            outcome.failure.as_deref().unwrap_or("unknown")
        );
    }

    if let Err(e) = export::write_records(&result.records, &args.out) {
        ::log::error!("Failed to write export: {}", e);
        return ExitCode::FAILURE;
    }
    println!(
        "Wrote {} records to {}",
        result.records.len(),
        args.out.display()
    );

    if let Some(dir) = &args.download {
        download_documents(&result.records, dir, &config).await;
    }

    ExitCode::SUCCESS
}

/// Download every record's document into `dir`. Failed downloads are
/// logged and skipped; they never fail the run.
async fn download_documents(records: &[Record], dir: &Path, config: &HarvestConfig) {
    let fetcher = match BlobFetcher::from_config(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            ::log::error!("Failed to build document fetcher: {}", e);
            return;
        }
    };

    if let Err(e) = tokio::fs::create_dir_all(dir).await {
        ::log::error!("Failed to create {}: {}", dir.display(), e);
        return;
    }

    let total = records.len();
    let mut saved = 0;
    for outcome in fetcher.fetch_all(records).await {
        let bytes = match outcome.body {
            Ok(bytes) => bytes,
            Err(_) => continue, // already logged by the fetcher
        };

        let path = dir.join(utils::document_filename(&outcome.record.link));
        match tokio::fs::write(&path, &bytes).await {
            Ok(()) => saved += 1,
            Err(e) => ::log::warn!("Failed to save {}: {}", path.display(), e),
        }
    }

    println!(
        "Downloaded {} of {} documents into {}",
        saved,
        total,
        dir.display()
    );
}
