use std::path::PathBuf;

use catalog_harvest::error::ConfigError;
use catalog_harvest::HarvestConfig;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "catalog-harvest")]
#[command(about = "Harvests document names and download links from paginated catalog listings")]
#[command(version)]
pub struct Args {
    /// Catalog listing URLs to walk (replaces any seeds from --config)
    pub seeds: Vec<String>,

    /// JSON file with seeds and harvest settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File the harvested records are written to
    #[arg(short, long, default_value = "links.json")]
    pub out: PathBuf,

    /// Download every discovered document into this directory
    #[arg(long)]
    pub download: Option<PathBuf>,

    /// WebDriver server that drives the rendering browser
    #[arg(long)]
    pub webdriver_url: Option<String>,

    /// Seconds to wait between seeds and between downloads
    #[arg(long)]
    pub delay: Option<u64>,

    /// Per-document download timeout in seconds
    #[arg(long)]
    pub fetch_timeout: Option<u64>,
}

impl Args {
    /// Resolve the effective configuration: config file values first, then
    /// the WEBDRIVER_URL environment variable, then explicit flags.
    pub fn resolve_config(&self) -> Result<HarvestConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => HarvestConfig::from_file(path)?,
            None => HarvestConfig::new(Vec::new()),
        };

        if !self.seeds.is_empty() {
            config.seeds = self.seeds.clone();
        }

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }
        if let Some(webdriver_url) = &self.webdriver_url {
            config.webdriver_url = webdriver_url.clone();
        }

        if let Some(delay) = self.delay {
            config.seed_delay_secs = delay;
        }
        if let Some(fetch_timeout) = self.fetch_timeout {
            config.fetch_timeout_secs = fetch_timeout;
        }

        if config.seeds.is_empty() {
            return Err(ConfigError::NoSeeds);
        }

        Ok(config)
    }
}
