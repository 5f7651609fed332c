use crate::config::HarvestConfig;
use crate::error::ConfigError;
use crate::extract::PageExtractor;
use crate::harvest::session::{Renderer, WebDriverRenderer};
use crate::harvest::walker::walk;
use crate::records::{HarvestResult, RecordSet, SeedOutcome};

/// Drives a whole harvest run: walks each seed in order, merges records
/// across seeds, and keeps per-seed outcomes.
///
/// A failing seed never stops the run; its outcome records the failure and
/// the remaining seeds are still walked.
pub struct Harvester<R = WebDriverRenderer> {
    config: HarvestConfig,
    extractor: PageExtractor,
    renderer: R,
}

impl Harvester {
    /// Create a harvester that renders pages through a WebDriver server
    pub fn new(config: HarvestConfig) -> Result<Self, ConfigError> {
        let renderer = WebDriverRenderer::new(&config);
        Self::with_renderer(config, renderer)
    }
}

impl<R: Renderer> Harvester<R> {
    /// Create a harvester over a custom renderer
    pub fn with_renderer(config: HarvestConfig, renderer: R) -> Result<Self, ConfigError> {
        let extractor = PageExtractor::from_config(&config)?;
        Ok(Self {
            config,
            extractor,
            renderer,
        })
    }

    /// Walk every configured seed, pausing between seeds
    pub async fn run(&self) -> HarvestResult {
        let total = self.config.seeds.len();
        let mut set = RecordSet::new();
        let mut outcomes = Vec::with_capacity(total);

        for (index, seed) in self.config.seeds.iter().enumerate() {
            ::log::info!("Walking seed {}/{}: {}", index + 1, total, seed);

            let report = walk(&self.renderer, &self.extractor, seed).await;
            let records_found = report.records.len();

            match &report.failure {
                None => ::log::info!(
                    "Seed yielded {} records across {} pages: {}",
                    records_found,
                    report.pages,
                    seed
                ),
                Some(e) => ::log::warn!(
                    "Seed failed after {} pages, keeping {} records: {}: {}",
                    report.pages,
                    records_found,
                    seed,
                    e
                ),
            }

            for record in report.records {
                set.insert(record);
            }
            outcomes.push(SeedOutcome {
                seed: seed.clone(),
                records_found,
                pages_visited: report.pages,
                failure: report.failure.map(|e| e.to_string()),
            });

            if index + 1 < total {
                tokio::time::sleep(self.config.seed_delay()).await;
            }
        }

        ::log::info!("Harvest finished with {} unique records", set.len());

        HarvestResult {
            records: set.into_records(),
            outcomes,
        }
    }
}
