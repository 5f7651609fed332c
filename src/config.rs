use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;

/// Configuration for a harvest run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HarvestConfig {
    /// Catalog listing URLs to walk, in order
    pub seeds: Vec<String>,

    /// Seconds to pause between seeds and between document downloads
    #[serde(default = "default_seed_delay_secs")]
    pub seed_delay_secs: u64,

    /// Per-document download timeout in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Seconds a page may take to render its listing before the walk fails
    #[serde(default = "default_render_timeout_secs")]
    pub render_timeout_secs: u64,

    /// URL for the WebDriver instance
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// CSS selectors locating the listing and its pagination control
    #[serde(default)]
    pub selectors: SelectorProfile,

    /// How records are pulled out of a rendered page
    #[serde(default)]
    pub strategy: ExtractStrategy,
}

/// CSS selectors for one family of catalog pages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorProfile {
    /// The catalog table
    #[serde(default = "default_table_selector")]
    pub table: String,

    /// Body rows within the table
    #[serde(default = "default_row_selector")]
    pub rows: String,

    /// The link element within a row
    #[serde(default = "default_link_selector")]
    pub link: String,

    /// The "next page" control
    #[serde(default = "default_next_selector")]
    pub next: String,

    /// Class that marks the pagination control as disabled
    #[serde(default = "default_disabled_class")]
    pub disabled_class: String,
}

/// Strategies for pulling records out of a rendered page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtractStrategy {
    /// Walk the catalog table's rows and take each row's link cell
    Table,

    /// Collect every anchor on the page whose href matches a pattern
    DirectLinks {
        /// Regex a document link must match, e.g. `\.ashx$`
        pattern: String,
    },
}

impl HarvestConfig {
    /// Create a new configuration with default values
    pub fn new(seeds: Vec<String>) -> Self {
        Self {
            seeds,
            seed_delay_secs: default_seed_delay_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            render_timeout_secs: default_render_timeout_secs(),
            webdriver_url: default_webdriver_url(),
            selectors: SelectorProfile::default(),
            strategy: ExtractStrategy::default(),
        }
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn seed_delay(&self) -> Duration {
        Duration::from_secs(self.seed_delay_secs)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.render_timeout_secs)
    }
}

impl Default for SelectorProfile {
    fn default() -> Self {
        Self {
            table: default_table_selector(),
            rows: default_row_selector(),
            link: default_link_selector(),
            next: default_next_selector(),
            disabled_class: default_disabled_class(),
        }
    }
}

impl Default for ExtractStrategy {
    fn default() -> Self {
        ExtractStrategy::Table
    }
}

/// Default value for seed_delay_secs
fn default_seed_delay_secs() -> u64 {
    1
}

/// Default value for fetch_timeout_secs
fn default_fetch_timeout_secs() -> u64 {
    120
}

/// Default value for render_timeout_secs
fn default_render_timeout_secs() -> u64 {
    30
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

fn default_table_selector() -> String {
    "#handbookDataTable".to_string()
}

fn default_row_selector() -> String {
    "tbody tr".to_string()
}

fn default_link_selector() -> String {
    "td:first-child a".to_string()
}

fn default_next_selector() -> String {
    "#handbookDataTable_next".to_string()
}

fn default_disabled_class() -> String {
    "disabled".to_string()
}
