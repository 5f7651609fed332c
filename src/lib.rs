// Re-export modules
pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod fetch;
pub mod harvest;
pub mod records;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::{ExtractStrategy, HarvestConfig, SelectorProfile};
pub use harvest::{Harvester, Renderer, RenderSession, WebDriverRenderer};
pub use records::{HarvestResult, Record, SeedOutcome};
