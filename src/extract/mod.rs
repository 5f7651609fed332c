pub mod direct;
pub mod table;

#[cfg(test)]
mod tests;

use scraper::{ElementRef, Html, Selector};

use crate::config::{ExtractStrategy, HarvestConfig, SelectorProfile};
use crate::error::ConfigError;

/// One row captured from a rendered page, before link resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowCapture {
    /// Text of the link element, whitespace-normalized
    pub text: String,

    /// The href exactly as it appears in the markup
    pub href: String,
}

/// What one rendered page contributes to a walk
#[derive(Debug, Clone)]
pub struct PageSnapshot {
    /// Captured rows in document order
    pub rows: Vec<RowCapture>,

    /// Whether the pagination control still allows advancing
    pub has_next: bool,
}

/// Main extractor that delegates to the configured strategy
#[derive(Debug)]
pub struct PageExtractor {
    strategy: Strategy,
    next: Selector,
    disabled_class: String,
}

#[derive(Debug)]
enum Strategy {
    Table(table::TableRows),
    Direct(direct::DirectLinks),
}

impl PageExtractor {
    /// Build an extractor for the given selectors and strategy
    pub fn new(
        selectors: &SelectorProfile,
        strategy: &ExtractStrategy,
    ) -> Result<Self, ConfigError> {
        let strategy = match strategy {
            ExtractStrategy::Table => Strategy::Table(table::TableRows::new(selectors)?),
            ExtractStrategy::DirectLinks { pattern } => {
                Strategy::Direct(direct::DirectLinks::new(pattern)?)
            }
        };

        Ok(Self {
            strategy,
            next: parse_selector(&selectors.next)?,
            disabled_class: selectors.disabled_class.clone(),
        })
    }

    pub fn from_config(config: &HarvestConfig) -> Result<Self, ConfigError> {
        Self::new(&config.selectors, &config.strategy)
    }

    /// Capture the rows and pagination state of one rendered page
    pub fn snapshot(&self, html: &str) -> PageSnapshot {
        let document = Html::parse_document(html);

        let rows = match &self.strategy {
            Strategy::Table(table) => table.rows(&document),
            Strategy::Direct(direct) => direct.rows(&document),
        };
        ::log::debug!("captured {} rows from page", rows.len());

        PageSnapshot {
            has_next: !self.next_disabled(&document),
            rows,
        }
    }

    /// An absent control, the configured disabled class, or a disabled
    /// attribute all read as "no further pages".
    fn next_disabled(&self, document: &Html) -> bool {
        match document.select(&self.next).next() {
            None => true,
            Some(control) => {
                let element = control.value();
                element.classes().any(|class| class == self.disabled_class)
                    || element.attr("disabled").is_some()
            }
        }
    }
}

/// Compile a CSS selector, surfacing bad configuration as an error
pub(crate) fn parse_selector(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|err| ConfigError::Selector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}

/// Collapse an element's text to single-spaced form
pub(crate) fn element_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
