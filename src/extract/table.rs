use scraper::{Html, Selector};

use crate::config::SelectorProfile;
use crate::error::ConfigError;
use crate::extract::{element_text, parse_selector, RowCapture};

/// Captures rows from the catalog table, taking each row's link cell
#[derive(Debug)]
pub struct TableRows {
    table: Selector,
    rows: Selector,
    link: Selector,
}

impl TableRows {
    pub fn new(selectors: &SelectorProfile) -> Result<Self, ConfigError> {
        Ok(Self {
            table: parse_selector(&selectors.table)?,
            rows: parse_selector(&selectors.rows)?,
            link: parse_selector(&selectors.link)?,
        })
    }

    /// Rows of the first matching table, skipping rows without a usable link
    pub fn rows(&self, document: &Html) -> Vec<RowCapture> {
        let table = match document.select(&self.table).next() {
            Some(table) => table,
            None => {
                ::log::debug!("no catalog table on page");
                return Vec::new();
            }
        };

        let mut captures = Vec::new();
        for row in table.select(&self.rows) {
            let link = match row.select(&self.link).next() {
                Some(link) => link,
                None => continue, // row without a link cell
            };
            let href = match link.value().attr("href") {
                Some(href) => href,
                None => continue,
            };

            captures.push(RowCapture {
                text: element_text(link),
                href: href.to_string(),
            });
        }

        captures
    }
}
