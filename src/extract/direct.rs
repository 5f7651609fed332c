use regex::Regex;
use scraper::{Html, Selector};

use crate::error::ConfigError;
use crate::extract::{element_text, parse_selector, RowCapture};

/// Captures every anchor on the page whose href matches a pattern.
/// Useful for listings that scatter document links outside a table.
#[derive(Debug)]
pub struct DirectLinks {
    anchors: Selector,
    pattern: Regex,
}

impl DirectLinks {
    pub fn new(pattern: &str) -> Result<Self, ConfigError> {
        let pattern = Regex::new(pattern).map_err(|source| ConfigError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;

        Ok(Self {
            anchors: parse_selector("a")?,
            pattern,
        })
    }

    /// Matching anchors in document order. Anchors without text fall back
    /// to the link's final path segment as the name.
    pub fn rows(&self, document: &Html) -> Vec<RowCapture> {
        document
            .select(&self.anchors)
            .filter_map(|anchor| {
                let href = anchor.value().attr("href")?;
                if !self.pattern.is_match(href) {
                    return None;
                }

                let mut text = element_text(anchor);
                if text.is_empty() {
                    text = final_segment(href);
                }

                Some(RowCapture {
                    text,
                    href: href.to_string(),
                })
            })
            .collect()
    }
}

/// Last path segment of an href, with query and fragment trimmed off
fn final_segment(href: &str) -> String {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    path.rsplit('/').next().unwrap_or(path).to_string()
}
