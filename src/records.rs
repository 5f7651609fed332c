use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::extract::RowCapture;

/// One harvested catalog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Human-readable document name, as shown in the listing
    pub name: String,

    /// Absolute download URL
    pub link: String,
}

impl Record {
    /// Creates a new record with the given name and link
    pub fn new(name: &str, link: &str) -> Self {
        Self {
            name: name.to_string(),
            link: link.to_string(),
        }
    }

    /// Turn a captured row into a record, resolving its href against the
    /// seed URL. Rows with empty or unresolvable hrefs produce no record.
    pub fn resolve(row: &RowCapture, base: &Url) -> Option<Record> {
        let href = row.href.trim();
        if href.is_empty() {
            return None;
        }

        let mut link = base.join(href).ok()?;
        link.set_fragment(None);

        Some(Record {
            name: row.text.clone(),
            link: link.to_string(),
        })
    }
}

/// Accumulates records across seeds, dropping duplicate links.
/// The first record seen for a link wins; later names are ignored.
#[derive(Debug, Default)]
pub struct RecordSet {
    seen: HashSet<String>,
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when a record with the same link was already present
    pub fn insert(&mut self, record: Record) -> bool {
        if self.seen.contains(&record.link) {
            return false;
        }

        self.seen.insert(record.link.clone());
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Consume the set, yielding records in first-seen order
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }
}

/// How one seed's walk ended
#[derive(Debug, Clone)]
pub struct SeedOutcome {
    /// The seed URL that was walked
    pub seed: String,

    /// Records captured from this seed, duplicates included
    pub records_found: usize,

    /// Listing pages visited before the walk ended
    pub pages_visited: usize,

    /// Why the walk stopped early, if it did
    pub failure: Option<String>,
}

impl SeedOutcome {
    pub fn failed(&self) -> bool {
        self.failure.is_some()
    }
}

/// Everything a harvest run produced
#[derive(Debug)]
pub struct HarvestResult {
    /// Deduplicated records in first-seen order
    pub records: Vec<Record>,

    /// One outcome per seed, in processing order
    pub outcomes: Vec<SeedOutcome>,
}

impl HarvestResult {
    pub fn seeds_attempted(&self) -> usize {
        self.outcomes.len()
    }

    pub fn seeds_failed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.failed()).count()
    }

    pub fn unique_records(&self) -> usize {
        self.records.len()
    }
}
