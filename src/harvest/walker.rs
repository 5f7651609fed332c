use url::Url;

use crate::error::NavigationError;
use crate::extract::PageExtractor;
use crate::harvest::session::{Renderer, RenderSession};
use crate::records::Record;

/// What walking one seed produced
#[derive(Debug, Default)]
pub struct WalkReport {
    /// Records captured before the walk ended, in page order
    pub records: Vec<Record>,

    /// Listing pages that were captured
    pub pages: usize,

    /// Why the walk stopped early, if it did. Records captured up to
    /// that point are still in `records`.
    pub failure: Option<NavigationError>,
}

/// Walk one seed's listing from its first page to its last.
///
/// Every page is captured through `extractor`, then the pagination control
/// is clicked until it reports no further pages. A failure mid-walk keeps
/// the pages captured so far.
pub async fn walk<R: Renderer>(
    renderer: &R,
    extractor: &PageExtractor,
    seed: &str,
) -> WalkReport {
    let mut report = WalkReport::default();

    let base = match Url::parse(seed) {
        Ok(base) => base,
        Err(source) => {
            report.failure = Some(NavigationError::InvalidSeed {
                url: seed.to_string(),
                source,
            });
            return report;
        }
    };

    let mut session = match renderer.open(seed).await {
        Ok(session) => session,
        Err(e) => {
            report.failure = Some(e);
            return report;
        }
    };

    loop {
        let html = match session.page_html().await {
            Ok(html) => html,
            Err(e) => {
                report.failure = Some(e);
                break;
            }
        };

        let snapshot = extractor.snapshot(&html);
        report.pages += 1;
        ::log::debug!(
            "Page {} of {} captured {} rows",
            report.pages,
            seed,
            snapshot.rows.len()
        );

        for row in &snapshot.rows {
            match Record::resolve(row, &base) {
                Some(record) => report.records.push(record),
                None => ::log::debug!("Dropping row without usable href: {:?}", row.text),
            }
        }

        if !snapshot.has_next {
            break;
        }

        if let Err(e) = session.advance().await {
            report.failure = Some(e);
            break;
        }
    }

    if let Err(e) = session.close().await {
        ::log::warn!("Failed to close session for {}: {}", seed, e);
    }

    report
}
