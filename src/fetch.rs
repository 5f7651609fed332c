use std::time::Duration;

use bytes::Bytes;

use crate::config::HarvestConfig;
use crate::error::FetchError;
use crate::records::Record;

/// Downloads harvested documents over plain HTTP
pub struct BlobFetcher {
    client: reqwest::Client,
    timeout: Duration,
    delay: Duration,
}

/// Result of downloading one record's document
#[derive(Debug)]
pub struct FetchOutcome {
    pub record: Record,
    pub body: Result<Bytes, FetchError>,
}

impl BlobFetcher {
    pub fn new(timeout: Duration, delay: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            timeout,
            delay,
        })
    }

    pub fn from_config(config: &HarvestConfig) -> Result<Self, FetchError> {
        Self::new(config.fetch_timeout(), config.seed_delay())
    }

    /// Download one document, bounded by the configured timeout
    pub async fn fetch(&self, link: &str) -> Result<Bytes, FetchError> {
        let response = self
            .client
            .get(link)
            .send()
            .await
            .map_err(|e| self.classify(link, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: link.to_string(),
                status,
            });
        }

        response.bytes().await.map_err(|e| self.classify(link, e))
    }

    /// Download a batch sequentially, pausing between requests.
    /// A failed download never stops the batch.
    pub async fn fetch_all(&self, records: &[Record]) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            let body = self.fetch(&record.link).await;
            match &body {
                Ok(bytes) => ::log::info!("Fetched {} ({} bytes)", record.link, bytes.len()),
                Err(e) => ::log::warn!("Fetch failed for {}: {}", record.link, e),
            }

            outcomes.push(FetchOutcome {
                record: record.clone(),
                body,
            });

            if index + 1 < records.len() {
                tokio::time::sleep(self.delay).await;
            }
        }

        outcomes
    }

    fn classify(&self, url: &str, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                url: url.to_string(),
                timeout: self.timeout,
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source: e,
            }
        }
    }
}
