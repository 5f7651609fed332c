use std::time::{Duration, Instant};

use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};

use crate::config::HarvestConfig;
use crate::error::NavigationError;

/// How often a session re-samples the page while waiting for it to settle
const SETTLE_POLL: Duration = Duration::from_millis(500);

/// A live page session, exclusively owned by one walk
#[async_trait]
pub trait RenderSession: Send {
    /// Serialized DOM of the page as currently rendered
    async fn page_html(&mut self) -> Result<String, NavigationError>;

    /// Activate the "next page" control and wait for the listing to re-render
    async fn advance(&mut self) -> Result<(), NavigationError>;

    /// Tear the session down
    async fn close(self) -> Result<(), NavigationError>;
}

/// Opens render sessions on listing pages
#[async_trait]
pub trait Renderer {
    type Session: RenderSession;

    /// Open a session on `url` with its dynamic content loaded
    async fn open(&self, url: &str) -> Result<Self::Session, NavigationError>;
}

/// Renderer backed by a WebDriver server
pub struct WebDriverRenderer {
    webdriver_url: String,
    table: String,
    next: String,
    timeout: Duration,
}

impl WebDriverRenderer {
    pub fn new(config: &HarvestConfig) -> Self {
        Self {
            webdriver_url: config.webdriver_url.clone(),
            table: config.selectors.table.clone(),
            next: config.selectors.next.clone(),
            timeout: config.render_timeout(),
        }
    }
}

#[async_trait]
impl Renderer for WebDriverRenderer {
    type Session = BrowserSession;

    async fn open(&self, url: &str) -> Result<BrowserSession, NavigationError> {
        let client = ClientBuilder::native()
            .connect(&self.webdriver_url)
            .await
            .map_err(|e| NavigationError::session(&self.webdriver_url, e))?;
        ::log::debug!("Connected to WebDriver at {}", self.webdriver_url);

        let mut session = BrowserSession {
            client,
            table: self.table.clone(),
            next: self.next.clone(),
            timeout: self.timeout,
        };

        if let Err(e) = session.navigate(url).await {
            // Clean up the browser session before surfacing the load error
            if let Err(close_err) = session.close().await {
                ::log::warn!("Failed to close session after load error: {}", close_err);
            }
            return Err(e);
        }

        Ok(session)
    }
}

/// A WebDriver-driven browser tab positioned on one listing page
pub struct BrowserSession {
    client: Client,
    table: String,
    next: String,
    timeout: Duration,
}

impl BrowserSession {
    /// Load `url` and wait for the listing table to finish rendering
    async fn navigate(&mut self, url: &str) -> Result<(), NavigationError> {
        if let Err(e) = self.client.goto(url).await {
            return Err(NavigationError::navigate(url, e));
        }

        self.await_table().await?;
        self.settle(None).await
    }

    /// Poll until the listing table exists in the DOM
    async fn await_table(&mut self) -> Result<(), NavigationError> {
        let deadline = Instant::now() + self.timeout;
        loop {
            if self.client.find(Locator::Css(&self.table)).await.is_ok() {
                return Ok(());
            }
            if Instant::now() >= deadline {
                return Err(NavigationError::MissingElement {
                    selector: self.table.clone(),
                });
            }
            tokio::time::sleep(SETTLE_POLL).await;
        }
    }

    /// Inner HTML of the listing table, used as its render signature
    async fn table_html(&mut self) -> Result<String, NavigationError> {
        let table = self
            .client
            .find(Locator::Css(&self.table))
            .await
            .map_err(|_| NavigationError::MissingElement {
                selector: self.table.clone(),
            })?;

        table.html(true).await.map_err(NavigationError::command)
    }

    /// Poll until the table's markup stops changing between samples.
    /// When `before` is given, the table must first move away from that
    /// markup (the page as it looked before the click).
    async fn settle(&mut self, before: Option<&str>) -> Result<(), NavigationError> {
        let deadline = Instant::now() + self.timeout;
        let mut last: Option<String> = None;

        loop {
            if let Ok(current) = self.table_html().await {
                let moved_on = before.map_or(true, |b| b != current.as_str());
                if moved_on && last.as_deref() == Some(current.as_str()) {
                    return Ok(());
                }
                ::log::trace!("Table still settling ({} bytes)", current.len());
                last = Some(current);
            }

            if Instant::now() >= deadline {
                return Err(NavigationError::Stalled {
                    timeout: self.timeout,
                });
            }
            tokio::time::sleep(SETTLE_POLL).await;
        }
    }
}

#[async_trait]
impl RenderSession for BrowserSession {
    async fn page_html(&mut self) -> Result<String, NavigationError> {
        self.client.source().await.map_err(NavigationError::command)
    }

    async fn advance(&mut self) -> Result<(), NavigationError> {
        let before = self.table_html().await?;

        self.client
            .find(Locator::Css(&self.next))
            .await
            .map_err(|_| NavigationError::MissingElement {
                selector: self.next.clone(),
            })?
            .click()
            .await
            .map_err(NavigationError::command)?;

        self.settle(Some(before.as_str())).await
    }

    async fn close(self) -> Result<(), NavigationError> {
        self.client.close().await.map_err(NavigationError::command)
    }
}
