use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Problems with the supplied configuration, reported before a run starts
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no seed urls provided")]
    NoSeeds,

    #[error("invalid selector {selector:?}: {message}")]
    Selector { selector: String, message: String },

    #[error("invalid link pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// The renderer could not load or drive a page. One of these ends the walk
/// for a single seed; the run continues with the remaining seeds.
#[derive(Debug, Error)]
pub enum NavigationError {
    #[error("invalid seed url {url:?}: {source}")]
    InvalidSeed {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("could not open a browser session via {webdriver}: {message}")]
    Session { webdriver: String, message: String },

    #[error("failed to load {url}: {message}")]
    Navigate { url: String, message: String },

    #[error("element {selector:?} not found")]
    MissingElement { selector: String },

    #[error("page did not settle within {timeout:?}")]
    Stalled { timeout: Duration },

    #[error("browser command failed: {message}")]
    Command { message: String },
}

impl NavigationError {
    pub(crate) fn session(webdriver: &str, err: impl std::fmt::Display) -> Self {
        Self::Session {
            webdriver: webdriver.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn navigate(url: &str, err: impl std::fmt::Display) -> Self {
        Self::Navigate {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn command(err: impl std::fmt::Display) -> Self {
        Self::Command {
            message: err.to_string(),
        }
    }
}

/// A single document download failed
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("request to {url} timed out after {timeout:?}")]
    Timeout { url: String, timeout: Duration },

    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned http status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Writing the export file failed. The only error that fails a whole run.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("io error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
