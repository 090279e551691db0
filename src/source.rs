//! Document sources: local files and URLs.

use crate::config::FetchConfig;
use crate::error::{Result, WordbankError};
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Where the raw document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    /// A local file.
    File(PathBuf),
    /// An `http://` or `https://` URL.
    Url(String),
}

impl DocumentSource {
    /// Interprets `location` as a URL when it has an HTTP scheme, and as a
    /// file path otherwise.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DocumentSource::Url(location.to_string())
        } else {
            DocumentSource::File(PathBuf::from(location))
        }
    }

    /// Returns true for URL sources.
    pub fn is_remote(&self) -> bool {
        matches!(self, DocumentSource::Url(_))
    }
}

impl From<&str> for DocumentSource {
    fn from(location: &str) -> Self {
        Self::parse(location)
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Url(url) => f.write_str(url),
        }
    }
}

/// Trait for retrieving remote documents.
pub trait Fetcher {
    /// Fetches the body of `url` as text.
    ///
    /// Non-success statuses are reported as [`WordbankError::HttpStatus`],
    /// transport failures as [`WordbankError::SourceUnavailable`].
    fn fetch(&self, url: &str) -> Result<String>;
}

/// Blocking HTTP fetcher.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Creates a fetcher with the configured timeout and user agent.
    pub fn new(config: &FetchConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WordbankError::Config(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

impl Fetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        let unavailable = |e: reqwest::Error| WordbankError::SourceUnavailable {
            location: url.to_string(),
            reason: e.to_string(),
        };

        let response = self.client.get(url).send().map_err(unavailable)?;
        let status = response.status();
        if !status.is_success() {
            return Err(WordbankError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().map_err(unavailable)?;
        debug!("Fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }
}

/// Reads a local file as text, replacing invalid UTF-8.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| WordbankError::SourceUnavailable {
        location: path.display().to_string(),
        reason: e.to_string(),
    })?;

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Reads the complete raw document from `source`.
pub fn read_document(source: &DocumentSource, fetcher: &dyn Fetcher) -> Result<String> {
    match source {
        DocumentSource::File(path) => read_file(path),
        DocumentSource::Url(url) => fetcher.fetch(url),
    }
}
