//! Error types for the wordbank pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for wordbank operations.
#[derive(Error, Debug)]
pub enum WordbankError {
    /// The input document could not be retrieved.
    #[error("Source unavailable: {location}: {reason}")]
    SourceUnavailable {
        /// The file path or URL that was attempted.
        location: String,
        /// Why the retrieval failed.
        reason: String,
    },

    /// The server answered with a non-success status.
    #[error("HTTP {status} fetching {url}")]
    HttpStatus {
        /// The URL that was requested.
        url: String,
        /// The HTTP status code returned.
        status: u16,
    },

    /// A denylist was requested but could not be read.
    #[error("Denylist unavailable: {}: {source}", path.display())]
    DenylistUnavailable {
        /// Path of the denylist file.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The reference dictionary could not be read.
    #[error("Dictionary unavailable: {}: {source}", path.display())]
    DictionaryUnavailable {
        /// Path of the dictionary file.
        path: PathBuf,
        /// The underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// The reference dictionary contained no words.
    #[error("Dictionary is empty: {}", .0.display())]
    EmptyDictionary(PathBuf),

    /// The strict markup backend rejected the document.
    ///
    /// Never surfaces from [`crate::TextExtractor`], which falls back to
    /// lenient parsing instead.
    #[error("Malformed markup: {0}")]
    MalformedMarkup(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for wordbank operations.
pub type Result<T> = std::result::Result<T, WordbankError>;

impl From<serde_json::Error> for WordbankError {
    fn from(err: serde_json::Error) -> Self {
        WordbankError::Serialization(err.to_string())
    }
}

impl From<quick_xml::Error> for WordbankError {
    fn from(err: quick_xml::Error) -> Self {
        WordbankError::MalformedMarkup(err.to_string())
    }
}
