//! Configuration for the wordbank pipeline.

use crate::error::{Result, WordbankError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration for wordbank.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Text extraction configuration.
    pub text: TextConfig,

    /// Word filter configuration.
    pub filter: FilterConfig,

    /// Dictionary and denylist locations.
    pub dictionary: DictionaryConfig,

    /// Document fetching configuration.
    pub fetch: FetchConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            WordbankError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config = serde_json::from_str(&contents)?;
        Ok(config)
    }
}

/// Text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Try the strict markup parser before the lenient one.
    /// Default: true.
    pub strict_markup: bool,

    /// Decompose accented letters (NFD) and drop the combining marks
    /// before normalization, so "café" yields "cafe".
    /// Default: false (accented letters split tokens).
    pub fold_diacritics: bool,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            strict_markup: true,
            fold_diacritics: false,
        }
    }
}

/// Word filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Shortest word kept (inclusive).
    /// Default: 4.
    pub min_characters: usize,

    /// Longest word kept (inclusive).
    /// Default: 11.
    pub max_characters: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_characters: 4,
            max_characters: 11,
        }
    }
}

/// Locations of the reference dictionary and optional denylist.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Whitespace-delimited reference dictionary.
    /// Default: /usr/share/dict/words.
    pub path: PathBuf,

    /// Whitespace-delimited denylist.
    /// Default: None (no exclusion step).
    pub denylist: Option<PathBuf>,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("/usr/share/dict/words"),
            denylist: None,
        }
    }
}

/// Document fetching configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds.
    /// Default: 30.
    pub timeout_secs: u64,

    /// User-Agent header sent with requests.
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 30,
            user_agent: format!("wordbank/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
