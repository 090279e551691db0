//! Reference dictionary and denylist word sets.
//!
//! Both are loaded once from flat, whitespace-delimited plaintext and are
//! immutable afterwards. Loading lowercases the source text before
//! splitting, so membership checks compare lowercase against lowercase.

use crate::error::{Result, WordbankError};
use log::info;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

fn parse_words(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn read_words<R: Read>(mut reader: R) -> std::io::Result<HashSet<String>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(parse_words(&String::from_utf8_lossy(&bytes)))
}

/// The set of valid words a result may contain.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Builds a dictionary from an iterator of words, lowercasing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Parses a whitespace-delimited word list.
    pub fn parse(text: &str) -> Self {
        Self {
            words: parse_words(text),
        }
    }

    /// Loads a dictionary from a whitespace-delimited file.
    ///
    /// A file with no words is rejected: a dictionary that accepts nothing
    /// would silently empty every result.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|source| WordbankError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        let words = read_words(file).map_err(|source| WordbankError::DictionaryUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        if words.is_empty() {
            return Err(WordbankError::EmptyDictionary(path.to_path_buf()));
        }

        info!("Loaded {} dictionary words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Checks if a word is in the dictionary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Words that must never appear in a result.
#[derive(Debug, Clone, Default)]
pub struct Denylist {
    words: HashSet<String>,
}

impl Denylist {
    /// Builds a denylist from an iterator of words, lowercasing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Parses a whitespace-delimited word list.
    pub fn parse(text: &str) -> Self {
        Self {
            words: parse_words(text),
        }
    }

    /// Loads a denylist from a whitespace-delimited file.
    ///
    /// Fails with [`WordbankError::DenylistUnavailable`] if the file cannot
    /// be read; callers must not treat that as "no denylist".
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let words = std::fs::File::open(path)
            .and_then(read_words)
            .map_err(|source| WordbankError::DenylistUnavailable {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded {} denylist words from {}", words.len(), path.display());
        Ok(Self { words })
    }

    /// Loads the denylist at `path` if one was requested.
    pub fn load_optional<P: AsRef<Path>>(path: Option<P>) -> Result<Option<Self>> {
        path.map(Self::load).transpose()
    }

    /// Checks if a word is denied.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Returns the number of denied words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if nothing is denied.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
