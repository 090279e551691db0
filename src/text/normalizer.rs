//! Text normalization into `[a-z]` tokens.

use crate::config::TextConfig;
use crate::text::WordSet;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

// ASCII letters only: a case-insensitive `[a-z]` would also admit U+017F and U+212A.
static NON_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z]+").unwrap());

/// Normalizes visible text into lowercase alphabetic tokens.
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: TextConfig,
}

impl Normalizer {
    /// Creates a new normalizer with the given configuration.
    pub fn new(config: TextConfig) -> Self {
        Self { config }
    }

    /// Creates a normalizer with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Replaces every run of non-alphabetic characters with a single space
    /// and lowercases the result.
    pub fn normalize(&self, text: &str) -> String {
        let text: Cow<'_, str> = if self.config.fold_diacritics {
            Cow::Owned(text.nfd().filter(|c| !is_combining_mark(*c)).collect())
        } else {
            Cow::Borrowed(text)
        };

        NON_ALPHA.replace_all(&text, " ").to_ascii_lowercase()
    }

    /// Normalizes text and collects the distinct tokens.
    pub fn tokenize(&self, text: &str) -> WordSet {
        self.normalize(text)
            .split_whitespace()
            .map(str::to_string)
            .collect()
    }
}
