//! Raw document to candidate word set.

use crate::config::TextConfig;
use crate::text::backend::{LenientMarkupBackend, StrictMarkupBackend, TextExtractorBackend};
use crate::text::{Normalizer, WordSet};
use log::{debug, warn};
use std::borrow::Cow;

/// Extracts the candidate word set from a raw text or markup document.
///
/// Backends are tried in order; the first one that succeeds supplies the
/// visible text. If every backend fails the raw input is used as plain
/// text, so extraction itself never fails.
pub struct TextExtractor {
    backends: Vec<Box<dyn TextExtractorBackend>>,
    normalizer: Normalizer,
}

impl TextExtractor {
    /// Creates an extractor from the given configuration.
    ///
    /// With `strict_markup` enabled the strict parser runs first and the
    /// lenient stripper takes over when it fails.
    pub fn new(config: TextConfig) -> Self {
        let mut backends: Vec<Box<dyn TextExtractorBackend>> = Vec::with_capacity(2);
        if config.strict_markup {
            backends.push(Box::new(StrictMarkupBackend));
        }
        backends.push(Box::new(LenientMarkupBackend));

        Self::with_backends(backends, config)
    }

    /// Creates an extractor with default configuration.
    pub fn default_config() -> Self {
        Self::new(TextConfig::default())
    }

    /// Creates an extractor with an explicit backend chain.
    pub fn with_backends(backends: Vec<Box<dyn TextExtractorBackend>>, config: TextConfig) -> Self {
        Self {
            backends,
            normalizer: Normalizer::new(config),
        }
    }

    /// Returns the visible text of `raw`.
    pub fn visible_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        for backend in &self.backends {
            match backend.visible_text(raw) {
                Ok(text) => {
                    debug!("{} backend extracted {} bytes of text", backend.name(), text.len());
                    return Cow::Owned(text);
                }
                Err(e) => warn!("{} backend failed, falling back: {}", backend.name(), e),
            }
        }

        Cow::Borrowed(raw)
    }

    /// Produces the deduplicated, normalized candidate words of `raw`.
    pub fn extract(&self, raw: &str) -> WordSet {
        let text = self.visible_text(raw);
        let candidates = self.normalizer.tokenize(&text);
        debug!("Extracted {} candidate words", candidates.len());
        candidates
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::default_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, WordbankError};

    struct FailingBackend;

    impl TextExtractorBackend for FailingBackend {
        fn visible_text(&self, _raw: &str) -> Result<String> {
            Err(WordbankError::MalformedMarkup("always".to_string()))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_extract_html() {
        let extractor = TextExtractor::default_config();
        let words = extractor.extract("<p>The Quick Brown Fox jumps! 123</p>");
        assert_eq!(words, set(&["the", "quick", "brown", "fox", "jumps"]));
    }

    #[test]
    fn test_malformed_markup_falls_back() {
        let extractor = TextExtractor::default_config();
        let words = extractor.extract("not <>> valid markup");
        assert_eq!(words, set(&["not", "valid", "markup"]));
    }

    #[test]
    fn test_html_soup_falls_back() {
        let extractor = TextExtractor::default_config();
        let raw = "<!DOCTYPE html><html><body>Fish &nbsp; chips<br>peas<script>x<y</script></body></html>";
        assert_eq!(extractor.extract(raw), set(&["fish", "chips", "peas"]));
    }

    #[test]
    fn test_attribute_values_never_leak() {
        let extractor = TextExtractor::default_config();
        let words = extractor.extract(r#"<p>hello<br><img alt="arrow > secret">world</p>"#);
        assert_eq!(words, set(&["hello", "world"]));
    }

    #[test]
    fn test_lenient_only() {
        let config = TextConfig {
            strict_markup: false,
            ..Default::default()
        };
        let extractor = TextExtractor::new(config);
        assert_eq!(extractor.extract("<i>plain</i> words"), set(&["plain", "words"]));
    }

    #[test]
    fn test_all_backends_failing_uses_raw_text() {
        let extractor = TextExtractor::with_backends(vec![Box::new(FailingBackend)], TextConfig::default());
        assert_eq!(extractor.visible_text("<b>raw</b>"), "<b>raw</b>");
        assert_eq!(extractor.extract("<b>raw</b>"), set(&["b", "raw"]));
    }

    #[test]
    fn test_tokens_are_lowercase_ascii() {
        let extractor = TextExtractor::default_config();
        let raw = "<div title=\"Attr\">Ünïcödé\tTABS\nnew-lines_under_scores 3rd</div>";
        let words = extractor.extract(raw);
        assert!(!words.is_empty());
        assert!(!words.contains("attr"));
        for word in &words {
            assert!(!word.is_empty());
            assert!(word.chars().all(|c| c.is_ascii_lowercase()), "{}", word);
        }
    }

    #[test]
    fn test_empty_document() {
        let extractor = TextExtractor::default_config();
        assert!(extractor.extract("").is_empty());
        assert!(extractor.extract("<p>1234 !!</p>").is_empty());
    }
}
