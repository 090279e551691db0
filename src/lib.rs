//! # Wordbank - word lists for drawing-guessing games
//!
//! Wordbank turns any text or HTML document into a deduplicated list of
//! words suitable for a drawing-guessing game word bank. Every word is a
//! plain lowercase alphabetic token within a length range, present in a
//! reference dictionary, and absent from an optional denylist.
//!
//! ## Quick Start
//!
//! ```rust
//! use wordbank::{Dictionary, LengthBounds, TextExtractor, WordFilterPipeline};
//!
//! let dictionary = Dictionary::from_words(["quick", "brown", "jumps", "fox"]);
//! let extractor = TextExtractor::default_config();
//! let pipeline = WordFilterPipeline::new(LengthBounds::new(4, 5), &dictionary, None);
//!
//! let words = wordbank::build_wordlist("<p>The Quick Brown Fox jumps! 123</p>", &extractor, &pipeline);
//! assert_eq!(wordbank::format_wordlist(&words), "brown, jumps, quick");
//! ```
//!
//! ## Architecture
//!
//! - [`text`] - Markup removal, normalization, and tokenization
//! - [`filter`] - Length, dictionary, and denylist filters
//! - [`lexicon`] - Reference dictionary and denylist loading
//! - [`source`] - Reading documents from files and URLs
//! - [`output`] - Rendering and writing the word list

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod filter;
pub mod lexicon;
pub mod output;
pub mod source;
pub mod text;

// Re-export commonly used types
pub use config::{Config, DictionaryConfig, FetchConfig, FilterConfig, TextConfig};
pub use error::{Result, WordbankError};
pub use filter::{LengthBounds, PipelineReport, WordFilter, WordFilterPipeline};
pub use lexicon::{Denylist, Dictionary};
pub use output::{format_wordlist, OutputSink};
pub use source::{read_document, DocumentSource, Fetcher, HttpFetcher};
pub use text::{Normalizer, TextExtractor, TextExtractorBackend, WordSet};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Extracts the candidate words of `raw` and runs them through `pipeline`.
pub fn build_wordlist(raw: &str, extractor: &TextExtractor, pipeline: &WordFilterPipeline<'_>) -> WordSet {
    pipeline.run(&extractor.extract(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_build_wordlist_idempotent() {
        let dictionary = Dictionary::from_words(["apple", "banana", "cherry"]);
        let extractor = TextExtractor::default_config();
        let pipeline = WordFilterPipeline::new(LengthBounds::default(), &dictionary, None);
        let raw = "<ul><li>Apple</li><li>banana, APPLE</li><li>kiwi</li></ul>";

        let first = build_wordlist(raw, &extractor, &pipeline);
        let second = build_wordlist(raw, &extractor, &pipeline);
        assert_eq!(first, second);
        assert_eq!(format_wordlist(&first), "apple, banana");
    }
}
