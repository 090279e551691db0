//! Text processing: markup removal, normalization, and tokenization.

mod backend;
mod extractor;
mod normalizer;

pub use backend::{LenientMarkupBackend, StrictMarkupBackend, TextExtractorBackend};
pub use extractor::TextExtractor;
pub use normalizer::Normalizer;

use std::collections::BTreeSet;

/// A set of unique lowercase words.
///
/// Ordered so that every rendering of the same set is identical.
pub type WordSet = BTreeSet<String>;
