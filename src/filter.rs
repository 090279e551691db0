//! Word filters and the filter pipeline.
//!
//! Every filter is a pure membership predicate: it builds a new set from
//! the words it keeps and never mutates its input. Because the predicates
//! are independent, any ordering of the filters yields the same result.

use crate::config::FilterConfig;
use crate::lexicon::{Denylist, Dictionary};
use crate::text::WordSet;
use log::{debug, warn};

/// Trait for filters that select words from a word set.
pub trait WordFilter {
    /// Returns true if `word` survives this filter.
    fn keep(&self, word: &str) -> bool;

    /// Returns the subset of `words` that survives this filter.
    fn apply(&self, words: &WordSet) -> WordSet {
        words.iter().filter(|w| self.keep(w)).cloned().collect()
    }

    /// Short filter name used in log messages.
    fn name(&self) -> &'static str;
}

/// Inclusive character-count bounds.
///
/// Inverted bounds (`min > max`) are accepted and match nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthBounds {
    /// Shortest accepted length.
    pub min_characters: usize,
    /// Longest accepted length.
    pub max_characters: usize,
}

impl LengthBounds {
    /// Creates new bounds.
    pub fn new(min_characters: usize, max_characters: usize) -> Self {
        Self {
            min_characters,
            max_characters,
        }
    }

    /// Returns true if no length can satisfy these bounds.
    pub fn is_inverted(&self) -> bool {
        self.min_characters > self.max_characters
    }

    /// Checks if `len` lies within the bounds.
    #[inline]
    pub fn contains(&self, len: usize) -> bool {
        self.min_characters <= len && len <= self.max_characters
    }
}

impl Default for LengthBounds {
    fn default() -> Self {
        FilterConfig::default().into()
    }
}

impl From<FilterConfig> for LengthBounds {
    fn from(config: FilterConfig) -> Self {
        Self::new(config.min_characters, config.max_characters)
    }
}

/// Keeps words whose length lies within [`LengthBounds`].
#[derive(Debug, Clone, Copy)]
pub struct LengthFilter {
    bounds: LengthBounds,
}

impl LengthFilter {
    /// Creates a new length filter.
    pub fn new(bounds: LengthBounds) -> Self {
        Self { bounds }
    }
}

impl WordFilter for LengthFilter {
    fn keep(&self, word: &str) -> bool {
        self.bounds.contains(word.chars().count())
    }

    fn name(&self) -> &'static str {
        "length"
    }
}

/// Keeps words present in the reference dictionary.
#[derive(Debug, Clone, Copy)]
pub struct DictionaryFilter<'a> {
    dictionary: &'a Dictionary,
}

impl<'a> DictionaryFilter<'a> {
    /// Creates a new dictionary filter.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self { dictionary }
    }
}

impl WordFilter for DictionaryFilter<'_> {
    fn keep(&self, word: &str) -> bool {
        self.dictionary.contains(word)
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}

/// Drops words present in the denylist.
#[derive(Debug, Clone, Copy)]
pub struct DenylistFilter<'a> {
    denylist: &'a Denylist,
}

impl<'a> DenylistFilter<'a> {
    /// Creates a new denylist filter.
    pub fn new(denylist: &'a Denylist) -> Self {
        Self { denylist }
    }
}

impl WordFilter for DenylistFilter<'_> {
    fn keep(&self, word: &str) -> bool {
        !self.denylist.contains(word)
    }

    fn name(&self) -> &'static str {
        "denylist"
    }
}

/// Set sizes after each pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Candidate words entering the pipeline.
    pub candidates: usize,
    /// Words left after the length filter.
    pub after_length: usize,
    /// Words left after the dictionary filter.
    pub after_dictionary: usize,
    /// Words left after the denylist filter (equal to `after_dictionary`
    /// when no denylist was supplied).
    pub after_denylist: usize,
}

/// Applies length, dictionary, and denylist filters, in that order.
///
/// The dictionary and denylist are borrowed: they are loaded once and
/// shared by every run.
#[derive(Debug, Clone, Copy)]
pub struct WordFilterPipeline<'a> {
    length: LengthFilter,
    dictionary: DictionaryFilter<'a>,
    denylist: Option<DenylistFilter<'a>>,
}

impl<'a> WordFilterPipeline<'a> {
    /// Creates a new pipeline. A `None` denylist skips the exclusion stage.
    pub fn new(bounds: LengthBounds, dictionary: &'a Dictionary, denylist: Option<&'a Denylist>) -> Self {
        if bounds.is_inverted() {
            warn!(
                "min_characters ({}) exceeds max_characters ({}); no word can match",
                bounds.min_characters, bounds.max_characters
            );
        }

        Self {
            length: LengthFilter::new(bounds),
            dictionary: DictionaryFilter::new(dictionary),
            denylist: denylist.map(DenylistFilter::new),
        }
    }

    /// The filters in application order.
    pub fn stages(&self) -> Vec<&dyn WordFilter> {
        let mut stages: Vec<&dyn WordFilter> = Vec::with_capacity(3);
        stages.push(&self.length);
        stages.push(&self.dictionary);
        if let Some(denylist) = &self.denylist {
            stages.push(denylist);
        }
        stages
    }

    /// Filters the candidate set down to the result set.
    pub fn run(&self, candidates: &WordSet) -> WordSet {
        self.run_with_report(candidates).0
    }

    /// Filters the candidate set and reports the size after every stage.
    pub fn run_with_report(&self, candidates: &WordSet) -> (WordSet, PipelineReport) {
        let after_length = run_stage(&self.length, candidates);
        let after_dictionary = run_stage(&self.dictionary, &after_length);
        let result = match &self.denylist {
            Some(denylist) => run_stage(denylist, &after_dictionary),
            None => after_dictionary.clone(),
        };

        let report = PipelineReport {
            candidates: candidates.len(),
            after_length: after_length.len(),
            after_dictionary: after_dictionary.len(),
            after_denylist: result.len(),
        };
        (result, report)
    }
}

fn run_stage(filter: &dyn WordFilter, words: &WordSet) -> WordSet {
    let kept = filter.apply(words);
    debug!("{} filter kept {} of {} words", filter.name(), kept.len(), words.len());
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn candidates() -> WordSet {
        set(&["the", "quick", "brown", "fox", "jumps"])
    }

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["quick", "brown", "jumps", "fox"])
    }

    #[test]
    fn test_length_bounds_inclusive() {
        let bounds = LengthBounds::new(4, 5);
        assert!(!bounds.contains(3));
        assert!(bounds.contains(4));
        assert!(bounds.contains(5));
        assert!(!bounds.contains(6));
    }

    #[test]
    fn test_default_bounds() {
        assert_eq!(LengthBounds::default(), LengthBounds::new(4, 11));
    }

    #[test]
    fn test_length_filter() {
        let filter = LengthFilter::new(LengthBounds::new(4, 5));
        assert_eq!(filter.apply(&candidates()), set(&["quick", "brown", "jumps"]));
    }

    #[test]
    fn test_dictionary_filter() {
        let dict = dictionary();
        let filter = DictionaryFilter::new(&dict);
        assert_eq!(filter.apply(&candidates()), set(&["quick", "brown", "fox", "jumps"]));
    }

    #[test]
    fn test_denylist_filter() {
        let deny = Denylist::from_words(["fox", "absent"]);
        let filter = DenylistFilter::new(&deny);
        assert_eq!(filter.apply(&candidates()), set(&["the", "quick", "brown", "jumps"]));
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let input = candidates();
        let filter = LengthFilter::new(LengthBounds::new(5, 5));
        let _ = filter.apply(&input);
        assert_eq!(input, candidates());
    }

    #[test]
    fn test_pipeline_without_denylist() {
        let dict = dictionary();
        let pipeline = WordFilterPipeline::new(LengthBounds::new(4, 5), &dict, None);
        assert_eq!(pipeline.stages().len(), 2);
        assert_eq!(pipeline.run(&candidates()), set(&["quick", "brown", "jumps"]));
    }

    #[test]
    fn test_pipeline_with_denylist() {
        let dict = dictionary();
        let deny = Denylist::from_words(["quick"]);
        let pipeline = WordFilterPipeline::new(LengthBounds::new(4, 5), &dict, Some(&deny));
        assert_eq!(pipeline.stages().len(), 3);
        assert_eq!(pipeline.run(&candidates()), set(&["brown", "jumps"]));
    }

    #[test]
    fn test_inverted_bounds_yield_empty() {
        let dict = dictionary();
        let bounds = LengthBounds::new(10, 3);
        assert!(bounds.is_inverted());
        let pipeline = WordFilterPipeline::new(bounds, &dict, None);
        assert!(pipeline.run(&candidates()).is_empty());
    }

    #[test]
    fn test_report_counts() {
        let dict = Dictionary::from_words(["quick", "jumps"]);
        let deny = Denylist::from_words(["jumps"]);
        let pipeline = WordFilterPipeline::new(LengthBounds::new(4, 5), &dict, Some(&deny));
        let (result, report) = pipeline.run_with_report(&candidates());

        assert_eq!(result, set(&["quick"]));
        assert_eq!(
            report,
            PipelineReport {
                candidates: 5,
                after_length: 3,
                after_dictionary: 2,
                after_denylist: 1,
            }
        );
    }

    #[test]
    fn test_filter_order_independent() {
        let dict = dictionary();
        let deny = Denylist::from_words(["brown"]);
        let pipeline = WordFilterPipeline::new(LengthBounds::new(4, 5), &dict, Some(&deny));
        let expected = pipeline.run(&candidates());

        let stages = pipeline.stages();
        let orders: [[usize; 3]; 6] = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];
        for order in orders {
            let mut words = candidates();
            for &i in &order {
                words = stages[i].apply(&words);
            }
            assert_eq!(words, expected, "order {:?}", order);
        }
    }
}
