//! Index construction from a text and a raw word list.

use log::{debug, info};

use crate::analysis::{Word, normalize};
use crate::index::PositionList;
use crate::index::config::{EmptyMatchPolicy, IndexConfig};
use crate::index::hash_table::PositionIndex;
use crate::index::vocabulary::Vocabulary;
use crate::matcher::PatternMatcher;
use crate::matcher::boyer_moore::BoyerMoore;
use crate::text::Text;

/// Builds a [`PositionIndex`] and its [`Vocabulary`].
///
/// # Examples
///
/// ```
/// use wordpos::index::IndexBuilder;
/// use wordpos::analysis::Word;
/// use wordpos::text::Text;
///
/// let text = Text::new("The cat sat on the mat");
/// let (index, vocabulary) = IndexBuilder::new().build(&text, ["Cat", "mat", "dog"]);
///
/// assert_eq!(index.search(&Word::new("cat")), &[4]);
/// assert_eq!(vocabulary.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IndexBuilder {
    config: IndexConfig,
}

impl IndexBuilder {
    /// Create a builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: IndexConfig) -> Self {
        IndexBuilder { config }
    }

    /// Normalize `raw` and find every occurrence of it in `text`.
    pub fn locate(text: &Text, raw: &str) -> (Word, PositionList) {
        let word = normalize(raw);
        let positions = BoyerMoore::new(word.as_str()).find_all(text);
        (word, positions)
    }

    /// Index every raw word against `text`.
    ///
    /// The vocabulary lists the normalized words in input order. Words with no
    /// occurrences are indexed or skipped according to the configured
    /// [`EmptyMatchPolicy`], and are kept in the vocabulary either way.
    pub fn build<I, S>(&self, text: &Text, raw_words: I) -> (PositionIndex, Vocabulary)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut index = PositionIndex::with_config(&self.config);
        let mut vocabulary = Vocabulary::new();
        let mut skipped = 0usize;

        for raw in raw_words {
            let (word, positions) = Self::locate(text, raw.as_ref());
            debug!("'{}' occurs {} time(s)", word, positions.len());

            if positions.is_empty() && self.config.empty_match_policy == EmptyMatchPolicy::Skip {
                skipped += 1;
            } else {
                index.insert(word.clone(), positions);
            }
            vocabulary.push(word);
        }

        info!(
            "Indexed {} word(s) over {} chars ({} entries, {} skipped)",
            vocabulary.len(),
            text.len(),
            index.len(),
            skipped
        );

        (index, vocabulary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_keeps_empty_matches_by_default() {
        let text = Text::new("The cat sat on the mat");
        let (index, vocabulary) = IndexBuilder::new().build(&text, ["cat", "mat", "dog"]);

        assert_eq!(index.len(), 3);
        assert!(index.contains(&Word::new("dog")));
        assert!(index.search(&Word::new("dog")).is_empty());
        assert_eq!(index.search(&Word::new("mat")), &[19]);
        assert_eq!(vocabulary.len(), 3);
    }

    #[test]
    fn test_build_skip_policy() {
        let text = Text::new("The cat sat on the mat");
        let builder = IndexBuilder::with_config(
            IndexConfig::new().with_empty_match_policy(EmptyMatchPolicy::Skip),
        );
        let (index, vocabulary) = builder.build(&text, ["cat", "dog"]);

        assert_eq!(index.len(), 1);
        assert!(!index.contains(&Word::new("dog")));
        assert!(vocabulary.contains(&Word::new("dog")));
    }

    #[test]
    fn test_build_normalizes_and_keeps_order() {
        let text = Text::new("Sat. The MAT!");
        let (index, vocabulary) = IndexBuilder::new().build(&text, ["MAT!", "sat,", "Mat"]);

        let words: Vec<&str> = vocabulary.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["mat", "sat", "mat"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.search(&Word::new("mat")), &[9]);
        assert_eq!(index.search(&Word::new("sat")), &[0]);
    }

    #[test]
    fn test_build_empty_inputs() {
        let (index, vocabulary) = IndexBuilder::new().build(&Text::new(""), ["cat"]);
        assert!(index.search(&Word::new("cat")).is_empty());
        assert_eq!(vocabulary.len(), 1);

        let (index, vocabulary) =
            IndexBuilder::new().build(&Text::new("cat"), Vec::<String>::new());
        assert!(index.is_empty());
        assert!(vocabulary.is_empty());
    }

    #[test]
    fn test_locate() {
        let (word, positions) = IndexBuilder::locate(&Text::new("a Cat, a cat"), "CAT!");
        assert_eq!(word.as_str(), "cat");
        assert_eq!(positions, vec![2, 9]);
    }
}
