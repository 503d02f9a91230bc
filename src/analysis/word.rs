//! The normalized word used as an index key.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use crate::analysis::normalizer::{fold_char, normalize};

/// A normalized word: alphabetic characters only, lower-cased.
///
/// Equality is exact character-sequence equality. A `Word` can only be
/// produced by normalization, so every value satisfies the normalized form.
/// The empty word is a valid (if degenerate) key.
///
/// # Examples
///
/// ```
/// use wordpos::analysis::Word;
///
/// let word = Word::new("Cat!");
/// assert_eq!(word.as_str(), "cat");
/// assert_eq!(word, Word::new("CAT"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Normalize `raw` into a word.
    pub fn new(raw: &str) -> Self {
        normalize(raw)
    }

    /// Wrap a string that is already in normalized form.
    pub(crate) fn from_normalized(clean: String) -> Self {
        debug_assert!(
            clean
                .chars()
                .all(|c| c.is_alphabetic() && fold_char(c) == c),
            "word is not normalized: {clean:?}"
        );
        Word(clean)
    }

    /// The normalized text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Characters of the word, in order.
    pub fn chars(&self) -> std::str::Chars<'_> {
        self.0.chars()
    }

    /// Number of characters (code points) in the word.
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Word {
    fn from(raw: &str) -> Self {
        Word::new(raw)
    }
}

impl<'de> Deserialize<'de> for Word {
    // Deserialized words go through normalization like any other input.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Word::new(&raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_equality_is_normalized() {
        assert_eq!(Word::new("The"), Word::new("the."));
        assert_ne!(Word::new("the"), Word::new("then"));
    }

    #[test]
    fn test_word_char_len() {
        assert_eq!(Word::new("кот").char_len(), 3);
        assert_eq!(Word::new("кот").as_str().len(), 6);
        assert_eq!(Word::new("").char_len(), 0);
    }

    #[test]
    fn test_word_serde_roundtrip_normalizes() {
        let word: Word = serde_json::from_str("\"Mat!\"").unwrap();
        assert_eq!(word.as_str(), "mat");
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"mat\"");
    }
}
