//! The ordered list of words tracked by a session.

use serde::{Deserialize, Serialize};

use crate::analysis::Word;

/// Words in the order they were added. Duplicates are allowed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vocabulary {
    words: Vec<Word>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a word at the end.
    pub fn push(&mut self, word: Word) {
        self.words.push(word);
    }

    /// Remove every occurrence of `word`, returning how many were removed.
    pub fn remove_all(&mut self, word: &Word) -> usize {
        let before = self.words.len();
        self.words.retain(|w| w != word);
        before - self.words.len()
    }

    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        Vocabulary {
            words: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
