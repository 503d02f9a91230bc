//! A search session over one document.
//!
//! A [`Session`] owns the immutable text together with the index and the
//! vocabulary built from it, and implements the four user commands:
//!
//! - search: look a word up; an empty result is reported as not found
//! - add: index a word against the stored text, even if already present
//! - remove: drop every index entry and vocabulary occurrence of a word
//! - list: every vocabulary word with its first indexed position list
//!
//! # Examples
//!
//! ```
//! use wordpos::session::{SearchOutcome, Session};
//!
//! let mut session = Session::new("The cat sat on the mat", ["cat", "mat", "dog"]);
//!
//! assert_eq!(session.search("cat").positions(), &[4]);
//! assert!(matches!(session.search("dog"), SearchOutcome::NotFound { .. }));
//!
//! session.add("The");
//! assert_eq!(session.search("the").positions(), &[0, 15]);
//! ```

use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use serde::Serialize;

use crate::analysis::{Word, normalize};
use crate::error::Result;
use crate::index::PositionList;
use crate::index::builder::IndexBuilder;
use crate::index::config::IndexConfig;
use crate::index::hash_table::{IndexStats, PositionIndex};
use crate::index::vocabulary::Vocabulary;
use crate::text::Text;

/// Result of a search command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchOutcome {
    /// The word has at least one indexed position.
    Found { word: Word, positions: PositionList },
    /// No positions are indexed for the word.
    NotFound { word: Word },
}

impl SearchOutcome {
    /// The normalized word that was searched.
    pub fn word(&self) -> &Word {
        match self {
            SearchOutcome::Found { word, .. } | SearchOutcome::NotFound { word } => word,
        }
    }

    /// The positions found, empty when not found.
    pub fn positions(&self) -> &[usize] {
        match self {
            SearchOutcome::Found { positions, .. } => positions,
            SearchOutcome::NotFound { .. } => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found { .. })
    }
}

/// Confirmation of an add command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Added {
    pub word: Word,
    pub positions: PositionList,
}

/// Confirmation of a remove command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Removed {
    pub word: Word,
    /// Index entries deleted.
    pub entries: usize,
    /// Vocabulary occurrences deleted.
    pub occurrences: usize,
}

/// One line of the list command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub word: Word,
    pub positions: PositionList,
}

/// Text, index and vocabulary for one document.
#[derive(Debug, Clone)]
pub struct Session {
    text: Text,
    index: PositionIndex,
    vocabulary: Vocabulary,
}

impl Session {
    /// Build a session with the default configuration.
    pub fn new<I, S>(text: &str, raw_words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::from_text(Text::new(text), raw_words, IndexConfig::default())
    }

    /// Build a session after validating `config`.
    pub fn with_config<I, S>(text: Text, raw_words: I, config: IndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        Ok(Self::from_text(text, raw_words, config))
    }

    fn from_text<I, S>(text: Text, raw_words: I, config: IndexConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (index, vocabulary) = IndexBuilder::with_config(config).build(&text, raw_words);
        Session {
            text,
            index,
            vocabulary,
        }
    }

    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn index(&self) -> &PositionIndex {
        &self.index
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn stats(&self) -> IndexStats {
        self.index.stats()
    }

    /// Look up the positions of `raw` after normalizing it.
    pub fn search(&self, raw: &str) -> SearchOutcome {
        let word = normalize(raw);
        let positions = self.index.search(&word);
        if positions.is_empty() {
            SearchOutcome::NotFound { word }
        } else {
            SearchOutcome::Found {
                positions: positions.to_vec(),
                word,
            }
        }
    }

    /// Index `raw` against the stored text and track it in the vocabulary.
    pub fn add(&mut self, raw: &str) -> Added {
        let (word, positions) = IndexBuilder::locate(&self.text, raw);
        debug!("add '{}' with {} position(s)", word, positions.len());

        self.index.insert(word.clone(), positions.clone());
        self.vocabulary.push(word.clone());
        Added { word, positions }
    }

    /// Remove every entry and vocabulary occurrence of `raw`.
    pub fn remove(&mut self, raw: &str) -> Removed {
        let word = normalize(raw);
        let entries = self.index.remove(&word);
        let occurrences = self.vocabulary.remove_all(&word);
        debug!(
            "remove '{}': {} entries, {} vocabulary occurrence(s)",
            word, entries, occurrences
        );

        Removed {
            word,
            entries,
            occurrences,
        }
    }

    /// Every vocabulary word, in order, with its first indexed positions.
    pub fn list(&self) -> Vec<ListEntry> {
        self.vocabulary
            .iter()
            .map(|word| ListEntry {
                word: word.clone(),
                positions: self.index.search(word).to_vec(),
            })
            .collect()
    }
}

/// A session shared between several callers.
///
/// The whole session sits behind one lock, since the hash table does not
/// support concurrent bucket mutation.
#[derive(Debug, Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        SharedSession {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn search(&self, raw: &str) -> SearchOutcome {
        self.inner.lock().search(raw)
    }

    pub fn add(&self, raw: &str) -> Added {
        self.inner.lock().add(raw)
    }

    pub fn remove(&self, raw: &str) -> Removed {
        self.inner.lock().remove(raw)
    }

    pub fn list(&self) -> Vec<ListEntry> {
        self.inner.lock().list()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with_session<T>(&self, f: impl FnOnce(&mut Session) -> T) -> T {
        f(&mut self.inner.lock())
    }
}
