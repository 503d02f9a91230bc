//! Chained hash table mapping words to their positions.
//!
//! Each bucket is an insertion-ordered list of entries. The table keeps the
//! following contract:
//!
//! - `insert` always appends, so the same word may be stored several times
//! - `search` returns the positions of the first matching entry in its bucket
//! - `remove` deletes every entry for the word at once
//!
//! # Examples
//!
//! ```
//! use wordpos::analysis::Word;
//! use wordpos::index::PositionIndex;
//!
//! let mut index = PositionIndex::new();
//! let cat = Word::new("cat");
//! index.insert(cat.clone(), vec![4]);
//! index.insert(cat.clone(), vec![99]);
//!
//! assert_eq!(index.search(&cat), &[4]);
//! assert_eq!(index.remove(&cat), 2);
//! assert!(index.search(&cat).is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::analysis::Word;
use crate::analysis::normalizer::fold_char;
use crate::index::PositionList;
use crate::index::config::{DEFAULT_BUCKET_COUNT, DEFAULT_HASH_BASE, IndexConfig};

/// One stored (word, positions) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub word: Word,
    pub positions: PositionList,
}

impl IndexEntry {
    pub fn new(word: Word, positions: PositionList) -> Self {
        IndexEntry { word, positions }
    }
}

/// Polynomial rolling hash reduced to a bucket number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordHasher {
    base: u64,
    bucket_count: usize,
}

impl WordHasher {
    pub fn new(base: u64, bucket_count: usize) -> Self {
        WordHasher {
            base,
            bucket_count: bucket_count.max(1),
        }
    }

    /// `h = (h * base + fold(c)) mod bucket_count` over the word's characters.
    pub fn bucket_of(&self, word: &Word) -> usize {
        let modulus = self.bucket_count as u128;
        let base = self.base as u128;
        let hash = word.chars().fold(0u128, |h, c| {
            (h * base + u128::from(u32::from(fold_char(c)))) % modulus
        });
        hash as usize
    }
}

/// Occupancy figures for a [`PositionIndex`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexStats {
    /// Total number of stored entries, duplicates included.
    pub entries: usize,
    /// Number of buckets in the table.
    pub buckets: usize,
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Length of the longest bucket chain.
    pub longest_chain: usize,
}

/// Hash table from [`Word`] to [`PositionList`].
#[derive(Debug, Clone)]
pub struct PositionIndex {
    buckets: Vec<Vec<IndexEntry>>,
    hasher: WordHasher,
    len: usize,
}

impl PositionIndex {
    /// Create an empty index with the default bucket count and hash base.
    pub fn new() -> Self {
        Self::with_hasher(WordHasher::new(DEFAULT_HASH_BASE, DEFAULT_BUCKET_COUNT))
    }

    /// Create an empty index sized by `config`.
    pub fn with_config(config: &IndexConfig) -> Self {
        Self::with_hasher(WordHasher::new(config.hash_base, config.bucket_count))
    }

    fn with_hasher(hasher: WordHasher) -> Self {
        PositionIndex {
            buckets: vec![Vec::new(); hasher.bucket_count],
            hasher,
            len: 0,
        }
    }

    /// Append an entry for `word`. Existing entries for the word are kept.
    pub fn insert(&mut self, word: Word, positions: PositionList) {
        let bucket = self.hasher.bucket_of(&word);
        self.buckets[bucket].push(IndexEntry::new(word, positions));
        self.len += 1;
    }

    /// Remove every entry for `word`, returning how many were removed.
    pub fn remove(&mut self, word: &Word) -> usize {
        let bucket = &mut self.buckets[self.hasher.bucket_of(word)];
        let before = bucket.len();
        bucket.retain(|entry| &entry.word != word);
        let removed = before - bucket.len();
        self.len -= removed;
        removed
    }

    /// Positions of the first entry for `word`, or an empty slice.
    ///
    /// A word that was never indexed and a word indexed with no occurrences
    /// both produce an empty slice.
    pub fn search(&self, word: &Word) -> &[usize] {
        self.first_entry(word)
            .map(|entry| entry.positions.as_slice())
            .unwrap_or(&[])
    }

    /// The first entry for `word`, in insertion order.
    pub fn first_entry(&self, word: &Word) -> Option<&IndexEntry> {
        self.buckets[self.hasher.bucket_of(word)]
            .iter()
            .find(|entry| &entry.word == word)
    }

    /// Whether at least one entry exists for `word`.
    pub fn contains(&self, word: &Word) -> bool {
        self.first_entry(word).is_some()
    }

    /// Total number of entries, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bucket number `word` hashes to.
    pub fn bucket_of(&self, word: &Word) -> usize {
        self.hasher.bucket_of(word)
    }

    /// All entries, bucket by bucket, each bucket in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &IndexEntry> {
        self.buckets.iter().flatten()
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            entries: self.len,
            buckets: self.buckets.len(),
            occupied_buckets: self.buckets.iter().filter(|b| !b.is_empty()).count(),
            longest_chain: self.buckets.iter().map(Vec::len).max().unwrap_or(0),
        }
    }
}

impl Default for PositionIndex {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(raw: &str) -> Word {
        Word::new(raw)
    }

    #[test]
    fn test_insert_and_search() {
        let mut index = PositionIndex::new();
        index.insert(word("cat"), vec![4]);
        index.insert(word("mat"), vec![19]);

        assert_eq!(index.search(&word("cat")), &[4]);
        assert_eq!(index.search(&word("mat")), &[19]);
        assert!(index.search(&word("dog")).is_empty());
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_duplicate_insert_first_wins() {
        let mut index = PositionIndex::new();
        index.insert(word("the"), vec![0, 15]);
        index.insert(word("the"), vec![7]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.search(&word("the")), &[0, 15]);
    }

    #[test]
    fn test_remove_clears_all_copies() {
        let mut index = PositionIndex::new();
        index.insert(word("the"), vec![0]);
        index.insert(word("cat"), vec![4]);
        index.insert(word("the"), vec![15]);

        assert_eq!(index.remove(&word("the")), 2);
        assert!(index.search(&word("the")).is_empty());
        assert!(!index.contains(&word("the")));
        assert_eq!(index.search(&word("cat")), &[4]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_remove_missing_is_noop() {
        let mut index = PositionIndex::new();
        assert_eq!(index.remove(&word("ghost")), 0);
        assert!(index.is_empty());
    }

    #[test]
    fn test_empty_positions_conflated_with_missing() {
        let mut index = PositionIndex::new();
        index.insert(word("dog"), vec![]);

        assert!(index.search(&word("dog")).is_empty());
        assert!(index.search(&word("cow")).is_empty());
        // Entry-level lookup still tells them apart.
        assert!(index.contains(&word("dog")));
        assert!(!index.contains(&word("cow")));
    }

    #[test]
    fn test_colliding_words_share_a_bucket() {
        // A single bucket forces every word into the same chain.
        let config = IndexConfig::new().with_bucket_count(1);
        let mut index = PositionIndex::with_config(&config);
        index.insert(word("cat"), vec![1]);
        index.insert(word("mat"), vec![2]);
        index.insert(word("cat"), vec![3]);

        assert_eq!(index.search(&word("mat")), &[2]);
        assert_eq!(index.remove(&word("cat")), 2);
        assert_eq!(index.search(&word("mat")), &[2]);
        assert_eq!(index.stats().longest_chain, 1);
    }

    #[test]
    fn test_hash_is_deterministic_and_in_range() {
        let hasher = WordHasher::new(33, 101);
        for raw in ["the", "cat", "привет", "", "zzzzzzzzzzzzzzzzzzzzzzzzzzzzzzzz"] {
            let bucket = hasher.bucket_of(&word(raw));
            assert!(bucket < 101);
            assert_eq!(bucket, hasher.bucket_of(&word(raw)));
        }
        assert_eq!(hasher.bucket_of(&word("")), 0);
        // 'a' = 97
        assert_eq!(hasher.bucket_of(&word("a")), 97);
        // (97 * 33 + 98) % 101 = 3299 % 101 = 67
        assert_eq!(hasher.bucket_of(&word("ab")), 67);
    }

    #[test]
    fn test_stats() {
        let mut index = PositionIndex::new();
        assert_eq!(index.stats().occupied_buckets, 0);
        assert_eq!(index.stats().longest_chain, 0);

        index.insert(word("cat"), vec![4]);
        index.insert(word("cat"), vec![4]);
        let stats = index.stats();
        assert_eq!(stats.entries, 2);
        assert_eq!(stats.buckets, 101);
        assert_eq!(stats.occupied_buckets, 1);
        assert_eq!(stats.longest_chain, 2);
        assert_eq!(index.entries().count(), 2);
    }
}
