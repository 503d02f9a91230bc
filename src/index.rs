//! The positional word index.
//!
//! - [`hash_table::PositionIndex`] - chained hash table from [`Word`] to positions
//! - [`vocabulary::Vocabulary`] - ordered list of tracked words
//! - [`builder::IndexBuilder`] - builds both from a text and a raw word list
//! - [`config::IndexConfig`] - table sizing and indexing policy
//!
//! [`Word`]: crate::analysis::Word

pub mod builder;
pub mod config;
pub mod hash_table;
pub mod vocabulary;

pub use builder::IndexBuilder;
pub use config::{EmptyMatchPolicy, IndexConfig};
pub use hash_table::{IndexEntry, IndexStats, PositionIndex};
pub use vocabulary::Vocabulary;

/// Ascending code point offsets at which a word occurs in the text.
pub type PositionList = Vec<usize>;
