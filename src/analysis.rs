//! Text analysis for wordpos.
//!
//! This module turns raw user input into index keys: word lists are split into
//! raw tokens, and each token is normalized into a [`Word`] (alphabetic
//! characters only, lower-cased).

pub mod normalizer;
pub mod word;
pub mod word_list;

pub use normalizer::{fold_char, normalize};
pub use word::Word;
