//! Pattern matching over document text.
//!
//! A matcher is compiled once for a pattern and then reports every offset at
//! which the pattern occurs in a [`Text`], case-insensitively.
//!
//! # Examples
//!
//! ```
//! use wordpos::matcher::{PatternMatcher, boyer_moore::BoyerMoore};
//! use wordpos::text::Text;
//!
//! let text = Text::new("The cat sat on the mat");
//! let matcher = BoyerMoore::new("the");
//! assert_eq!(matcher.find_all(&text), vec![0, 15]);
//! ```

pub mod boyer_moore;

use crate::index::PositionList;
use crate::text::Text;

/// Trait for matchers that locate a fixed pattern in text.
pub trait PatternMatcher {
    /// All starting offsets of the pattern in `text`, in ascending order.
    fn find_all(&self, text: &Text) -> PositionList;

    /// Length of the compiled pattern in code points.
    fn pattern_len(&self) -> usize;

    /// Get the name of this matcher (for debugging and logging).
    fn name(&self) -> &'static str;
}

/// Find every case-insensitive occurrence of `pattern` in `text`.
///
/// Convenience wrapper that decodes `text` and compiles a [`BoyerMoore`]
/// matcher for a single search.
///
/// [`BoyerMoore`]: boyer_moore::BoyerMoore
pub fn find_all(text: &str, pattern: &str) -> PositionList {
    boyer_moore::BoyerMoore::new(pattern).find_all(&Text::new(text))
}
