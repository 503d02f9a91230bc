//! Case-insensitive Boyer-Moore search using the bad-character rule.
//!
//! The pattern is compared against each aligned text window from its last
//! character backward. On a mismatch the window is shifted so that the
//! mismatched text character lines up with its rightmost occurrence in the
//! pattern (at least one position). After a full match the character just past
//! the window drives the shift the same way, which lets consecutive matches be
//! enumerated in a single left-to-right pass.
//!
//! Comparison is done on case-folded code points, so both the pattern and the
//! text are folded with [`fold_char`] before matching.

use ahash::AHashMap;

use crate::analysis::normalizer::fold_char;
use crate::index::PositionList;
use crate::matcher::PatternMatcher;
use crate::text::Text;

/// Rightmost index of each character in a folded pattern.
///
/// Covers the whole Unicode scalar range: characters absent from the pattern
/// report `-1`. Stored sparsely, since a pattern touches only a handful of
/// code points.
#[derive(Clone, Debug, Default)]
pub struct BadCharTable {
    rightmost: AHashMap<char, isize>,
}

impl BadCharTable {
    /// Build the table for an already folded pattern.
    pub fn new(pattern: &[char]) -> Self {
        let mut rightmost = AHashMap::with_capacity(pattern.len());
        for (i, &c) in pattern.iter().enumerate() {
            rightmost.insert(c, i as isize);
        }
        BadCharTable { rightmost }
    }

    /// Rightmost index of `c` in the pattern, or `-1`.
    #[inline]
    pub fn get(&self, c: char) -> isize {
        self.rightmost.get(&c).copied().unwrap_or(-1)
    }

    /// Number of distinct characters in the pattern.
    pub fn len(&self) -> usize {
        self.rightmost.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rightmost.is_empty()
    }
}

/// A compiled Boyer-Moore matcher for one pattern.
///
/// # Examples
///
/// ```
/// use wordpos::matcher::{PatternMatcher, boyer_moore::BoyerMoore};
/// use wordpos::text::Text;
///
/// let matcher = BoyerMoore::new("MAT");
/// assert_eq!(matcher.find_all(&Text::new("mat, Mat and MAT")), vec![0, 5, 13]);
/// assert!(BoyerMoore::new("").find_all(&Text::new("anything")).is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct BoyerMoore {
    pattern: Vec<char>,
    bad_char: BadCharTable,
}

impl BoyerMoore {
    /// Compile a matcher for `pattern`. The pattern is case-folded.
    pub fn new(pattern: &str) -> Self {
        let pattern: Vec<char> = pattern.chars().map(fold_char).collect();
        let bad_char = BadCharTable::new(&pattern);
        BoyerMoore { pattern, bad_char }
    }

    /// The folded pattern.
    pub fn pattern(&self) -> &[char] {
        &self.pattern
    }

    pub fn bad_char_table(&self) -> &BadCharTable {
        &self.bad_char
    }

    /// Search a slice of already folded characters.
    pub fn find_all_folded(&self, text: &[char]) -> PositionList {
        let mut positions = PositionList::new();
        let n = text.len();
        let m = self.pattern.len();
        if m == 0 || n < m {
            return positions;
        }

        let m_signed = m as isize;
        let mut shift = 0usize;
        while shift <= n - m {
            let mut j = m_signed - 1;
            while j >= 0 && text[shift + j as usize] == self.pattern[j as usize] {
                j -= 1;
            }

            if j < 0 {
                positions.push(shift);
                shift += if shift + m < n {
                    // The table never exceeds m - 1, so this is at least 1.
                    (m_signed - self.bad_char.get(text[shift + m])) as usize
                } else {
                    1
                };
            } else {
                let bad = self.bad_char.get(text[shift + j as usize]);
                shift += (j - bad).max(1) as usize;
            }
        }

        positions
    }
}

impl PatternMatcher for BoyerMoore {
    fn find_all(&self, text: &Text) -> PositionList {
        let positions = self.find_all_folded(text.folded());
        log::trace!(
            "boyer-moore: {} occurrence(s) of {:?} in {} chars",
            positions.len(),
            self.pattern.iter().collect::<String>(),
            text.len()
        );
        positions
    }

    fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    fn name(&self) -> &'static str {
        "boyer_moore"
    }
}
