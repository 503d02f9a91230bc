//! Word normalization.
//!
//! Normalization keeps only alphabetic characters and lower-cases each of them.
//! Digits, punctuation and whitespace are dropped, not replaced.
//!
//! # Examples
//!
//! ```
//! use wordpos::analysis::normalize;
//!
//! assert_eq!(normalize("Hello,").as_str(), "hello");
//! assert_eq!(normalize("R2-D2").as_str(), "rd");
//! assert!(normalize("42!").is_empty());
//! ```

use crate::analysis::word::Word;

/// Lower-case a single character without changing the character count.
///
/// Characters whose lower-case form is more than one code point (for example
/// `'İ'`) are returned unchanged, so folded text stays aligned with the
/// original offset-for-offset.
#[inline]
pub fn fold_char(c: char) -> char {
    if c.is_ascii() {
        return c.to_ascii_lowercase();
    }

    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Normalize a raw token into an index key.
pub fn normalize(raw: &str) -> Word {
    let clean: String = raw
        .chars()
        .filter(|c| c.is_alphabetic())
        .map(fold_char)
        .collect();

    Word::from_normalized(clean)
}
