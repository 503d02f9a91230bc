//! The immutable document snapshot searched by the matcher.
//!
//! Text is decoded once into Unicode code points. All offsets produced by the
//! crate are code point offsets into this snapshot.

use std::fmt;

use crate::analysis::normalizer::fold_char;

/// A decoded, immutable document together with its case-folded form.
///
/// # Examples
///
/// ```
/// use wordpos::text::Text;
///
/// let text = Text::new("The Cat");
/// assert_eq!(text.len(), 7);
/// assert_eq!(text.folded()[4], 'c');
/// assert!(text.matches_at(4, "CAT"));
/// ```
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Text {
    chars: Vec<char>,
    folded: Vec<char>,
}

impl Text {
    /// Decode `source` into a text snapshot.
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        let folded = chars.iter().copied().map(fold_char).collect();
        Text { chars, folded }
    }

    /// Build a text from lines, following each line with a single space.
    ///
    /// This is how documents are assembled from files, so line breaks never
    /// glue the last word of one line to the first word of the next.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut source = String::new();
        for line in lines {
            source.push_str(line.as_ref());
            source.push(' ');
        }
        Text::new(&source)
    }

    /// Number of code points.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// The original code points.
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// The code points case-folded one-to-one with [`fold_char`].
    pub fn folded(&self) -> &[char] {
        &self.folded
    }

    /// Whether `pattern` occurs at `offset`, compared case-insensitively.
    pub fn matches_at(&self, offset: usize, pattern: &str) -> bool {
        let mut folded = self.folded.get(offset..).unwrap_or(&[]).iter();
        pattern
            .chars()
            .all(|p| folded.next().is_some_and(|&t| t == fold_char(p)))
    }
}

impl From<&str> for Text {
    fn from(source: &str) -> Self {
        Text::new(source)
    }
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text").field("len", &self.len()).finish()
    }
}

impl fmt::Display for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_counts_code_points() {
        let text = Text::new("кот и cat");
        assert_eq!(text.len(), 9);
        assert_eq!(text.chars()[6], 'c');
        assert!(text.matches_at(6, "cat"));
    }

    #[test]
    fn test_from_lines_appends_space() {
        let text = Text::from_lines(["first line", "second"]);
        assert_eq!(text.to_string(), "first line second ");
        assert!(Text::from_lines(Vec::<String>::new()).is_empty());
    }

    #[test]
    fn test_matches_at() {
        let text = Text::new("The cat sat on the mat");
        assert!(text.matches_at(0, "the"));
        assert!(text.matches_at(15, "THE"));
        assert!(!text.matches_at(1, "the"));
        assert!(!text.matches_at(20, "mat"));
        assert!(text.matches_at(22, ""));
        assert!(!text.matches_at(40, "x"));
    }
}
