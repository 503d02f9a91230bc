//! Word list tokenization.
//!
//! A word list is any text whose whitespace-delimited tokens are the raw words
//! to index. Tokens are returned verbatim; normalization happens later.

/// Split a word list into raw tokens on Unicode whitespace.
///
/// # Examples
///
/// ```
/// use wordpos::analysis::word_list::split_words;
///
/// assert_eq!(split_words("cat\nmat  dog\t"), vec!["cat", "mat", "dog"]);
/// ```
pub fn split_words(list: &str) -> Vec<String> {
    list.split_whitespace().map(str::to_string).collect()
}
