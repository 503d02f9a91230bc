//! Loading documents and word lists from files.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind, Read};
use std::path::Path;

use log::info;

use crate::analysis::word_list::split_words;
use crate::error::{Result, WordposError};
use crate::text::Text;

/// Read a UTF-8 document, joining its lines with single spaces.
///
/// Each line is followed by one space, so the text always ends with a space
/// when the file is not empty.
pub fn load_text<P: AsRef<Path>>(path: P) -> Result<Text> {
    let path = path.as_ref();
    let file = open(path)?;
    let text = read_text(BufReader::new(file)).map_err(|e| decode_error(path, e))?;
    info!("Loaded {} chars from {}", text.len(), path.display());
    Ok(text)
}

/// Read a document from any buffered reader.
pub fn read_text<R: BufRead>(reader: R) -> Result<Text> {
    let lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;
    Ok(Text::from_lines(lines))
}

/// Read a UTF-8 word list and split it into raw tokens.
pub fn load_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let mut content = String::new();
    open(path)?
        .read_to_string(&mut content)
        .map_err(|e| decode_error(path, e.into()))?;

    let words = split_words(&content);
    info!("Loaded {} word(s) from {}", words.len(), path.display());
    Ok(words)
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => WordposError::load(format!("{} not found", path.display())),
        _ => WordposError::load(format!("cannot open {}: {e}", path.display())),
    })
}

fn decode_error(path: &Path, error: WordposError) -> WordposError {
    match error {
        WordposError::Io(e) if e.kind() == ErrorKind::InvalidData => {
            WordposError::load(format!("{} is not valid UTF-8", path.display()))
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_text_joins_lines() {
        let text = read_text(Cursor::new("The cat\nsat on\r\nthe mat")).unwrap();
        assert_eq!(text.to_string(), "The cat sat on the mat ");
    }

    #[test]
    fn test_load_files() {
        let dir = tempfile::tempdir().unwrap();
        let text_path = dir.path().join("text.txt");
        let words_path = dir.path().join("words.txt");
        fs::write(&text_path, "Кот сидит\nна ковре\n").unwrap();
        fs::write(&words_path, "кот\nковре  на\n").unwrap();

        let text = load_text(&text_path).unwrap();
        assert_eq!(text.to_string(), "Кот сидит на ковре ");

        let words = load_word_list(&words_path).unwrap();
        assert_eq!(words, vec!["кот", "ковре", "на"]);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_text(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, WordposError::Source(_)));
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.txt");
        fs::write(&path, [0x66, 0x6f, 0xff, 0xfe]).unwrap();

        assert!(load_text(&path).unwrap_err().to_string().contains("UTF-8"));
        assert!(load_word_list(&path).unwrap_err().to_string().contains("UTF-8"));
    }
}
