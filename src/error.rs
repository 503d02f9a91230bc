//! Error types for the wordpos library.
//!
//! The indexing core itself never fails: normalization, pattern matching and
//! every index operation are total over their inputs, and a word that is not
//! indexed simply yields an empty position list. The errors below belong to the
//! layers around the core (loading documents and word lists, reading
//! configuration).
//!
//! # Examples
//!
//! ```
//! use wordpos::error::{Result, WordposError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(WordposError::invalid_config("bucket_count must be positive"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for wordpos operations.
#[derive(Error, Debug)]
pub enum WordposError {
    /// I/O errors (reading documents, word lists, console streams)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration errors (invalid values, unreadable config files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Source loading errors (missing or undecodable input files)
    #[error("Source error: {0}")]
    Source(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with WordposError.
pub type Result<T> = std::result::Result<T, WordposError>;

impl WordposError {
    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        WordposError::Config(msg.into())
    }

    /// Create a new source loading error.
    pub fn load<S: Into<String>>(msg: S) -> Self {
        WordposError::Source(msg.into())
    }
}
