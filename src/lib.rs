//! # wordpos
//!
//! A positional word index over a single text document.
//!
//! ## Features
//!
//! - Case-insensitive Boyer-Moore search over Unicode text
//! - Chained hash table from normalized words to their positions
//! - Search, add, remove and list commands over a session
//! - Command line interface with an interactive menu
//!
//! ## Example
//!
//! ```
//! use wordpos::session::Session;
//!
//! let mut session = Session::new("The cat sat on the mat", ["cat", "mat", "dog"]);
//! assert_eq!(session.search("cat").positions(), &[4]);
//!
//! session.remove("cat");
//! assert!(!session.search("cat").is_found());
//! ```

pub mod analysis;
pub mod cli;
pub mod error;
pub mod index;
pub mod matcher;
pub mod session;
pub mod source;
pub mod text;

pub mod prelude {
    pub use crate::analysis::{Word, normalize};
    pub use crate::error::{Result, WordposError};
    pub use crate::index::{IndexBuilder, IndexConfig, PositionIndex, PositionList, Vocabulary};
    pub use crate::matcher::{PatternMatcher, boyer_moore::BoyerMoore, find_all};
    pub use crate::session::{SearchOutcome, Session, SharedSession};
    pub use crate::text::Text;
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
