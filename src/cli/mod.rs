//! Command Line Interface for wordpos.

pub mod args;
pub mod commands;
pub mod menu;
pub mod output;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
