//! Command line argument parsing for the wordpos CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// wordpos - find where the words of a word list occur in a document
#[derive(Parser, Debug, Clone)]
#[command(name = "wordpos")]
#[command(about = "Positional word index over a text document")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct WordposArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Index configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "WORDPOS_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl WordposArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search the positions of one or more words
    Search(SearchArgs),

    /// List every tracked word with its positions
    List(SourceArgs),

    /// Show index statistics
    Stats(SourceArgs),

    /// Run the interactive menu
    Interactive(SourceArgs),
}

/// The document and word list a session is built from
#[derive(Args, Debug, Clone)]
pub struct SourceArgs {
    /// Path to the document (UTF-8 text)
    #[arg(value_name = "TEXT_FILE")]
    pub text_file: PathBuf,

    /// Path to the word list (whitespace-separated, UTF-8)
    #[arg(value_name = "WORD_FILE")]
    pub word_file: PathBuf,
}

/// Arguments for searching
#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable format
    Human,
    /// JSON format
    Json,
}
