//! Command implementations for the wordpos CLI.

use std::io::{self, Write};
use std::time::Instant;

use log::{debug, info};

use crate::cli::args::*;
use crate::cli::menu::Menu;
use crate::cli::output::*;
use crate::error::Result;
use crate::index::IndexConfig;
use crate::session::Session;
use crate::source::{load_text, load_word_list};

/// Execute a CLI command, writing results to stdout.
pub fn execute_command(args: WordposArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_with(&args, &mut out)
}

/// Execute a CLI command, writing results to `out`.
///
/// The interactive command always talks to stdin and stdout.
pub fn execute_command_with<W: Write>(args: &WordposArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Search(search_args) => search_words(search_args, args, out),
        Command::List(source) => list_words(source, args, out),
        Command::Stats(source) => show_stats(source, args, out),
        Command::Interactive(source) => run_interactive(source, args),
    }
}

/// Load the configuration named on the command line, or the defaults.
pub fn load_config(args: &WordposArgs) -> Result<IndexConfig> {
    match &args.config {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            IndexConfig::from_file(path)
        }
        None => Ok(IndexConfig::default()),
    }
}

/// Build a session from the document and word list files.
pub fn load_session(source: &SourceArgs, args: &WordposArgs) -> Result<Session> {
    let config = load_config(args)?;
    let start_time = Instant::now();

    let text = load_text(&source.text_file)?;
    let words = load_word_list(&source.word_file)?;
    let session = Session::with_config(text, words, config)?;

    info!(
        "Session ready in {} ms ({} words tracked)",
        start_time.elapsed().as_millis(),
        session.vocabulary().len()
    );
    Ok(session)
}

/// Search one or more words.
fn search_words<W: Write>(search_args: &SearchArgs, args: &WordposArgs, out: &mut W) -> Result<()> {
    let session = load_session(&search_args.source, args)?;
    let results = SearchResults {
        results: search_args
            .words
            .iter()
            .map(|raw| session.search(raw))
            .collect(),
    };

    output_result(out, "Search completed", &results, args)
}

/// List every tracked word with its positions.
fn list_words<W: Write>(source: &SourceArgs, args: &WordposArgs, out: &mut W) -> Result<()> {
    let session = load_session(source, args)?;
    let results = ListResults {
        words: session.list(),
    };

    output_result(out, "Words in the index", &results, args)
}

/// Show index statistics.
fn show_stats<W: Write>(source: &SourceArgs, args: &WordposArgs, out: &mut W) -> Result<()> {
    let session = load_session(source, args)?;
    let results = StatsResults {
        text_chars: session.text().len(),
        vocabulary_words: session.vocabulary().len(),
        index: session.stats(),
    };

    output_result(out, "Index statistics", &results, args)
}

/// Run the interactive menu on stdin and stdout.
fn run_interactive(source: &SourceArgs, args: &WordposArgs) -> Result<()> {
    let mut session = load_session(source, args)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    Menu::new(&mut session, stdin.lock(), stdout.lock()).run()
}
