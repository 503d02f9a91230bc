//! Output formatting for CLI commands.

use std::io::Write;

use serde::Serialize;

use crate::cli::args::{OutputFormat, WordposArgs};
use crate::error::Result;
use crate::index::IndexStats;
use crate::session::{Added, ListEntry, Removed, SearchOutcome};

/// Results that have a human-readable rendering.
pub trait HumanOutput {
    fn human(&self) -> String;
}

/// Result structure for the search command.
#[derive(Debug, Serialize)]
pub struct SearchResults {
    pub results: Vec<SearchOutcome>,
}

/// Result structure for the list command.
#[derive(Debug, Serialize)]
pub struct ListResults {
    pub words: Vec<ListEntry>,
}

/// Result structure for the stats command.
#[derive(Debug, Serialize)]
pub struct StatsResults {
    pub text_chars: usize,
    pub vocabulary_words: usize,
    #[serde(flatten)]
    pub index: IndexStats,
}

/// Space-separated positions, as printed after a word.
pub fn format_positions(positions: &[usize]) -> String {
    positions
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

impl HumanOutput for SearchOutcome {
    fn human(&self) -> String {
        match self {
            SearchOutcome::Found { positions, .. } => {
                format!("Positions: {}", format_positions(positions))
            }
            SearchOutcome::NotFound { .. } => "Not found".to_string(),
        }
    }
}

impl HumanOutput for SearchResults {
    fn human(&self) -> String {
        self.results
            .iter()
            .map(|outcome| format!("{}: {}", outcome.word(), outcome.human()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for ListEntry {
    fn human(&self) -> String {
        if self.positions.is_empty() {
            format!("{}:", self.word)
        } else {
            format!("{}: {}", self.word, format_positions(&self.positions))
        }
    }
}

impl HumanOutput for ListResults {
    fn human(&self) -> String {
        self.words
            .iter()
            .map(HumanOutput::human)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl HumanOutput for StatsResults {
    fn human(&self) -> String {
        format!(
            "Text length:      {} chars\n\
             Vocabulary:       {} words\n\
             Index entries:    {}\n\
             Buckets:          {} ({} occupied)\n\
             Longest chain:    {}",
            self.text_chars,
            self.vocabulary_words,
            self.index.entries,
            self.index.buckets,
            self.index.occupied_buckets,
            self.index.longest_chain
        )
    }
}

impl HumanOutput for Added {
    fn human(&self) -> String {
        "Word added.".to_string()
    }
}

impl HumanOutput for Removed {
    fn human(&self) -> String {
        "Word removed.".to_string()
    }
}

/// Write a result in the format selected on the command line.
pub fn output_result<W, T>(out: &mut W, message: &str, result: &T, args: &WordposArgs) -> Result<()>
where
    W: Write,
    T: Serialize + HumanOutput,
{
    match args.output_format {
        OutputFormat::Human => output_human(out, message, result, args),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in human-readable format.
fn output_human<W: Write, T: HumanOutput>(
    out: &mut W,
    message: &str,
    result: &T,
    args: &WordposArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }

    let rendered = result.human();
    if !rendered.is_empty() {
        writeln!(out, "{rendered}")?;
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &WordposArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;
    use crate::session::Session;

    fn args(extra: &[&str]) -> WordposArgs {
        let mut argv = vec!["wordpos"];
        argv.extend_from_slice(extra);
        argv.extend_from_slice(&["list", "t", "w"]);
        WordposArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_format_positions() {
        assert_eq!(format_positions(&[0, 15]), "0 15");
        assert_eq!(format_positions(&[]), "");
    }

    #[test]
    fn test_human_list() {
        let session = Session::new("The cat sat on the mat", ["cat", "dog"]);
        let results = ListResults {
            words: session.list(),
        };

        let mut out = Vec::new();
        output_result(&mut out, "Listed", &results, &args(&[])).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "cat: 4\ndog:\n");
    }

    #[test]
    fn test_human_search() {
        let session = Session::new("The cat sat on the mat", ["cat"]);
        let results = SearchResults {
            results: vec![session.search("cat"), session.search("dog")],
        };
        assert_eq!(results.human(), "cat: Positions: 4\ndog: Not found");
    }

    #[test]
    fn test_json_output() {
        let session = Session::new("The cat sat on the mat", ["cat"]);
        let results = ListResults {
            words: session.list(),
        };

        let mut out = Vec::new();
        output_result(&mut out, "Listed", &results, &args(&["-f", "json"])).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["words"][0]["word"], "cat");
        assert_eq!(value["words"][0]["positions"][0], 4);
    }

    #[test]
    fn test_stats_json_is_flat() {
        let session = Session::new("cat", ["cat"]);
        let stats = StatsResults {
            text_chars: session.text().len(),
            vocabulary_words: session.vocabulary().len(),
            index: session.stats(),
        };
        let value = serde_json::to_value(&stats).unwrap();
        assert_eq!(value["entries"], 1);
        assert_eq!(value["buckets"], 101);
        assert_eq!(value["text_chars"], 3);
    }
}
