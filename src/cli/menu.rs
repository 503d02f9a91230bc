//! The interactive console menu.
//!
//! The menu reads whitespace-separated tokens from any [`BufRead`] and writes
//! prompts and results to any [`Write`], so it can be driven from a terminal
//! or from memory in tests. A choice and its word may share one line
//! (`1 cat`). End of input ends the session like the exit choice does.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use log::debug;

use crate::cli::output::HumanOutput;
use crate::error::Result;
use crate::session::Session;

/// One entry of the numbered menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Search,
    Add,
    Remove,
    List,
    Exit,
}

impl MenuChoice {
    /// Parse a menu number.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::Search),
            "2" => Some(MenuChoice::Add),
            "3" => Some(MenuChoice::Remove),
            "4" => Some(MenuChoice::List),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "\n=== MENU ===\n\
                    1. Search word\n\
                    2. Add word\n\
                    3. Remove word\n\
                    4. Show all words with positions\n\
                    5. Exit\n\
                    Choice: ";

/// Drives a [`Session`] from console input.
pub struct Menu<'a, R, W> {
    session: &'a mut Session,
    input: R,
    output: W,
    pending: VecDeque<String>,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(session: &'a mut Session, input: R, output: W) -> Self {
        Menu {
            session,
            input,
            output,
            pending: VecDeque::new(),
        }
    }

    /// Run until the exit choice or end of input.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;

            let Some(token) = self.next_token()? else {
                writeln!(self.output)?;
                return Ok(());
            };

            match MenuChoice::parse(&token) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Goodbye.")?;
                    return Ok(());
                }
                Some(choice) => {
                    if !self.handle(choice)? {
                        return Ok(());
                    }
                }
                None => writeln!(self.output, "Invalid choice. Try again.")?,
            }
        }
    }

    /// Execute one choice. Returns `false` when input ran out mid-command.
    fn handle(&mut self, choice: MenuChoice) -> Result<bool> {
        debug!("menu choice {choice:?}");
        match choice {
            MenuChoice::Search => {
                let Some(word) = self.prompt_word("Enter a word to search: ")? else {
                    return Ok(false);
                };
                let outcome = self.session.search(&word);
                writeln!(self.output, "{}", outcome.human())?;
            }
            MenuChoice::Add => {
                let Some(word) = self.prompt_word("Enter a word to add: ")? else {
                    return Ok(false);
                };
                let added = self.session.add(&word);
                writeln!(self.output, "{}", added.human())?;
            }
            MenuChoice::Remove => {
                let Some(word) = self.prompt_word("Enter a word to remove: ")? else {
                    return Ok(false);
                };
                let removed = self.session.remove(&word);
                writeln!(self.output, "{}", removed.human())?;
            }
            MenuChoice::List => {
                writeln!(self.output, "\nWords in the index:")?;
                for entry in self.session.list() {
                    writeln!(self.output, "{}", entry.human())?;
                }
            }
            MenuChoice::Exit => {}
        }
        Ok(true)
    }

    /// Prompt for a word and return the next input token.
    fn prompt_word(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let token = self.next_token()?;
        if token.is_none() {
            writeln!(self.output)?;
        }
        Ok(token)
    }

    /// Next whitespace-separated token, reading more lines as needed.
    fn next_token(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            self.pending.extend(line.split_whitespace().map(str::to_string));
        }
        Ok(self.pending.pop_front())
    }
}
