//! Live-preview REPL.
//!
//! Each plain line is appended to the working text and immediately
//! classified, so the user sees what the parser makes of it while typing.
//! Commands start with `:`.

use std::io::{self, Write};

use wordscene_foundation::{Error, ErrorKind, Result};
use wordscene_parser::{VocabularyLineParser, word_list};
use wordscene_session::{MemoryHistoryStore, Session};

use crate::config::RuntimeConfig;
use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::render::{format_entries, format_explain, format_summary};

/// What the REPL should do after handling a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Keep reading, printing the message if there is one.
    Continue(Option<String>),
    /// Leave the loop.
    Quit,
}

/// Interactive preview over a growing block of text.
pub struct Preview<E: LineEditor = RustylineEditor> {
    editor: E,
    text: String,
    session: Session<MemoryHistoryStore>,
    show_banner: bool,
    prompt: String,
}

impl Preview<RustylineEditor> {
    /// Creates a preview with the rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the line editor cannot be initialized.
    pub fn new(config: &RuntimeConfig) -> Result<Self> {
        Ok(Self::with_editor(RustylineEditor::new()?, config))
    }
}

impl<E: LineEditor> Preview<E> {
    /// Creates a preview over the given editor.
    pub fn with_editor(editor: E, config: &RuntimeConfig) -> Self {
        let store = MemoryHistoryStore::with_capacity(config.session.history_capacity);
        Self {
            editor,
            text: String::new(),
            session: Session::new(store, config.session),
            show_banner: true,
            prompt: "words> ".to_string(),
        }
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Seeds the generator used for random list names.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.session = self.session.with_seed(seed);
        self
    }

    /// Starts from existing text instead of an empty buffer.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// The accumulated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Runs the REPL loop until `:quit` or EOF.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            print_banner();
        }

        loop {
            let line = match self.editor.read_line(&self.prompt)? {
                ReadResult::Line(line) => line,
                ReadResult::Interrupted => {
                    println!();
                    continue;
                }
                ReadResult::Eof => break,
            };
            if line.trim().is_empty() {
                continue;
            }
            self.editor.add_history(&line);

            match self.handle(&line) {
                Ok(Outcome::Continue(Some(message))) => println!("{message}"),
                Ok(Outcome::Continue(None)) => {}
                Ok(Outcome::Quit) => break,
                Err(e) => eprintln!("\x1b[31mError: {e}\x1b[0m"),
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Handles one line of input.
    ///
    /// # Errors
    ///
    /// Returns `NoWords` when `:json` is asked for with nothing recognized,
    /// or a serialization error.
    pub fn handle(&mut self, input: &str) -> Result<Outcome> {
        let line = input.trim();
        if line.is_empty() {
            return Ok(Outcome::Continue(None));
        }

        let Some(command) = line.strip_prefix(':') else {
            return Ok(Outcome::Continue(Some(self.append(line))));
        };
        let (command, argument) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(c, a)| (c, a.trim()));

        let message = match command {
            "show" | "s" => {
                let report = VocabularyLineParser::parse_with_report(&self.text);
                if report.is_empty() {
                    format_summary(&report)
                } else {
                    format!("{}\n{}", format_entries(&report.entries), format_summary(&report))
                }
            }
            "clear" | "c" => {
                self.text.clear();
                "cleared".to_string()
            }
            "json" | "j" => {
                let submission = self.session.prepare(argument, &self.text)?;
                let mut body = submission.request.to_json_pretty()?;
                if !submission.remaining.is_empty() {
                    body.push('\n');
                    body.push_str(&submission.status_message());
                }
                body
            }
            "words" | "w" => word_list(&VocabularyLineParser::parse(&self.text)),
            "explain" | "e" => format_explain(&self.text),
            "help" | "h" | "?" => help_text(),
            "quit" | "q" => return Ok(Outcome::Quit),
            other => return Err(Error::new(ErrorKind::UnknownCommand(other.to_string()))),
        };

        Ok(Outcome::Continue(Some(message)))
    }

    fn append(&mut self, line: &str) -> String {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);

        let class = VocabularyLineParser::classify_line(line);
        let label = class.label();
        let added = class
            .into_entries()
            .iter()
            .map(|e| e.word.clone())
            .collect::<Vec<_>>()
            .join(", ");
        let total = VocabularyLineParser::parse(&self.text).len();

        if added.is_empty() {
            format!("[{label}] ({total} words)")
        } else {
            format!("[{label}] {added} ({total} words)")
        }
    }
}

fn help_text() -> String {
    "\x1b[1mCommands:\x1b[0m
    :show           Table of recognized words
    :words          One word per line
    :explain        How each line was classified
    :json [NAME]    Request body for the first batch
    :clear          Start over
    :help           This message
    :quit           Exit (or Ctrl+D)

Any other line is added to the text."
        .to_string()
}

fn print_banner() {
    println!("\x1b[1;36mwordscene\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
    println!("Paste or type vocabulary lines. :help lists commands, Ctrl+D exits.\n");
    let _ = io::stdout().flush();
}
