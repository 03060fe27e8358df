//! Main parser pipeline.
//!
//! Classifies each line independently, collects the recognized entries in
//! input order, and drops case-insensitive duplicates (first occurrence
//! wins). Parsing never fails: text that matches no rule simply yields
//! nothing, which callers read as "nothing recognized yet".

use std::collections::HashSet;

use tracing::{debug, trace};
use wordscene_foundation::VocabularyEntry;

use crate::lines::{is_noise, split_lines};
use crate::rules;

/// How a single line was classified.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LineClass {
    /// Header row or progress marker
    Noise,
    /// `1. word meaning`
    Numbered(VocabularyEntry),
    /// `word (pos) meaning` or `word: pos. meaning`
    Annotated(VocabularyEntry),
    /// Separated list of words
    List(Vec<VocabularyEntry>),
    /// Nothing recognizable
    Unrecognized,
}

impl LineClass {
    /// Returns the entries this line contributes.
    #[must_use]
    pub fn into_entries(self) -> Vec<VocabularyEntry> {
        match self {
            Self::Numbered(entry) | Self::Annotated(entry) => vec![entry],
            Self::List(entries) => entries,
            Self::Noise | Self::Unrecognized => Vec::new(),
        }
    }

    /// Short label for display.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Noise => "noise",
            Self::Numbered(_) => "numbered",
            Self::Annotated(_) => "annotated",
            Self::List(_) => "list",
            Self::Unrecognized => "unrecognized",
        }
    }
}

/// Result of parsing with per-line statistics.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Deduplicated entries in first-seen order
    pub entries: Vec<VocabularyEntry>,
    /// Non-empty lines examined
    pub lines: usize,
    /// Lines skipped as headers or progress markers
    pub noise: usize,
    /// Lines that produced no entry
    pub unrecognized: usize,
    /// Entries dropped as case-insensitive duplicates
    pub duplicates: usize,
}

impl ParseReport {
    /// Returns true if no entries were recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parses free-form vocabulary lists.
///
/// Stateless: every call recomputes its result from the input alone, so
/// the parser can be shared freely between threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct VocabularyLineParser;

impl VocabularyLineParser {
    /// Parses `input` into deduplicated entries.
    ///
    /// - Lines are split on `\n`/`\r`, trimmed, and blank lines dropped
    /// - Each line is classified by [`Self::classify_line`]
    /// - Duplicate words (ignoring case) keep their first occurrence
    #[must_use]
    pub fn parse(input: &str) -> Vec<VocabularyEntry> {
        Self::parse_with_report(input).entries
    }

    /// Parses `input` and reports how lines were classified.
    #[must_use]
    pub fn parse_with_report(input: &str) -> ParseReport {
        let mut report = ParseReport::default();
        let mut entries = Vec::new();

        for line in split_lines(input) {
            report.lines += 1;
            match Self::classify_line(line) {
                LineClass::Noise => {
                    trace!(line, "skipping noise line");
                    report.noise += 1;
                }
                LineClass::Unrecognized => {
                    trace!(line, "no vocabulary format matched");
                    report.unrecognized += 1;
                }
                class => entries.extend(class.into_entries()),
            }
        }

        let before = entries.len();
        report.entries = dedup(entries);
        report.duplicates = before - report.entries.len();

        debug!(
            lines = report.lines,
            entries = report.entries.len(),
            duplicates = report.duplicates,
            "parsed vocabulary"
        );
        report
    }

    /// Classifies one trimmed line. The first matching rule wins:
    ///
    /// 1. header rows and progress markers are noise
    /// 2. numbered lines (`1. word meaning`)
    /// 3. lines with at least two separated words are lists
    /// 4. a word with an optional annotation and meaning
    /// 5. anything else is split on separators as a last resort
    #[must_use]
    pub fn classify_line(line: &str) -> LineClass {
        if is_noise(line) {
            return LineClass::Noise;
        }
        if let Some(entry) = rules::numbered(line) {
            return LineClass::Numbered(entry);
        }
        if rules::looks_like_list(line) {
            let entries = rules::list(line);
            if !entries.is_empty() {
                return LineClass::List(entries);
            }
        }
        if let Some(entry) = rules::annotated(line) {
            return LineClass::Annotated(entry);
        }

        let entries = rules::list(line);
        if entries.is_empty() {
            LineClass::Unrecognized
        } else {
            LineClass::List(entries)
        }
    }
}

/// Parses `input` into deduplicated entries.
///
/// Shorthand for [`VocabularyLineParser::parse`].
#[must_use]
pub fn parse_vocabulary(input: &str) -> Vec<VocabularyEntry> {
    VocabularyLineParser::parse(input)
}

/// Renders entries as one word per line.
///
/// Parsing the result gives back the same words, except for words that
/// start with a header prefix (`Wordsworth`, `Meaningful`): on a line of
/// their own they read as noise and are dropped.
#[must_use]
pub fn word_list(entries: &[VocabularyEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.word.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

fn dedup(mut entries: Vec<VocabularyEntry>) -> Vec<VocabularyEntry> {
    let mut seen = HashSet::new();
    entries.retain(|entry| seen.insert(entry.key()));
    entries
}
