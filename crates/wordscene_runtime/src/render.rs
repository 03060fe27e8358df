//! Plain-text and JSON rendering of parse results.

use std::fmt::Write as _;

use wordscene_foundation::{Error, ErrorKind, Result, VocabularyEntry};
use wordscene_parser::lines::split_lines;
use wordscene_parser::{LineClass, ParseReport, VocabularyLineParser};
use wordscene_session::HistoryRecord;

/// Renders entries as an aligned table.
#[must_use]
pub fn format_entries(entries: &[VocabularyEntry]) -> String {
    let word_width = entries
        .iter()
        .map(|e| e.word.len())
        .max()
        .unwrap_or(0);
    let pos_width = entries
        .iter()
        .map(|e| e.part_of_speech.chars().count())
        .max()
        .unwrap_or(0);
    let index_width = entries.len().to_string().len();

    let mut out = String::new();
    for (i, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>index_width$}  {:<word_width$}  {:<pos_width$}  {}",
            i + 1,
            entry.word,
            entry.part_of_speech,
            entry.meaning
        );
    }
    out.lines().map(str::trim_end).collect::<Vec<_>>().join("\n")
}

/// Renders how each line of `input` was classified.
#[must_use]
pub fn format_explain(input: &str) -> String {
    split_lines(input)
        .map(|line| {
            let class = VocabularyLineParser::classify_line(line);
            let label = class.label();
            let words = match class {
                LineClass::Noise | LineClass::Unrecognized => String::new(),
                class => class
                    .into_entries()
                    .iter()
                    .map(|e| e.word.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            };
            if words.is_empty() {
                format!("{label:<12} {line}")
            } else {
                format!("{label:<12} {line}  => {words}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One-line summary of a parse.
#[must_use]
pub fn format_summary(report: &ParseReport) -> String {
    let mut summary = format!(
        "{} words recognized from {} lines",
        report.entries.len(),
        report.lines
    );
    if report.noise > 0 {
        let _ = write!(summary, ", {} skipped as headers", report.noise);
    }
    if report.unrecognized > 0 {
        let _ = write!(summary, ", {} unrecognized", report.unrecognized);
    }
    if report.duplicates > 0 {
        let _ = write!(summary, ", {} duplicates dropped", report.duplicates);
    }
    summary
}

/// Renders entries as a JSON array in the wire shape.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn format_json(entries: &[VocabularyEntry]) -> Result<String> {
    serde_json::to_string_pretty(entries)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Renders the history list, newest first.
#[must_use]
pub fn format_history(records: &[HistoryRecord]) -> String {
    if records.is_empty() {
        return "no history yet".to_string();
    }
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            format!(
                "{i}  {}  {} scenes, {} words  {}",
                record.name,
                record.scenes.len(),
                record.word_count,
                record.created_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
