//! Word tokens, part-of-speech markers and list separators.

use wordscene_foundation::{MIN_WORD_LEN, is_word_char};

/// Returns true if `c` separates items in an inline list.
///
/// Covers ASCII and full-width commas and semicolons, plus tabs.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    matches!(c, ',' | ';' | '，' | '；' | '\t')
}

/// Returns true if `line` contains at least one list separator.
#[must_use]
pub fn has_separator(line: &str) -> bool {
    line.chars().any(is_separator)
}

/// Splits `line` on runs of separators into trimmed, non-empty segments.
pub fn split_segments(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator)
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
}

/// Scans the maximal word-character run at the start of `text`.
///
/// Returns the run and the text after it, or `None` when `text` does not
/// start with a word character.
#[must_use]
pub fn scan_word(text: &str) -> Option<(&str, &str)> {
    let end = text
        .char_indices()
        .find(|&(_, c)| !is_word_char(c))
        .map_or(text.len(), |(i, _)| i);
    (end > 0).then(|| text.split_at(end))
}

/// Returns the leading word token of `text` if it is long enough to count.
#[must_use]
pub fn leading_word(text: &str) -> Option<&str> {
    scan_word(text)
        .map(|(word, _)| word)
        .filter(|word| is_long_enough(word))
}

/// Returns true if `word` meets the minimum word length.
#[must_use]
pub fn is_long_enough(word: &str) -> bool {
    // Word characters are ASCII, so bytes equal chars.
    word.len() >= MIN_WORD_LEN
}

/// Returns true if `text` is a part-of-speech abbreviation such as "adj." or "n".
///
/// A marker is one or more ASCII letters, optionally ending in a dot.
#[must_use]
pub fn is_pos_marker(text: &str) -> bool {
    let letters = text.strip_suffix('.').unwrap_or(text);
    !letters.is_empty() && letters.chars().all(|c| c.is_ascii_alphabetic())
}

/// Removes separators and whitespace left in front of a meaning.
#[must_use]
pub fn clean_meaning(text: &str) -> &str {
    text.trim_start_matches(|c: char| is_separator(c) || c.is_whitespace())
        .trim_end()
}
