//! Per-line format rules.
//!
//! Each rule looks at one trimmed line and either recognizes it or
//! declines. A rule whose word token is shorter than the minimum length
//! declines, so classification can fall through to the next rule.
//!
//! | Rule        | Example                                   |
//! |-------------|-------------------------------------------|
//! | numbered    | `12. ubiquitous 无处不在的`               |
//! | annotated   | `ubiquitous (adj.) 无处不在的`, `flap: v. 拍打` |
//! | list        | `flap, ranger；counsellor (顾问)`          |

use std::sync::LazyLock;

use regex::{Captures, Regex};
use wordscene_foundation::VocabularyEntry;

use crate::token::{
    clean_meaning, has_separator, is_long_enough, is_pos_marker, leading_word, split_segments,
};

/// `<digits><dots/spaces><word>[ <meaning>]`
static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+[.\s]+([A-Za-z'-]+)(?:\s+(.*))?$").expect("valid numbered regex")
});

/// `<word>[ (<pos>) | :<pos.>]<meaning>`, with half- or full-width punctuation.
static ANNOTATED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z'-]+)\s*(?:[(（]\s*([A-Za-z]+\.?)\s*[)）]|[:：]\s*([A-Za-z]+\.)?)?(.*)$")
        .expect("valid annotated regex")
});

/// `<word>[ (<note>)][ <meaning>]` inside a separated list.
static SEGMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([A-Za-z'-]+)(?:\s*[(（]([^)）]+)[)）])?(?:\s+(.*))?$")
        .expect("valid segment regex")
});

fn group<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str().trim())
}

/// Recognizes a numbered line such as `1. ubiquitous 无处不在的`.
///
/// Everything after the word is the meaning; numbered lines carry no part
/// of speech.
#[must_use]
pub fn numbered(line: &str) -> Option<VocabularyEntry> {
    let caps = NUMBERED_RE.captures(line)?;
    let word = group(&caps, 1);
    if !is_long_enough(word) {
        return None;
    }
    Some(VocabularyEntry::new(word).with_meaning(group(&caps, 2)))
}

/// Recognizes a single word with an optional annotation.
///
/// The part of speech comes from parentheses (`(adj.)`, `(n)`) or from an
/// abbreviation ending in a dot after a colon (`: adj.`). The rest of the
/// line is the meaning.
#[must_use]
pub fn annotated(line: &str) -> Option<VocabularyEntry> {
    let caps = ANNOTATED_RE.captures(line)?;
    let word = group(&caps, 1);
    if !is_long_enough(word) {
        return None;
    }
    let pos = caps
        .get(2)
        .or_else(|| caps.get(3))
        .map_or("", |m| m.as_str());
    let meaning = caps.get(4).map_or("", |m| clean_meaning(m.as_str()));
    Some(
        VocabularyEntry::new(word)
            .with_part_of_speech(pos)
            .with_meaning(meaning),
    )
}

/// Recognizes one segment of a separated list.
///
/// A parenthetical that looks like a part of speech fills the part of
/// speech; any other parenthetical is the meaning. Trailing text is
/// appended to the meaning.
#[must_use]
pub fn segment(text: &str) -> Option<VocabularyEntry> {
    let caps = SEGMENT_RE.captures(text)?;
    let word = group(&caps, 1);
    if !is_long_enough(word) {
        return None;
    }

    let note = group(&caps, 2);
    let trailing = group(&caps, 3);
    let (pos, note) = if is_pos_marker(note) {
        (note, "")
    } else {
        ("", note)
    };
    let meaning = match (note.is_empty(), trailing.is_empty()) {
        (false, false) => format!("{note} {trailing}"),
        (false, true) => note.to_string(),
        (true, _) => trailing.to_string(),
    };

    Some(
        VocabularyEntry::new(word)
            .with_part_of_speech(pos)
            .with_meaning(meaning),
    )
}

/// Splits a line on separators and recognizes each segment.
#[must_use]
pub fn list(line: &str) -> Vec<VocabularyEntry> {
    split_segments(line).filter_map(segment).collect()
}

/// Returns true if the line reads as an inline list of words.
///
/// The first segment must itself be a list item and at least two
/// separated segments must start with a word token. A single word whose
/// meaning happens to contain a comma (`abandon 放弃，抛弃`,
/// `flap: to move up and down, flutter`) is not a list.
#[must_use]
pub fn looks_like_list(line: &str) -> bool {
    has_separator(line)
        && split_segments(line).next().is_some_and(is_list_head)
        && split_segments(line)
            .filter(|segment| leading_word(segment).is_some())
            .nth(1)
            .is_some()
}

/// A segment that can open a list: a word, an optional note in
/// parentheses, and trailing text only when it holds no English.
///
/// English after the head word is a definition, and its commas belong to
/// the definition rather than separating words.
fn is_list_head(segment: &str) -> bool {
    SEGMENT_RE.captures(segment).is_some_and(|caps| {
        is_long_enough(group(&caps, 1))
            && !group(&caps, 3).chars().any(|c| c.is_ascii_alphabetic())
    })
}
