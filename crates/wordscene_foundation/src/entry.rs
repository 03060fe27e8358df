//! Vocabulary entries.
//!
//! A [`VocabularyEntry`] is one recognized item from a pasted word list:
//! the word itself plus an optional part of speech and meaning. Entries
//! travel over the wire as `{"word", "pos", "meaning"}` objects.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Minimum length of a word token. Single letters ("a", "I") are noise.
pub const MIN_WORD_LEN: usize = 2;

/// Returns true if `c` may appear in a word token.
#[must_use]
pub const fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '-' || c == '\''
}

/// A single recognized vocabulary item.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VocabularyEntry {
    /// The word, made of ASCII letters, hyphens and apostrophes.
    pub word: String,
    /// Part-of-speech abbreviation such as "n." or "adj.", possibly empty.
    #[serde(rename = "pos", default, deserialize_with = "null_as_empty")]
    pub part_of_speech: String,
    /// Free-form meaning in any script, possibly empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub meaning: String,
}

impl VocabularyEntry {
    /// Creates an entry with no part of speech and no meaning.
    #[must_use]
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            part_of_speech: String::new(),
            meaning: String::new(),
        }
    }

    /// Sets the part of speech.
    #[must_use]
    pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
        self.part_of_speech = pos.into();
        self
    }

    /// Sets the meaning.
    #[must_use]
    pub fn with_meaning(mut self, meaning: impl Into<String>) -> Self {
        self.meaning = meaning.into();
        self
    }

    /// Case-insensitive identity used for deduplication.
    #[must_use]
    pub fn key(&self) -> String {
        self.word.to_ascii_lowercase()
    }

    /// Returns true if this entry has a part of speech.
    #[must_use]
    pub fn has_part_of_speech(&self) -> bool {
        !self.part_of_speech.is_empty()
    }

    /// Returns true if this entry has a meaning.
    #[must_use]
    pub fn has_meaning(&self) -> bool {
        !self.meaning.is_empty()
    }

    /// Checks whether `word` is a well-formed word token.
    #[must_use]
    pub fn is_valid_word(word: &str) -> bool {
        word.len() >= MIN_WORD_LEN && word.chars().all(is_word_char)
    }
}

impl fmt::Display for VocabularyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.word)?;
        if self.has_part_of_speech() {
            write!(f, " ({})", self.part_of_speech)?;
        }
        if self.has_meaning() {
            write!(f, " {}", self.meaning)?;
        }
        Ok(())
    }
}

/// Backends built on optional string fields may send `null` for `pos`.
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
