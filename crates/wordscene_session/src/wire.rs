//! JSON shapes exchanged with the scene generation backend.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use wordscene_foundation::{Error, ErrorKind, Result, VocabularyEntry};

/// Name under which guest submissions are sent.
pub const GUEST_LIST_NAME: &str = "游客词库";

/// Body of a generation call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    /// Display name of the word list.
    pub name: String,
    /// Words to build scenes for.
    pub words: Vec<VocabularyEntry>,
}

impl GenerateRequest {
    /// Creates a request.
    #[must_use]
    pub fn new(name: impl Into<String>, words: Vec<VocabularyEntry>) -> Self {
        Self {
            name: name.into(),
            words,
        }
    }

    /// Serializes the request as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }

    /// Serializes the request as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }
}

/// Body returned by a generation call.
///
/// Scenes are AI-authored documents and are kept as opaque JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerateResponse {
    /// Status message for the user.
    #[serde(default)]
    pub message: String,
    /// Generated scenes.
    #[serde(default)]
    pub scenes: Vec<JsonValue>,
    /// Number of words the backend used.
    #[serde(default)]
    pub word_count: usize,
    /// Words the backend did not get to.
    #[serde(default)]
    pub remaining_words: Vec<VocabularyEntry>,
}

impl GenerateResponse {
    /// Parses a response body.
    ///
    /// # Errors
    ///
    /// Returns an error if `body` is not a valid response document.
    pub fn from_json(body: &str) -> Result<Self> {
        serde_json::from_str(body)
            .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
    }
}
