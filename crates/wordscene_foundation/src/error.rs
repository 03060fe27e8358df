//! Error types for wordscene.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.
//! The vocabulary parser itself never fails; these errors come from the
//! policy, persistence and configuration layers around it.

use std::fmt;

use thiserror::Error;

/// The main error type for wordscene operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an error for a submission with no recognized words.
    #[must_use]
    pub fn no_words() -> Self {
        Self::new(ErrorKind::NoWords)
    }

    /// Creates a word limit error.
    #[must_use]
    pub fn too_many_words(limit: usize, actual: usize) -> Self {
        Self::new(ErrorKind::TooManyWords { limit, actual })
    }

    /// Creates a history index error.
    #[must_use]
    pub fn history_index(index: usize, len: usize) -> Self {
        Self::new(ErrorKind::HistoryIndex { index, len })
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config {
            key: key.into(),
            message: message.into(),
        })
    }

    /// Returns true if the error should be shown to the user as-is
    /// (input problems rather than system failures).
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::NoWords
                | ErrorKind::TooManyWords { .. }
                | ErrorKind::NoPendingWords
                | ErrorKind::UnknownCommand(_)
        )
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Nothing in the input was recognized as a word.
    #[error("enter at least one word")]
    NoWords,

    /// The input holds more words than the active policy allows.
    #[error("at most {limit} words are allowed in guest mode, got {actual}; register to lift the limit")]
    TooManyWords {
        /// The configured limit.
        limit: usize,
        /// Number of words recognized.
        actual: usize,
    },

    /// A continuation was requested but no words are pending.
    #[error("no remaining words are waiting to be generated")]
    NoPendingWords,

    /// History index out of range.
    #[error("history index out of bounds: {index} (length {len})")]
    HistoryIndex {
        /// The index that was accessed.
        index: usize,
        /// Number of stored records.
        len: usize,
    },

    /// Serialization or deserialization failed.
    #[error("serialization error: {0}")]
    SerializationError(String),

    /// Filesystem access failed.
    #[error("I/O error: {0}")]
    IoError(String),

    /// A configuration value was invalid.
    #[error("invalid configuration for {key}: {message}")]
    Config {
        /// The setting that was rejected.
        key: String,
        /// Why it was rejected.
        message: String,
    },

    /// A REPL command that does not exist.
    #[error("unknown command :{0}, try :help")]
    UnknownCommand(String),

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// File path or input name.
    pub source: Option<String>,
    /// Extra detail about the failing operation.
    pub detail: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Sets the detail.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if let Some(detail) = &self.detail {
            if self.source.is_some() {
                write!(f, ": ")?;
            }
            write!(f, "{detail}")?;
        }
        Ok(())
    }
}

/// Result type alias for wordscene operations.
pub type Result<T> = std::result::Result<T, Error>;
