//! Core types and error handling for wordscene.
//!
//! This crate provides:
//! - [`VocabularyEntry`] - A recognized vocabulary item (word, part of speech, meaning)
//! - [`Error`] - Rich error types with context
//! - [`Result`] - Result alias used across the workspace

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entry;
pub mod error;

pub use entry::{MIN_WORD_LEN, VocabularyEntry, is_word_char};
pub use error::{Error, ErrorContext, ErrorKind, Result};
