//! Free-text vocabulary parser.
//!
//! This crate turns pasted, typed or uploaded word lists into
//! [`VocabularyEntry`] records without asking the user which format the
//! text is in. Each line is classified on its own, so a single paste may
//! mix formats freely.
//!
//! # Architecture
//!
//! ```text
//! "共 20 词\n1. ubiquitous 无处不在的\nflap, ranger"
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LINE SPLITTING  │  → ["共 20 词", "1. ubiquitous 无处不在的", "flap, ranger"]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ CLASSIFICATION  │  → [Noise, Numbered(ubiquitous), List([flap, ranger])]
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ DEDUPLICATION   │  → [ubiquitous, flap, ranger]
//! └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`lines`] - Line splitting and header/noise detection
//! - [`token`] - Word tokens, part-of-speech markers and list separators
//! - [`rules`] - The per-line format rules
//! - [`parser`] - Line classification and the parse pipeline

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lines;
pub mod parser;
pub mod rules;
pub mod token;

pub use parser::{LineClass, ParseReport, VocabularyLineParser, parse_vocabulary, word_list};
pub use wordscene_foundation::VocabularyEntry;
