//! CLI, live-preview REPL, configuration and logging for wordscene.
//!
//! This crate provides:
//! - [`Preview`] - Interactive live preview of what the parser recognizes
//! - [`RuntimeConfig`] - Limits and paths, with environment overrides
//! - [`init_logging`] - `tracing` subscriber setup for the binary
//! - Plain-text and JSON rendering of parse results

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod editor;
pub mod logging;
pub mod render;
pub mod repl;

pub use config::RuntimeConfig;
pub use editor::{LineEditor, ReadResult, RustylineEditor};
pub use logging::init_logging;
pub use repl::{Outcome, Preview};
