//! wordscene - Free-text vocabulary lists to AI word-scene requests
//!
//! This crate re-exports all layers of wordscene for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: wordscene_runtime    - CLI, live-preview REPL, config, logging
//! Layer 2: wordscene_session    - Batching, guest policy, history store
//! Layer 1: wordscene_parser     - Line classification and deduplication
//! Layer 0: wordscene_foundation - VocabularyEntry, Error
//! ```

pub use wordscene_foundation as foundation;
pub use wordscene_parser as parser;
pub use wordscene_runtime as runtime;
pub use wordscene_session as session;
