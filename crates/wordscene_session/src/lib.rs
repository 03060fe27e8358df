//! Submission policy and scene history around the vocabulary parser.
//!
//! This crate provides:
//! - [`Session`] - Prepares backend submissions and records their results
//! - [`HistoryStore`] - Persistence interface for generated word lists
//! - [`split_batch`] and [`GuestPolicy`] - Caller-side limits on parsed entries
//! - [`GenerateRequest`] / [`GenerateResponse`] - Wire shapes of the generation backend
//! - MessagePack persistence for [`FileHistoryStore`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod batch;
pub mod config;
pub mod guest;
pub mod history;
pub mod naming;
pub mod persist;
pub mod session;
pub mod wire;

pub use batch::{BATCH_LIMIT, Batch, continuation_name, split_batch};
pub use config::SessionConfig;
pub use guest::{GUEST_WORD_LIMIT, GuestPolicy};
pub use history::{
    DEFAULT_HISTORY_CAPACITY, HistoryRecord, HistoryState, HistoryStore, MemoryHistoryStore,
    PendingWords,
};
pub use naming::random_list_name;
pub use persist::{FileHistoryStore, from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::{Session, Submission};
pub use wire::{GUEST_LIST_NAME, GenerateRequest, GenerateResponse};
