//! Scene history.
//!
//! Generated word lists are kept newest first in a bounded history,
//! together with the words still waiting for a continuation call. Storage
//! is reached only through the [`HistoryStore`] trait, so a session can run
//! against memory in tests and against a file in the CLI.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use wordscene_foundation::{Result, VocabularyEntry};

/// Records retained when no capacity is configured.
pub const DEFAULT_HISTORY_CAPACITY: usize = 10;

/// One generated word list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Display name of the list.
    pub name: String,
    /// Scenes returned by the backend, kept as opaque JSON.
    pub scenes: Vec<JsonValue>,
    /// Words the scenes were generated for.
    pub word_count: usize,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
}

impl HistoryRecord {
    /// Creates a record stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, scenes: Vec<JsonValue>, word_count: usize) -> Self {
        Self {
            name: name.into(),
            scenes,
            word_count,
            created_at: Utc::now(),
        }
    }

    /// Overrides the creation time.
    #[must_use]
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }
}

/// Words left over from an oversized submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingWords {
    /// Words not yet generated.
    pub words: Vec<VocabularyEntry>,
    /// Name of the list they came from.
    pub original_name: String,
}

/// Everything a history store holds.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HistoryState {
    /// Records, newest first.
    pub records: Vec<HistoryRecord>,
    /// Words awaiting a continuation call.
    pub pending: Option<PendingWords>,
}

/// Persistence interface for generated word lists.
pub trait HistoryStore {
    /// All records, newest first.
    fn list(&self) -> Vec<HistoryRecord>;

    /// The record at `index`, counting from the newest.
    fn get(&self, index: usize) -> Option<HistoryRecord>;

    /// Number of stored records.
    fn len(&self) -> usize;

    /// Returns true if no records are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts `record` as the newest entry, dropping the oldest past capacity.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the change.
    fn add(&mut self, record: HistoryRecord) -> Result<()>;

    /// Removes and returns the record at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the change.
    fn remove(&mut self, index: usize) -> Result<Option<HistoryRecord>>;

    /// Words awaiting a continuation call, if any.
    fn pending(&self) -> Option<PendingWords>;

    /// Replaces the pending words.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot persist the change.
    fn set_pending(&mut self, pending: Option<PendingWords>) -> Result<()>;
}

/// In-memory history store.
#[derive(Clone, Debug)]
pub struct MemoryHistoryStore {
    state: HistoryState,
    capacity: usize,
}

impl Default for MemoryHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryHistoryStore {
    /// Creates an empty store with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Creates an empty store keeping at most `capacity` records.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            state: HistoryState::default(),
            capacity,
        }
    }

    /// Creates a store from saved state, truncated to `capacity`.
    #[must_use]
    pub fn from_state(mut state: HistoryState, capacity: usize) -> Self {
        state.records.truncate(capacity);
        Self { state, capacity }
    }

    /// The current state.
    #[must_use]
    pub const fn state(&self) -> &HistoryState {
        &self.state
    }

    /// Most records retained.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn list(&self) -> Vec<HistoryRecord> {
        self.state.records.clone()
    }

    fn get(&self, index: usize) -> Option<HistoryRecord> {
        self.state.records.get(index).cloned()
    }

    fn len(&self) -> usize {
        self.state.records.len()
    }

    fn add(&mut self, record: HistoryRecord) -> Result<()> {
        self.state.records.insert(0, record);
        self.state.records.truncate(self.capacity);
        Ok(())
    }

    fn remove(&mut self, index: usize) -> Result<Option<HistoryRecord>> {
        if index < self.state.records.len() {
            Ok(Some(self.state.records.remove(index)))
        } else {
            Ok(None)
        }
    }

    fn pending(&self) -> Option<PendingWords> {
        self.state.pending.clone()
    }

    fn set_pending(&mut self, pending: Option<PendingWords>) -> Result<()> {
        self.state.pending = pending;
        Ok(())
    }
}
