//! Limits applied around the parser.

use crate::batch::BATCH_LIMIT;
use crate::guest::GUEST_WORD_LIMIT;
use crate::history::DEFAULT_HISTORY_CAPACITY;

/// Limits applied by a [`Session`](crate::Session).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Most words sent to the backend in one call.
    pub batch_limit: usize,

    /// Most words a guest may submit.
    pub guest_limit: usize,

    /// Most history records retained.
    pub history_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            batch_limit: BATCH_LIMIT,
            guest_limit: GUEST_WORD_LIMIT,
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Builder method to set the batch limit.
    #[must_use]
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.batch_limit = limit;
        self
    }

    /// Builder method to set the guest word limit.
    #[must_use]
    pub fn with_guest_limit(mut self, limit: usize) -> Self {
        self.guest_limit = limit;
        self
    }

    /// Builder method to set the history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }
}
