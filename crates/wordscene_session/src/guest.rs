//! Guest-mode word limit.

use wordscene_foundation::{Error, Result, VocabularyEntry};

/// Most words a guest may submit at once.
pub const GUEST_WORD_LIMIT: usize = 50;

/// Caller-side limit layered over the parser's unbounded output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuestPolicy {
    limit: usize,
}

impl Default for GuestPolicy {
    fn default() -> Self {
        Self::new(GUEST_WORD_LIMIT)
    }
}

impl GuestPolicy {
    /// Creates a policy with the given limit.
    #[must_use]
    pub const fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The configured limit.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns true if `count` words exceed the limit.
    #[must_use]
    pub const fn is_over_limit(&self, count: usize) -> bool {
        count > self.limit
    }

    /// Checks that `entries` is non-empty and within the limit.
    ///
    /// # Errors
    ///
    /// Returns `NoWords` for an empty list and `TooManyWords` when the
    /// list is longer than the limit.
    pub fn check(&self, entries: &[VocabularyEntry]) -> Result<()> {
        if entries.is_empty() {
            return Err(Error::no_words());
        }
        if self.is_over_limit(entries.len()) {
            return Err(Error::too_many_words(self.limit, entries.len()));
        }
        Ok(())
    }
}
