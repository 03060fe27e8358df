//! Submission batching.
//!
//! The generation backend accepts a bounded number of words per call. The
//! first batch is submitted right away and the remainder is kept, in
//! order, for a follow-up call under a continuation name.

use wordscene_foundation::VocabularyEntry;

/// Most words the backend accepts in one generation call.
pub const BATCH_LIMIT: usize = 200;

/// Suffix marking a follow-up submission of leftover words.
const CONTINUATION_SUFFIX: &str = "（续）";

/// Entries split into the part submitted now and the part left over.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Batch {
    /// Entries sent in this call.
    pub submitted: Vec<VocabularyEntry>,
    /// Entries left for a later call.
    pub remaining: Vec<VocabularyEntry>,
}

impl Batch {
    /// Returns true if some entries did not fit.
    #[must_use]
    pub fn has_remaining(&self) -> bool {
        !self.remaining.is_empty()
    }

    /// Total number of entries across both parts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.submitted.len() + self.remaining.len()
    }
}

/// Splits `entries` after the first `limit`.
#[must_use]
pub fn split_batch(mut entries: Vec<VocabularyEntry>, limit: usize) -> Batch {
    let remaining = if entries.len() > limit {
        entries.split_off(limit)
    } else {
        Vec::new()
    };
    Batch {
        submitted: entries,
        remaining,
    }
}

/// Name used when submitting the leftover words of `name`.
#[must_use]
pub fn continuation_name(name: &str) -> String {
    format!("{name}{CONTINUATION_SUFFIX}")
}
