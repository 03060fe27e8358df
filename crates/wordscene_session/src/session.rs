//! Submission session.
//!
//! A [`Session`] turns raw text into backend requests and folds backend
//! responses back into the history store. It never talks to the network;
//! callers send [`Submission::request`] however they like and hand the
//! decoded [`GenerateResponse`] to [`Session::record`].

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use wordscene_foundation::{Error, ErrorKind, Result, VocabularyEntry};
use wordscene_parser::VocabularyLineParser;

use crate::batch::{continuation_name, split_batch};
use crate::config::SessionConfig;
use crate::guest::GuestPolicy;
use crate::history::{HistoryRecord, HistoryStore, PendingWords};
use crate::naming::random_list_name;
use crate::wire::{GUEST_LIST_NAME, GenerateRequest, GenerateResponse};

/// A request ready to send, plus what stays behind.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    /// The request body.
    pub request: GenerateRequest,
    /// Entries held back for a continuation call.
    pub remaining: Vec<VocabularyEntry>,
    /// Name of the list this submission belongs to. For a continuation
    /// this is the first submission's name, not the suffixed one.
    pub origin: String,
}

impl Submission {
    /// Total words across the request and the held-back remainder.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.request.words.len() + self.remaining.len()
    }

    /// Progress message for the user.
    #[must_use]
    pub fn status_message(&self) -> String {
        if self.remaining.is_empty() {
            format!("generating scenes for {} words", self.request.words.len())
        } else {
            format!(
                "generating scenes for the first {} words ({} in total)",
                self.request.words.len(),
                self.total_words()
            )
        }
    }
}

/// Prepares submissions and records their results.
pub struct Session<S: HistoryStore> {
    store: S,
    config: SessionConfig,
    rng: ChaCha8Rng,
}

impl<S: HistoryStore> Session<S> {
    /// Creates a session over `store`.
    pub fn new(store: S, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Seeds the generator used for random list names.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Returns the session configuration.
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns a reference to the history store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the session, returning its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Parses `text` and builds the first batch for a named list.
    ///
    /// A blank `name` is replaced by a random one.
    ///
    /// # Errors
    ///
    /// Returns `NoWords` if nothing in `text` is recognized.
    pub fn prepare(&mut self, name: &str, text: &str) -> Result<Submission> {
        let entries = VocabularyLineParser::parse(text);
        if entries.is_empty() {
            return Err(Error::no_words());
        }

        let name = match name.trim() {
            "" => random_list_name(&mut self.rng),
            trimmed => trimmed.to_string(),
        };
        let batch = split_batch(entries, self.config.batch_limit);
        debug!(
            name = %name,
            submitted = batch.submitted.len(),
            remaining = batch.remaining.len(),
            "prepared submission"
        );

        Ok(Submission {
            request: GenerateRequest::new(name.clone(), batch.submitted),
            remaining: batch.remaining,
            origin: name,
        })
    }

    /// Parses `text` and builds a guest submission.
    ///
    /// # Errors
    ///
    /// Returns `NoWords` or `TooManyWords` per the guest policy.
    pub fn prepare_guest(&self, text: &str) -> Result<Submission> {
        let entries = VocabularyLineParser::parse(text);
        GuestPolicy::new(self.config.guest_limit).check(&entries)?;
        Ok(Submission {
            request: GenerateRequest::new(GUEST_LIST_NAME, entries),
            remaining: Vec::new(),
            origin: GUEST_LIST_NAME.to_string(),
        })
    }

    /// Builds the next batch from the stored pending words.
    ///
    /// # Errors
    ///
    /// Returns `NoPendingWords` if nothing is waiting.
    pub fn prepare_continuation(&self) -> Result<Submission> {
        let pending = self
            .store
            .pending()
            .filter(|pending| !pending.words.is_empty())
            .ok_or_else(|| Error::new(ErrorKind::NoPendingWords))?;

        let batch = split_batch(pending.words, self.config.batch_limit);
        Ok(Submission {
            request: GenerateRequest::new(
                continuation_name(&pending.original_name),
                batch.submitted,
            ),
            remaining: batch.remaining,
            origin: pending.original_name,
        })
    }

    /// Stores the outcome of `submission` and updates the pending words.
    ///
    /// Words the backend reports as remaining come first, followed by the
    /// words this session held back.
    ///
    /// # Errors
    ///
    /// Returns an error if the history store cannot persist the change.
    pub fn record(
        &mut self,
        submission: &Submission,
        response: GenerateResponse,
    ) -> Result<HistoryRecord> {
        let generated = submission
            .request
            .words
            .len()
            .saturating_sub(response.remaining_words.len());
        let record = HistoryRecord::new(
            submission.request.name.clone(),
            response.scenes,
            generated,
        );
        self.store.add(record.clone())?;

        let mut leftover = response.remaining_words;
        leftover.extend(submission.remaining.iter().cloned());
        let pending = (!leftover.is_empty()).then(|| PendingWords {
            words: leftover,
            original_name: submission.origin.clone(),
        });
        info!(
            name = %record.name,
            scenes = record.scenes.len(),
            pending = pending.as_ref().map_or(0, |p| p.words.len()),
            "recorded generated scenes"
        );
        self.store.set_pending(pending)?;

        Ok(record)
    }

    /// All history records, newest first.
    #[must_use]
    pub fn history(&self) -> Vec<HistoryRecord> {
        self.store.list()
    }

    /// Words waiting for a continuation call.
    #[must_use]
    pub fn pending(&self) -> Option<PendingWords> {
        self.store.pending()
    }

    /// Removes the history record at `index`.
    ///
    /// # Errors
    ///
    /// Returns `HistoryIndex` if `index` is out of range, or an error if
    /// the store cannot persist the change.
    pub fn remove_history(&mut self, index: usize) -> Result<HistoryRecord> {
        let len = self.store.len();
        self.store
            .remove(index)?
            .ok_or_else(|| Error::history_index(index, len))
    }
}
