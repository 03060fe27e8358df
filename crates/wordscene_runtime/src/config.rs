//! Runtime configuration.
//!
//! Defaults match the backend contract. Each limit can be overridden
//! through the environment:
//!
//! | Variable                     | Setting            |
//! |------------------------------|--------------------|
//! | `WORDSCENE_BATCH_LIMIT`      | batch limit        |
//! | `WORDSCENE_GUEST_LIMIT`      | guest word limit   |
//! | `WORDSCENE_HISTORY_CAPACITY` | history capacity   |
//! | `WORDSCENE_HISTORY_PATH`     | history file       |

use std::path::PathBuf;

use wordscene_foundation::{Error, Result};
use wordscene_session::SessionConfig;

/// Environment variable overriding the batch limit.
pub const ENV_BATCH_LIMIT: &str = "WORDSCENE_BATCH_LIMIT";
/// Environment variable overriding the guest word limit.
pub const ENV_GUEST_LIMIT: &str = "WORDSCENE_GUEST_LIMIT";
/// Environment variable overriding the history capacity.
pub const ENV_HISTORY_CAPACITY: &str = "WORDSCENE_HISTORY_CAPACITY";
/// Environment variable overriding the history file location.
pub const ENV_HISTORY_PATH: &str = "WORDSCENE_HISTORY_PATH";

const DEFAULT_HISTORY_PATH: &str = "wordscene-history.msgpack";

/// Configuration for the CLI and REPL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Limits passed to the session.
    pub session: SessionConfig,

    /// Where the scene history is stored.
    pub history_path: PathBuf,

    /// Log verbosity: 0 = warn, 1 = info, 2 = debug, 3+ = trace.
    pub verbosity: u8,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            session: SessionConfig::default(),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            verbosity: 0,
        }
    }
}

impl RuntimeConfig {
    /// Reads overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a variable holds an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads overrides through `lookup`, which maps a variable name to its value.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_BATCH_LIMIT) {
            config.session.batch_limit = parse_limit(ENV_BATCH_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_GUEST_LIMIT) {
            config.session.guest_limit = parse_limit(ENV_GUEST_LIMIT, &value)?;
        }
        if let Some(value) = lookup(ENV_HISTORY_CAPACITY) {
            config.session.history_capacity = parse_limit(ENV_HISTORY_CAPACITY, &value)?;
        }
        if let Some(value) = lookup(ENV_HISTORY_PATH) {
            let value = value.trim();
            if value.is_empty() {
                return Err(Error::config(ENV_HISTORY_PATH, "path must not be empty"));
            }
            config.history_path = PathBuf::from(value);
        }

        Ok(config)
    }

    /// Builder method to set the batch limit.
    #[must_use]
    pub fn with_batch_limit(mut self, limit: usize) -> Self {
        self.session.batch_limit = limit;
        self
    }

    /// Builder method to set the guest word limit.
    #[must_use]
    pub fn with_guest_limit(mut self, limit: usize) -> Self {
        self.session.guest_limit = limit;
        self
    }

    /// Builder method to set the history capacity.
    #[must_use]
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.session.history_capacity = capacity;
        self
    }

    /// Builder method to set the history file.
    #[must_use]
    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }

    /// Builder method to set the log verbosity.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }
}

fn parse_limit(key: &str, value: &str) -> Result<usize> {
    match value.trim().parse::<usize>() {
        Ok(limit) if limit > 0 => Ok(limit),
        _ => Err(Error::config(
            key,
            format!("expected a positive integer, got {value:?}"),
        )),
    }
}
