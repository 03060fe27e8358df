//! History persistence using `MessagePack`.
//!
//! The whole [`HistoryState`] is written after every change. A missing
//! file reads as an empty history.

use std::fs::File;
use std::io::{BufReader, BufWriter, ErrorKind as IoErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use wordscene_foundation::{Error, ErrorContext, ErrorKind, Result};

use crate::history::{HistoryRecord, HistoryState, HistoryStore, MemoryHistoryStore, PendingWords};

/// Serializes history state to bytes using `MessagePack` format.
///
/// Uses named serialization to preserve struct field names.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_bytes(state: &HistoryState) -> Result<Vec<u8>> {
    rmp_serde::to_vec_named(state)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

/// Deserializes history state from `MessagePack` bytes.
///
/// # Errors
///
/// Returns an error if deserialization fails.
pub fn from_bytes(bytes: &[u8]) -> Result<HistoryState> {
    rmp_serde::from_slice(bytes)
        .map_err(|e| Error::new(ErrorKind::SerializationError(e.to_string())))
}

fn io_error(path: &Path, action: &str, e: &std::io::Error) -> Error {
    Error::new(ErrorKind::IoError(e.to_string())).with_context(
        ErrorContext::new()
            .with_source(path.display().to_string())
            .with_detail(format!("failed to {action} file")),
    )
}

/// Saves history state to a file using `MessagePack` format.
///
/// Creates the file if it doesn't exist, or overwrites it if it does.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written to,
/// or if serialization fails.
pub fn save_to_file<P: AsRef<Path>>(state: &HistoryState, path: P) -> Result<()> {
    let path = path.as_ref();
    let bytes = to_bytes(state)?;

    let file = File::create(path).map_err(|e| io_error(path, "create", &e))?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(&bytes)
        .map_err(|e| io_error(path, "write", &e))?;
    writer.flush().map_err(|e| io_error(path, "flush", &e))?;

    Ok(())
}

/// Loads history state from a `MessagePack` file.
///
/// A file that does not exist yet yields an empty state.
///
/// # Errors
///
/// Returns an error if the file cannot be read or if deserialization fails.
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<HistoryState> {
    let path = path.as_ref();
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == IoErrorKind::NotFound => return Ok(HistoryState::default()),
        Err(e) => return Err(io_error(path, "open", &e)),
    };

    let mut reader = BufReader::new(file);
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| io_error(path, "read", &e))?;

    from_bytes(&bytes).map_err(|e| {
        e.with_context(ErrorContext::new().with_source(path.display().to_string()))
    })
}

/// History store backed by a `MessagePack` file.
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    inner: MemoryHistoryStore,
}

impl FileHistoryStore {
    /// Opens the store at `path`, reading any saved history.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing file cannot be read or decoded.
    pub fn open(path: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let path = path.into();
        let state = load_from_file(&path)?;
        debug!(
            path = %path.display(),
            records = state.records.len(),
            "opened history store"
        );
        Ok(Self {
            path,
            inner: MemoryHistoryStore::from_state(state, capacity),
        })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn save(&self) -> Result<()> {
        save_to_file(self.inner.state(), &self.path)
    }
}

impl HistoryStore for FileHistoryStore {
    fn list(&self) -> Vec<HistoryRecord> {
        self.inner.list()
    }

    fn get(&self, index: usize) -> Option<HistoryRecord> {
        self.inner.get(index)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn add(&mut self, record: HistoryRecord) -> Result<()> {
        self.inner.add(record)?;
        self.save()
    }

    fn remove(&mut self, index: usize) -> Result<Option<HistoryRecord>> {
        let removed = self.inner.remove(index)?;
        if removed.is_some() {
            self.save()?;
        }
        Ok(removed)
    }

    fn pending(&self) -> Option<PendingWords> {
        self.inner.pending()
    }

    fn set_pending(&mut self, pending: Option<PendingWords>) -> Result<()> {
        self.inner.set_pending(pending)?;
        self.save()
    }
}
