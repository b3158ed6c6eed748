//! JSON file entry store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{PayrollError, PayrollResult};
use crate::models::EntryLedger;

use super::EntryStore;

/// An entry store backed by a JSON file.
///
/// The file holds an array of `{"date": "YYYY-MM-DD", "hours": "2.5"}`
/// objects in ledger order. A missing file loads as an empty ledger.
///
/// # Example
///
/// ```no_run
/// use overtime_engine::storage::{EntryStore, JsonFileStore};
///
/// let store = JsonFileStore::new("entries.json");
/// let entries = store.load_entries()?;
/// println!("{} dates recorded", entries.len());
/// # Ok::<(), overtime_engine::error::PayrollError>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Creates a store for the file at `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, message: impl ToString) -> PayrollError {
        PayrollError::Storage {
            path: self.path.display().to_string(),
            message: message.to_string(),
        }
    }
}

impl EntryStore for JsonFileStore {
    fn load_entries(&self) -> PayrollResult<EntryLedger> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "Entry file not found, starting empty");
            return Ok(EntryLedger::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| self.storage_error(e))?;
        let entries: EntryLedger =
            serde_json::from_str(&content).map_err(|e| self.storage_error(e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Loaded entries");
        Ok(entries)
    }

    fn save_entries(&mut self, entries: &EntryLedger) -> PayrollResult<()> {
        let json = serde_json::to_string_pretty(entries).map_err(|e| self.storage_error(e))?;
        fs::write(&self.path, json).map_err(|e| self.storage_error(e))?;

        debug!(path = %self.path.display(), entries = entries.len(), "Saved entries");
        Ok(())
    }
}
