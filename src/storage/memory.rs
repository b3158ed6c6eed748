//! In-memory entry store.

use crate::error::PayrollResult;
use crate::models::EntryLedger;

use super::EntryStore;

/// An entry store that keeps the ledger in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: EntryLedger,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl EntryStore for MemoryStore {
    fn load_entries(&self) -> PayrollResult<EntryLedger> {
        Ok(self.entries.clone())
    }

    fn save_entries(&mut self, entries: &EntryLedger) -> PayrollResult<()> {
        self.entries = entries.clone();
        Ok(())
    }
}
