//! Overtime entry storage.
//!
//! Entry history lives outside the engine. This module defines the load/save
//! contract, [`EntryStore`], and two backends: an in-memory store and a JSON
//! file store. The choice of backing store is a deployment detail.

mod json_file;
mod memory;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::PayrollResult;
use crate::models::EntryLedger;

/// A place overtime entries are loaded from and saved to.
pub trait EntryStore {
    /// Loads the stored entries in their saved order.
    fn load_entries(&self) -> PayrollResult<EntryLedger>;

    /// Replaces the stored entries with `entries`.
    fn save_entries(&mut self, entries: &EntryLedger) -> PayrollResult<()>;
}
