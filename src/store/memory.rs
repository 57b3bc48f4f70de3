//! In-memory store
//!
//! A mutable, shareable list of entries. Clones share the same list, so one
//! handle can feed a paginator while another mutates the collection.

use super::types::EntrySource;
use crate::error::Result;
use crate::types::Entry;
use std::sync::{Arc, PoisonError, RwLock};

/// Shared in-memory store; listing order is insertion order
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<Vec<Entry>>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the given entries
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(entries)),
        }
    }

    /// Freeze the current listing of another store
    ///
    /// Paging over the returned store gives a consistent `total_size` across
    /// pages, at the cost of not seeing later changes to `source`.
    pub fn snapshot_of(source: &dyn EntrySource) -> Result<Self> {
        let entries = source.list_all()?;
        tracing::debug!(
            "Snapshot of {} taken with {} entries",
            source.describe(),
            entries.len()
        );
        Ok(Self::from_entries(entries))
    }

    /// Append an entry
    pub fn push(&self, entry: Entry) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(entry);
    }

    /// Remove every entry with the given path, returning how many were removed
    pub fn remove(&self, absolute_path: &str) -> usize {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        let before = entries.len();
        entries.retain(|e| e.absolute_path != absolute_path);
        before - entries.len()
    }

    /// Remove all entries
    pub fn clear(&self) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl EntrySource for MemoryStore {
    fn list_all(&self) -> Result<Vec<Entry>> {
        Ok(self
            .entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
