//! Client-side page accumulator
//!
//! Concatenates successive pages into one ordered list.

use crate::pagination::Page;
use crate::types::Entry;
use serde::Serialize;

/// Accumulated result set of one browsing session
///
/// Append-only between resets. Pages are appended as given: no
/// de-duplication and no reordering, so callers must append pages in
/// offset order.
#[derive(Debug, Clone, Default)]
pub struct PageAccumulator {
    items: Vec<Entry>,
    total_size: usize,
}

impl PageAccumulator {
    /// Create an empty accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything fetched so far
    pub fn reset(&mut self) {
        self.items.clear();
        self.total_size = 0;
    }

    /// Append a page's entries and take its total size
    ///
    /// The total size is overwritten, not summed: the store is the source of
    /// truth and may have grown or shrunk since the previous page.
    pub fn append_page(&mut self, page: Page) {
        self.total_size = page.total_size;
        self.items.extend(page.entries);
    }

    /// Number of entries fetched so far
    pub fn fetched_count(&self) -> usize {
        self.items.len()
    }

    /// Offset of the first entry not yet fetched
    pub fn next_offset(&self) -> usize {
        self.items.len()
    }

    /// Store size announced by the most recent page
    pub fn total_size(&self) -> usize {
        self.total_size
    }

    /// Entries in arrival order
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// Check if nothing has been fetched
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Owned copy for a reader
    pub fn snapshot(&self) -> ResultSnapshot {
        ResultSnapshot {
            items: self.items.clone(),
            total_size: self.total_size,
        }
    }
}

/// Point-in-time copy of an accumulator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResultSnapshot {
    /// Entries fetched so far
    pub items: Vec<Entry>,
    /// Store size announced by the most recent page
    pub total_size: usize,
}

impl ResultSnapshot {
    /// Number of entries in the snapshot
    pub fn fetched_count(&self) -> usize {
        self.items.len()
    }
}
