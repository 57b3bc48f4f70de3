//! Common types used throughout dirpage
//!
//! This module contains the records shared by the store, the paginator
//! and the client session.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// ============================================================================
// Entry
// ============================================================================

/// One enumerable item of a backing store
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    /// File name shown to the user
    pub display_name: String,
    /// Absolute path of the item
    pub absolute_path: String,
    /// Length in bytes
    pub size_bytes: u64,
}

impl Entry {
    /// Create a new entry
    pub fn new(
        display_name: impl Into<String>,
        absolute_path: impl Into<String>,
        size_bytes: u64,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            absolute_path: absolute_path.into(),
            size_bytes,
        }
    }
}

// ============================================================================
// Query Arguments
// ============================================================================

/// A query parameter the paginator can honor
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum QueryArg {
    /// Start position of the page
    Offset,
    /// Maximum number of entries in the page
    Limit,
}

impl QueryArg {
    /// Wire name of the argument
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryArg::Offset => "OFFSET",
            QueryArg::Limit => "LIMIT",
        }
    }
}

impl fmt::Display for QueryArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Set of arguments a query actually applied
pub type HonoredArgs = BTreeSet<QueryArg>;

/// Both paging arguments
pub fn all_query_args() -> HonoredArgs {
    [QueryArg::Offset, QueryArg::Limit].into_iter().collect()
}
