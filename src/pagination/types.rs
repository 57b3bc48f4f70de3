//! Pagination types
//!
//! Request, response and query-shape types of the paging wire contract.

use crate::error::{Error, Result};
use crate::types::{all_query_args, Entry, HonoredArgs};
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Request
// ============================================================================

/// An offset/limit page request
///
/// Fields are signed so that negative wire input reaches the paginator and
/// is rejected there.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PaginationRequest {
    /// Index of the first entry to return
    pub offset: i64,
    /// Maximum number of entries to return
    pub limit: i64,
}

impl PaginationRequest {
    /// Create a new request
    pub fn new(offset: i64, limit: i64) -> Self {
        Self { offset, limit }
    }

    /// Check both arguments and convert them to indices
    ///
    /// Offset is checked before limit.
    pub fn validate(&self) -> Result<(usize, usize)> {
        if self.offset < 0 {
            return Err(Error::invalid_argument("offset must not be less than 0"));
        }
        if self.limit < 0 {
            return Err(Error::invalid_argument("limit must not be less than 0"));
        }

        let offset = usize::try_from(self.offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        Ok((offset, limit))
    }
}

impl fmt::Display for PaginationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "offset={} limit={}", self.offset, self.limit)
    }
}

/// Query arguments as they arrive on the wire
///
/// A missing offset means the start of the listing and a missing limit means
/// no bound. Both are still applied, so a page built from these arguments
/// always reports both as honored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryArgs {
    /// Optional offset
    #[serde(default)]
    pub offset: Option<i64>,
    /// Optional limit
    #[serde(default)]
    pub limit: Option<i64>,
}

impl QueryArgs {
    /// Resolve defaults into a concrete request
    pub fn into_request(self) -> PaginationRequest {
        PaginationRequest::new(self.offset.unwrap_or(0), self.limit.unwrap_or(i64::MAX))
    }
}

impl From<PaginationRequest> for QueryArgs {
    fn from(request: PaginationRequest) -> Self {
        Self {
            offset: Some(request.offset),
            limit: Some(request.limit),
        }
    }
}

// ============================================================================
// Query Shape
// ============================================================================

/// Shape of an incoming query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Query {
    /// A page of the collection
    Page(PaginationRequest),
    /// A single entry by id (not served)
    Item {
        /// Requested id
        id: u64,
    },
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Query::Page(request) => write!(f, "entries?{request}"),
            Query::Item { id } => write!(f, "entries/{id}"),
        }
    }
}

// ============================================================================
// Response
// ============================================================================

/// One page of results
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Entries in listing order
    pub entries: Vec<Entry>,
    /// Number of entries in the store when the page was built
    pub total_size: usize,
    /// Arguments the paginator applied
    pub honored_arguments: HonoredArgs,
}

impl Page {
    /// Create a page that honored both offset and limit
    pub fn new(entries: Vec<Entry>, total_size: usize) -> Self {
        Self {
            entries,
            total_size,
            honored_arguments: all_query_args(),
        }
    }

    /// Create an empty page
    pub fn empty(total_size: usize) -> Self {
        Self::new(Vec::new(), total_size)
    }

    /// Number of entries in this page
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the page has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
