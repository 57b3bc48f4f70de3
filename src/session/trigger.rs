//! Fetch trigger
//!
//! Decides when the next page is needed and which request to send.

use super::types::{FetchPolicy, PlannedFetch};
use crate::error::{Error, Result};
use crate::pagination::PaginationRequest;

/// Check whether consumption has reached the end of the fetched entries
pub fn should_fetch_more(last_visible_index: usize, fetched_count: usize) -> bool {
    last_visible_index >= fetched_count
}

/// Request for the page-aligned block containing `last_visible_index`
///
/// This may re-request entries that are already fetched; `BrowseSession`
/// drops the ones it already holds before appending.
pub fn next_page_request(last_visible_index: usize, page_size: usize) -> Result<PaginationRequest> {
    if page_size == 0 {
        return Err(Error::invalid_argument("page size must be greater than 0"));
    }
    Ok(containing_page(last_visible_index, page_size).request)
}

fn containing_page(last_visible_index: usize, page_size: usize) -> PlannedFetch {
    let page_id = last_visible_index / page_size;
    PlannedFetch {
        page_id,
        request: PaginationRequest::new(to_i64(page_id * page_size), to_i64(page_size)),
    }
}

fn to_i64(value: usize) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

/// Fetch planning with a fixed page size and policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTrigger {
    page_size: usize,
    policy: FetchPolicy,
}

impl FetchTrigger {
    /// Create a trigger; the page size must be non-zero
    pub fn new(page_size: usize, policy: FetchPolicy) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::invalid_argument("page size must be greater than 0"));
        }
        Ok(Self { page_size, policy })
    }

    /// Entries per request
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Next-request policy
    pub fn policy(&self) -> FetchPolicy {
        self.policy
    }

    /// Request for the first page of a session
    pub fn first_page(&self) -> PlannedFetch {
        containing_page(0, self.page_size)
    }

    /// Plan the next fetch, or `None` if more data is not needed yet
    pub fn plan(&self, last_visible_index: usize, fetched_count: usize) -> Option<PlannedFetch> {
        if !should_fetch_more(last_visible_index, fetched_count) {
            return None;
        }

        let planned = match self.policy {
            FetchPolicy::NextUnseen => PlannedFetch {
                page_id: fetched_count / self.page_size,
                request: PaginationRequest::new(to_i64(fetched_count), to_i64(self.page_size)),
            },
            // Never past the fetched entries, so appended pages stay contiguous
            FetchPolicy::ContainingPage => {
                containing_page(last_visible_index.min(fetched_count), self.page_size)
            }
        };
        Some(planned)
    }
}
