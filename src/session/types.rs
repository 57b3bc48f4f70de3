//! Session types
//!
//! Configuration, planning and outcome types for a browsing session.

use crate::pagination::PaginationRequest;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the trigger picks the next request once more data is needed
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "snake_case")]
pub enum FetchPolicy {
    /// Request `page_size` entries starting at the fetched count
    #[default]
    NextUnseen,
    /// Request the page-aligned block containing the last visible index
    ContainingPage,
}

/// Configuration for a browsing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Entries per request
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Next-request policy
    #[serde(default)]
    pub policy: FetchPolicy,

    /// Per-fetch timeout in milliseconds (none = wait indefinitely)
    #[serde(default)]
    pub fetch_timeout_ms: Option<u64>,

    /// Freeze the store listing once per session
    #[serde(default)]
    pub snapshot: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            policy: FetchPolicy::default(),
            fetch_timeout_ms: None,
            snapshot: false,
        }
    }
}

fn default_page_size() -> usize {
    10
}

impl SessionConfig {
    /// Create a new session config
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set page size
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Set fetch policy
    #[must_use]
    pub fn with_policy(mut self, policy: FetchPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set fetch timeout
    #[must_use]
    pub fn with_fetch_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.fetch_timeout_ms = Some(timeout_ms);
        self
    }
}

/// A request chosen by the fetch trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlannedFetch {
    /// Page index (`offset / page_size`)
    pub page_id: usize,
    /// Request to send
    pub request: PaginationRequest,
}

/// Progress report for one appended page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FetchSummary {
    /// Page index of the request
    pub page_id: usize,
    /// 1-based position of the first appended entry
    pub first: usize,
    /// 1-based position of the last appended entry
    pub last: usize,
    /// Entries appended
    pub count: usize,
    /// Store size reported with the page
    pub total_size: usize,
}

impl fmt::Display for FetchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fetched entries {} to {} out of {}",
            self.first, self.last, self.total_size
        )
    }
}

/// Result of asking the session for more data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Consumption has not reached the end of the fetched entries
    NotNeeded,
    /// The planned page held no entries past those already fetched
    AlreadyLoaded {
        /// Page index that was re-requested
        page_id: usize,
    },
    /// A non-empty page was appended
    Fetched(FetchSummary),
    /// The store returned no entries for the planned offset
    Empty {
        /// Store size reported with the empty page
        total_size: usize,
    },
}

impl FetchOutcome {
    /// Check if entries were appended
    pub fn is_fetched(&self) -> bool {
        matches!(self, Self::Fetched(_))
    }

    /// Check if the store had nothing at the planned offset
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// Counters for one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionStats {
    /// Non-empty pages appended
    pub pages_fetched: usize,
    /// Entries appended
    pub entries_fetched: usize,
    /// Queries that returned no entries
    pub empty_fetches: usize,
    /// Fetches that returned only entries already held
    pub skipped_fetches: usize,
    /// Queries that failed
    pub failed_fetches: usize,
}

impl SessionStats {
    /// Create new stats
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an appended page
    pub fn add_page(&mut self, entries: usize) {
        self.pages_fetched += 1;
        self.entries_fetched += entries;
    }

    /// Record an empty page
    pub fn add_empty(&mut self) {
        self.empty_fetches += 1;
    }

    /// Record a fetch with nothing new
    pub fn add_skipped(&mut self) {
        self.skipped_fetches += 1;
    }

    /// Record a failed fetch
    pub fn add_failure(&mut self) {
        self.failed_fetches += 1;
    }
}
