//! Client session module
//!
//! Accumulates pages fetched from a `PageProvider` and decides when to
//! fetch more.
//!
//! # Overview
//!
//! The session module provides:
//! - `PageAccumulator` - Append-only list of fetched entries plus total size
//! - `should_fetch_more` / `next_page_request` - Fetch trigger primitives
//! - `FetchTrigger` - Plans requests for a page size and `FetchPolicy`
//! - `BrowseSession` - Explicit per-session state tying the pieces together

mod accumulator;
mod browser;
mod trigger;
mod types;

pub use accumulator::{PageAccumulator, ResultSnapshot};
pub use browser::BrowseSession;
pub use trigger::{next_page_request, should_fetch_more, FetchTrigger};
pub use types::{
    FetchOutcome, FetchPolicy, FetchSummary, PlannedFetch, SessionConfig, SessionStats,
};
