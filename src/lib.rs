// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # dirpage
//!
//! Offset/limit paging over a directory of files, with a client-side session
//! that fetches one page at a time as the consumer scrolls.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use dirpage::pagination::{PageProvider, PaginationRequest};
//! use dirpage::store::DirectoryStore;
//!
//! let provider = PageProvider::new(DirectoryStore::new("./images"));
//! let page = provider.query(&PaginationRequest::new(20, 10))?;
//! println!("{} of {}", page.len(), page.total_size);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                         CLI / HTTP                           │
//! │   seed   query   browse   serve (GET /entries?offset&limit)  │
//! └──────────────────────────────────────────────────────────────┘
//!                 │                              │
//! ┌───────────────┴──────────────┐   ┌───────────┴──────────────┐
//! │           Session            │   │        Pagination        │
//! ├──────────────────────────────┤   ├──────────────────────────┤
//! │ FetchTrigger  (when / what)  │──▶│ PageProvider::query      │
//! │ PageAccumulator (append)     │   │ Page {entries, total}    │
//! └──────────────────────────────┘   └──────────────────────────┘
//!                                                │
//!                                    ┌───────────┴──────────────┐
//!                                    │          Store           │
//!                                    │ DirectoryStore  Memory   │
//!                                    └──────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Core types shared across modules
pub mod types;

/// Backing store enumeration
pub mod store;

/// Offset/limit pagination
pub mod pagination;

/// Client session (accumulator and fetch trigger)
pub mod session;

/// Application configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use pagination::{Page, PageProvider, PaginationRequest};
pub use session::{BrowseSession, FetchOutcome, FetchPolicy, SessionConfig};
pub use store::{DirectoryStore, EntrySource, MemoryStore};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
