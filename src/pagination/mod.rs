//! Pagination module
//!
//! Offset/limit paging over a backing store.
//!
//! # Overview
//!
//! The pagination module provides:
//! - `PaginationRequest` - Offset and limit, validated as non-negative
//! - `QueryArgs` - Wire form of a request with optional arguments
//! - `Page` - A bounded slice plus total size and honored arguments
//! - `PageProvider` - Slices a fresh enumeration of the store per query

mod provider;
mod types;

pub use provider::PageProvider;
pub use types::{Page, PaginationRequest, Query, QueryArgs};
