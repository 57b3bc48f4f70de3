//! Page provider
//!
//! Answers offset/limit queries by slicing a fresh enumeration of the store.

use super::types::{Page, PaginationRequest, Query};
use crate::error::{Error, Result};
use crate::store::EntrySource;

/// Serves pages over a backing store
///
/// Every query re-lists the whole store, so the cost is linear in the store
/// size and `total_size` reflects the store at query time.
#[derive(Debug, Clone)]
pub struct PageProvider<S> {
    source: S,
}

impl<S: EntrySource> PageProvider<S> {
    /// Create a provider over the given store
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Get the backing store
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Return the page described by `request`
    ///
    /// An offset at or past the end yields an empty page, and the slice end
    /// is clamped to the store size.
    pub fn query(&self, request: &PaginationRequest) -> Result<Page> {
        let (offset, limit) = request.validate()?;
        tracing::debug!("Query {} against {}", request, self.source.describe());

        let mut all = self.source.list_all()?;
        let total_size = all.len();

        if offset >= total_size {
            return Ok(Page::empty(total_size));
        }

        let end = offset.saturating_add(limit).min(total_size);
        let entries: Vec<_> = all.drain(offset..end).collect();
        tracing::trace!(
            "Returning {} of {} entries ({}..{})",
            entries.len(),
            total_size,
            offset,
            end
        );

        Ok(Page::new(entries, total_size))
    }

    /// Dispatch a query by shape
    ///
    /// Only page queries are served; single-entry lookups fail fast.
    pub fn resolve(&self, query: &Query) -> Result<Page> {
        match query {
            Query::Page(request) => self.query(request),
            Query::Item { .. } => Err(Error::unsupported_query(query.to_string())),
        }
    }
}
