//! Browse session
//!
//! Owns the client-side state of one browsing session and drives the
//! trigger → provider → accumulator loop.

use super::accumulator::{PageAccumulator, ResultSnapshot};
use super::trigger::FetchTrigger;
use super::types::{FetchOutcome, FetchSummary, PlannedFetch, SessionConfig, SessionStats};
use crate::error::{Error, Result};
use crate::pagination::{Page, PageProvider, PaginationRequest};
use crate::store::EntrySource;
use std::sync::Arc;
use std::time::Duration;

/// Single-writer browsing session over a page provider
///
/// Methods take `&mut self`, so at most one fetch is outstanding per
/// session. A failed fetch leaves the accumulated entries and total size
/// untouched. Entries are appended contiguously: a re-requested page only
/// contributes the entries past those already fetched.
pub struct BrowseSession<S> {
    /// Shared provider
    provider: Arc<PageProvider<S>>,
    /// Entries fetched so far
    accumulator: PageAccumulator,
    /// Next-request planning
    trigger: FetchTrigger,
    /// Optional per-fetch time budget
    fetch_timeout: Option<Duration>,
    /// Counters
    stats: SessionStats,
}

impl<S: EntrySource + 'static> BrowseSession<S> {
    /// Create a session; nothing is fetched until `start`
    pub fn new(provider: Arc<PageProvider<S>>, config: &SessionConfig) -> Result<Self> {
        Ok(Self {
            provider,
            accumulator: PageAccumulator::new(),
            trigger: FetchTrigger::new(config.page_size, config.policy)?,
            fetch_timeout: config.fetch_timeout_ms.map(Duration::from_millis),
            stats: SessionStats::new(),
        })
    }

    /// Discard everything and fetch the first page
    pub async fn start(&mut self) -> Result<FetchOutcome> {
        self.accumulator.reset();
        self.stats = SessionStats::new();

        let planned = self.trigger.first_page();
        self.fetch(planned).await
    }

    /// Report consumption progress and fetch more if needed
    pub async fn on_scroll(&mut self, last_visible_index: usize) -> Result<FetchOutcome> {
        let fetched = self.accumulator.fetched_count();
        let Some(planned) = self.trigger.plan(last_visible_index, fetched) else {
            return Ok(FetchOutcome::NotNeeded);
        };

        tracing::debug!(
            "Fetch new entries. Last visible: {}, fetched: {}",
            last_visible_index,
            fetched
        );

        self.fetch(planned).await
    }

    async fn fetch(&mut self, planned: PlannedFetch) -> Result<FetchOutcome> {
        let mut page = match self.run_query(planned.request).await {
            Ok(page) => page,
            Err(e) => {
                self.stats.add_failure();
                tracing::warn!("Fetch {} failed: {}", planned.request, e);
                return Err(e);
            }
        };

        let returned = page.len();
        let total_size = page.total_size;
        let before = self.accumulator.fetched_count();

        // Plans never start past `before`; drop the entries already held
        let offset = usize::try_from(planned.request.offset).unwrap_or(usize::MAX);
        let overlap = before.saturating_sub(offset).min(returned);
        page.entries.drain(..overlap);

        let count = page.len();
        self.accumulator.append_page(page);

        if returned == 0 {
            self.stats.add_empty();
            return Ok(FetchOutcome::Empty { total_size });
        }
        if count == 0 {
            self.stats.add_skipped();
            tracing::debug!("Page {} has nothing past entry {}", planned.page_id, before);
            return Ok(FetchOutcome::AlreadyLoaded {
                page_id: planned.page_id,
            });
        }

        self.stats.add_page(count);

        let summary = FetchSummary {
            page_id: planned.page_id,
            first: before + 1,
            last: before + count,
            count,
            total_size,
        };
        tracing::info!("{}", summary);

        Ok(FetchOutcome::Fetched(summary))
    }

    /// Run the query on the blocking pool, under the timeout if one is set
    async fn run_query(&self, request: PaginationRequest) -> Result<Page> {
        let provider = Arc::clone(&self.provider);
        let task = tokio::task::spawn_blocking(move || provider.query(&request));

        let joined = match self.fetch_timeout {
            Some(limit) => tokio::time::timeout(limit, task)
                .await
                .map_err(|_| Error::Timeout {
                    timeout_ms: limit.as_millis() as u64,
                })?,
            None => task.await,
        };

        joined.map_err(|e| Error::Other(format!("Fetch task failed: {e}")))?
    }

    /// Get the accumulated entries
    pub fn accumulator(&self) -> &PageAccumulator {
        &self.accumulator
    }

    /// Owned copy of the accumulated entries
    pub fn snapshot(&self) -> ResultSnapshot {
        self.accumulator.snapshot()
    }

    /// Get statistics
    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Get the fetch trigger
    pub fn trigger(&self) -> &FetchTrigger {
        &self.trigger
    }

    /// Get the provider
    pub fn provider(&self) -> &Arc<PageProvider<S>> {
        &self.provider
    }
}
