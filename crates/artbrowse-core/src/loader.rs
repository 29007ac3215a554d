//! Page loader: tracks the current page's records and discards stale fetches.
//!
//! Every call to [`PageLoader::request`] hands out a [`PageRequest`] stamped
//! with a fresh sequence number. Only the ticket carrying the latest sequence
//! may touch loader state when it resolves; anything older is dropped
//! unconditionally, errors included. The underlying transport request is never
//! aborted.

use std::time::Duration;

use crate::source::CatalogSource;
use crate::{FetchError, Page, Record};

/// Ticket for one in-flight page fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub seq: u64,
    pub page: u32,
    pub page_size: u32,
}

/// Outcome of feeding a fetch result back into the loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The result belonged to the latest request and was applied.
    Applied,
    /// A newer request superseded this one; the result was discarded.
    Stale,
}

/// State of the currently displayed page.
#[derive(Debug, Clone)]
pub struct PageLoader {
    page: u32,
    page_size: u32,
    records: Vec<Record>,
    total: u64,
    loading: bool,
    error: Option<String>,
    latest_seq: u64,
}

impl PageLoader {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
            records: Vec::new(),
            total: 0,
            loading: false,
            error: None,
            latest_seq: 0,
        }
    }

    /// Start a fetch for `(page, page_size)`. Marks the loader busy, clears
    /// the previous error, and supersedes whatever request was outstanding.
    pub fn request(&mut self, page: u32, page_size: u32) -> PageRequest {
        self.latest_seq += 1;
        self.page = page.max(1);
        self.page_size = page_size.max(1);
        self.loading = true;
        self.error = None;
        tracing::debug!(
            seq = self.latest_seq,
            page = self.page,
            page_size = self.page_size,
            "page requested"
        );
        PageRequest {
            seq: self.latest_seq,
            page: self.page,
            page_size: self.page_size,
        }
    }

    /// Re-issue the current `(page, page_size)`.
    pub fn reload(&mut self) -> PageRequest {
        self.request(self.page, self.page_size)
    }

    /// Apply a fetch result if `request` is still the latest one.
    ///
    /// On failure the previously rendered records and total are kept.
    pub fn resolve(&mut self, request: PageRequest, result: Result<Page, FetchError>) -> Resolution {
        if request.seq != self.latest_seq {
            tracing::debug!(
                seq = request.seq,
                latest = self.latest_seq,
                page = request.page,
                "discarding stale page result"
            );
            return Resolution::Stale;
        }

        match result {
            Ok(page) => {
                tracing::info!(
                    page = request.page,
                    records = page.records.len(),
                    total = page.total,
                    "page loaded"
                );
                self.records = page.records;
                self.total = page.total;
            }
            Err(e) => {
                tracing::warn!(page = request.page, error = %e, "page fetch failed");
                self.error = Some(e.to_string());
            }
        }
        self.loading = false;
        Resolution::Applied
    }

    /// Fetch `(page, page_size)` from `source` and resolve it in one step.
    pub async fn load(
        &mut self,
        source: &dyn CatalogSource,
        client: &reqwest::Client,
        page: u32,
        page_size: u32,
        timeout: Duration,
    ) -> Resolution {
        let request = self.request(page, page_size);
        let result = source
            .fetch_page(request.page, request.page_size, client, timeout)
            .await;
        self.resolve(request, result)
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Number of pages implied by the last known total (at least 1).
    pub fn page_count(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size)).max(1);
        u32::try_from(pages).unwrap_or(u32::MAX)
    }
}
