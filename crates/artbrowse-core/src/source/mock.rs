//! Mock catalog source for testing.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use super::{CatalogSource, FetchFuture};
use crate::{FetchError, Page, Record};

/// A configurable mock response for [`MockCatalog`].
#[derive(Clone, Debug)]
pub enum MockResponse {
    /// Return exactly this page.
    Fixed(Page),
    /// Generate sequential ids for the requested page: page `p` of size `k`
    /// holds ids `(p-1)*k+1 ..= min(p*k, total)`.
    Synthetic { total: u64 },
    /// Simulate a failure.
    Error(FetchError),
    /// Wait before producing the inner response.
    Delayed(Duration, Box<MockResponse>),
}

/// A hand-rolled mock implementing [`CatalogSource`] for tests.
///
/// Supports a fixed response for every call, or a sequence consumed one per
/// call (the last is repeated once exhausted).
pub struct MockCatalog {
    /// Remaining responses, stored reversed so `pop()` yields the next one.
    responses: Mutex<Vec<MockResponse>>,
    fallback: MockResponse,
    call_count: AtomicUsize,
}

impl MockCatalog {
    /// Create a mock that always returns `response`.
    pub fn new(response: MockResponse) -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            fallback: response,
            call_count: AtomicUsize::new(0),
        }
    }

    /// Create a mock that returns responses in order, repeating the last one.
    pub fn with_sequence(mut responses: Vec<MockResponse>) -> Self {
        assert!(
            !responses.is_empty(),
            "sequence must have at least one response"
        );
        let fallback = responses[responses.len() - 1].clone();
        responses.reverse();
        Self {
            responses: Mutex::new(responses),
            fallback,
            call_count: AtomicUsize::new(0),
        }
    }

    /// How many times `fetch_page()` has been called.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    fn next_response(&self) -> MockResponse {
        let mut seq = self.responses.lock().unwrap_or_else(|e| e.into_inner());
        seq.pop().unwrap_or_else(|| self.fallback.clone())
    }
}

/// Records with ids `(page-1)*limit+1 ..` capped at `total`.
pub fn synthetic_page(page: u32, limit: u32, total: u64) -> Page {
    let start = u64::from(page.saturating_sub(1)) * u64::from(limit) + 1;
    let end = (start + u64::from(limit)).min(total + 1);
    let records = (start..end)
        .map(|id| Record {
            title: Some(format!("Artwork {id}")),
            ..Record::bare(id)
        })
        .collect();
    Page { records, total }
}

async fn resolve(response: MockResponse, page: u32, limit: u32) -> Result<Page, FetchError> {
    let mut response = response;
    loop {
        match response {
            MockResponse::Fixed(p) => return Ok(p),
            MockResponse::Synthetic { total } => return Ok(synthetic_page(page, limit, total)),
            MockResponse::Error(e) => return Err(e),
            MockResponse::Delayed(d, inner) => {
                tokio::time::sleep(d).await;
                response = *inner;
            }
        }
    }
}

impl CatalogSource for MockCatalog {
    fn name(&self) -> &str {
        "mock"
    }

    fn fetch_page<'a>(
        &'a self,
        page: u32,
        limit: u32,
        _client: &'a reqwest::Client,
        _timeout: Duration,
    ) -> FetchFuture<'a> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let response = self.next_response();
        Box::pin(resolve(response, page, limit))
    }
}
