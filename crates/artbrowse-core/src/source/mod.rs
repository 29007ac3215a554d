//! Remote catalog source trait and implementations.

pub mod artic;
pub mod mock;

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use crate::{FetchError, Page};

pub use artic::{ArticCatalog, DEFAULT_BASE_URL, FIELDS};

/// Boxed future returned by [`CatalogSource::fetch_page`].
pub type FetchFuture<'a> = Pin<Box<dyn Future<Output = Result<Page, FetchError>> + Send + 'a>>;

/// A paginated, read-only record source.
pub trait CatalogSource: Send + Sync {
    /// Human-readable name of this source (e.g., "Art Institute of Chicago").
    fn name(&self) -> &str;

    /// Fetch page `page` (1-based) holding at most `limit` records.
    fn fetch_page<'a>(
        &'a self,
        page: u32,
        limit: u32,
        client: &'a reqwest::Client,
        timeout: Duration,
    ) -> FetchFuture<'a>;
}
