use std::time::Duration;

use serde::Deserialize;

use super::{CatalogSource, FetchFuture};
use crate::{FetchError, Page, Record};

/// Public API root of the Art Institute of Chicago.
pub const DEFAULT_BASE_URL: &str = "https://api.artic.edu/api/v1";

/// Field projection requested for every page.
pub const FIELDS: &str = "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

const USER_AGENT: &str = concat!("artbrowse/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Deserialize)]
struct ApiResponse {
    data: Vec<Record>,
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: u64,
}

/// The `artworks` collection endpoint of an AIC-compatible API.
pub struct ArticCatalog {
    pub base_url: String,
}

impl ArticCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Full request URL for one page.
    pub fn page_url(&self, page: u32, limit: u32) -> String {
        format!(
            "{}/artworks?page={}&limit={}&fields={}",
            self.base_url.trim_end_matches('/'),
            page,
            limit,
            FIELDS
        )
    }
}

impl Default for ArticCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Decode an `artworks` listing body.
pub fn parse_page(body: &str) -> Result<Page, FetchError> {
    let resp: ApiResponse =
        serde_json::from_str(body).map_err(|e| FetchError::Body(e.to_string()))?;
    Ok(Page {
        records: resp.data,
        total: resp.pagination.total,
    })
}

impl CatalogSource for ArticCatalog {
    fn name(&self) -> &str {
        "Art Institute of Chicago"
    }

    fn fetch_page<'a>(
        &'a self,
        page: u32,
        limit: u32,
        client: &'a reqwest::Client,
        timeout: Duration,
    ) -> FetchFuture<'a> {
        Box::pin(async move {
            let url = self.page_url(page, limit);
            tracing::debug!(%url, "fetching page");

            let resp = client
                .get(&url)
                .header("User-Agent", USER_AGENT)
                .header("AIC-User-Agent", USER_AGENT)
                .timeout(timeout)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            let status = resp.status();
            if !status.is_success() {
                return Err(FetchError::Status(status.as_u16()));
            }

            let body = resp
                .text()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;
            parse_page(&body)
        })
    }
}
