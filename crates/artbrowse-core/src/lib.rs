use serde::Deserialize;
use thiserror::Error;

pub mod config_file;
pub mod format;
pub mod loader;
pub mod selection;
pub mod source;
pub mod theme;

// Re-export for convenience
pub use loader::{PageLoader, PageRequest, Resolution};
pub use selection::{BulkSelect, SelectionSet};
pub use source::{ArticCatalog, CatalogSource, DEFAULT_BASE_URL, FIELDS};
pub use theme::ThemePreference;

/// Identifier of a catalog record. Unique within the catalog.
pub type RecordId = u64;

/// One artwork as returned by the catalog, projected onto [`FIELDS`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub place_of_origin: Option<String>,
    #[serde(default)]
    pub artist_display: Option<String>,
    #[serde(default)]
    pub inscriptions: Option<String>,
    #[serde(default)]
    pub date_start: Option<i64>,
    #[serde(default)]
    pub date_end: Option<i64>,
}

impl Record {
    /// A record with only an identifier set. Mostly useful in tests.
    pub fn bare(id: RecordId) -> Self {
        Self {
            id,
            title: None,
            place_of_origin: None,
            artist_display: None,
            inscriptions: None,
            date_start: None,
            date_end: None,
        }
    }
}

/// One page of records plus the authoritative total reported by the source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub records: Vec<Record>,
    pub total: u64,
}

/// Why a page fetch failed.
///
/// The loader never distinguishes these beyond their message; the variants
/// exist so sources and tests can say what went wrong.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("{0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Body(String),
}
