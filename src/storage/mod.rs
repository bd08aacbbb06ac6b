//! Storage module for the page index
//!
//! The crawler forwards every fetched page to a [`PageIndex`]. The SQLite
//! implementation keeps a `webpages` table plus an FTS5 full-text index that
//! the search front-end queries.

mod schema;
mod sqlite;
mod traits;

pub use sqlite::SqliteIndex;
pub use traits::{PageIndex, StorageError, StorageResult};

use std::path::Path;

/// Opens the index database, creating it if needed
///
/// Failure here is fatal for a crawl: nothing is fetched without an index.
pub fn open_index(path: &Path) -> StorageResult<SqliteIndex> {
    SqliteIndex::new(path)
}

/// Represents an indexed page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    pub url: String,
    pub title: Option<String>,
    pub content: Option<String>,
    pub indexed_at: String,
}
