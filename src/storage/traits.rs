//! Storage traits and error types
//!
//! This module defines the trait interface for the index store the crawler
//! feeds, and the associated error types.

use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Page not found: {0}")]
    PageNotFound(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// The index the crawler hands fetched pages to
///
/// Pages are keyed by URL. Upserting a URL that is already present replaces
/// its title and content.
pub trait PageIndex {
    /// Inserts or replaces a page
    ///
    /// # Arguments
    ///
    /// * `url` - The page URL (the key)
    /// * `title` - The page title, if one was found
    /// * `content` - The raw page body, if any
    fn upsert_page(
        &mut self,
        url: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StorageResult<()>;
}
