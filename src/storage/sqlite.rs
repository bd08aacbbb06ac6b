//! SQLite storage implementation
//!
//! This module provides a SQLite-based implementation of the PageIndex trait.

use crate::storage::schema::{get_schema_version, initialize_schema};
use crate::storage::traits::{PageIndex, StorageError, StorageResult};
use crate::storage::PageRecord;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

const UPSERT_SQL: &str = "INSERT INTO webpages (url, title, content, indexed_at) VALUES (?1, ?2, ?3, ?4)
     ON CONFLICT(url) DO UPDATE SET
         title = excluded.title,
         content = excluded.content,
         indexed_at = excluded.indexed_at";

/// SQLite index backend
///
/// Owns a single connection; it is closed when the index is dropped.
pub struct SqliteIndex {
    conn: Connection,
}

impl SqliteIndex {
    /// Opens (creating if needed) the index database at `path`
    ///
    /// # Returns
    ///
    /// * `Ok(SqliteIndex)` - Successfully opened/created database
    /// * `Err(StorageError)` - Failed to open database or apply the schema
    pub fn new(path: &Path) -> StorageResult<Self> {
        let conn = Connection::open(path)?;

        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;
            PRAGMA synchronous = NORMAL;
            PRAGMA temp_store = MEMORY;
        ",
        )?;

        Self::with_connection(conn)
    }

    /// Creates an in-memory index (for testing)
    pub fn new_in_memory() -> StorageResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StorageResult<Self> {
        initialize_schema(&conn)?;
        conn.pragma_update(None, "user_version", get_schema_version())?;
        Ok(Self { conn })
    }

    /// Gets an indexed page by URL
    pub fn get_page(&self, url: &str) -> StorageResult<Option<PageRecord>> {
        let mut stmt = self.conn.prepare_cached(
            "SELECT url, title, content, indexed_at FROM webpages WHERE url = ?1",
        )?;

        let page = stmt
            .query_row(params![url], |row| {
                Ok(PageRecord {
                    url: row.get(0)?,
                    title: row.get(1)?,
                    content: row.get(2)?,
                    indexed_at: row.get(3)?,
                })
            })
            .optional()?;

        Ok(page)
    }

    /// Gets an indexed page by URL, failing if it is absent
    pub fn require_page(&self, url: &str) -> StorageResult<PageRecord> {
        self.get_page(url)?
            .ok_or_else(|| StorageError::PageNotFound(url.to_string()))
    }

    /// Counts the indexed pages
    pub fn count_pages(&self) -> StorageResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM webpages", [], |row| row.get(0))?;
        Ok(count as u64)
    }
}

impl PageIndex for SqliteIndex {
    fn upsert_page(
        &mut self,
        url: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> StorageResult<()> {
        let now = Utc::now().to_rfc3339();
        let mut stmt = self.conn.prepare_cached(UPSERT_SQL)?;
        stmt.execute(params![url, title, content, now])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_in_memory() {
        let index = SqliteIndex::new_in_memory();
        assert!(index.is_ok());
    }

    #[test]
    fn test_create_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.db");

        {
            let mut index = SqliteIndex::new(&path).unwrap();
            index
                .upsert_page("https://x.com/", Some("Home"), Some("<html></html>"))
                .unwrap();
        }

        let reopened = SqliteIndex::new(&path).unwrap();
        assert_eq!(reopened.count_pages().unwrap(), 1);
    }

    #[test]
    fn test_open_fails_for_missing_directory() {
        let result = SqliteIndex::new(Path::new("/nonexistent/dir/index.db"));
        assert!(result.is_err());
    }

    #[test]
    fn test_upsert_inserts() {
        let mut index = SqliteIndex::new_in_memory().unwrap();
        index
            .upsert_page("https://x.com/a", Some("A"), Some("body a"))
            .unwrap();

        let page = index.require_page("https://x.com/a").unwrap();
        assert_eq!(page.url, "https://x.com/a");
        assert_eq!(page.title.as_deref(), Some("A"));
        assert_eq!(page.content.as_deref(), Some("body a"));
        assert!(!page.indexed_at.is_empty());
    }

    #[test]
    fn test_upsert_overwrites() {
        let mut index = SqliteIndex::new_in_memory().unwrap();
        index
            .upsert_page("https://x.com/a", Some("Old"), Some("old body"))
            .unwrap();
        index
            .upsert_page("https://x.com/a", None, Some("new body"))
            .unwrap();

        assert_eq!(index.count_pages().unwrap(), 1);
        let page = index.require_page("https://x.com/a").unwrap();
        assert_eq!(page.title, None);
        assert_eq!(page.content.as_deref(), Some("new body"));
    }

    #[test]
    fn test_missing_page() {
        let index = SqliteIndex::new_in_memory().unwrap();
        assert!(index.get_page("https://x.com/none").unwrap().is_none());
        assert!(matches!(
            index.require_page("https://x.com/none"),
            Err(StorageError::PageNotFound(_))
        ));
    }

    #[test]
    fn test_count_pages() {
        let mut index = SqliteIndex::new_in_memory().unwrap();
        assert_eq!(index.count_pages().unwrap(), 0);

        index.upsert_page("https://x.com/1", None, Some("1")).unwrap();
        index.upsert_page("https://x.com/2", None, Some("2")).unwrap();
        assert_eq!(index.count_pages().unwrap(), 2);
    }
}
