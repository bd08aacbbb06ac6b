//! Database schema definitions
//!
//! This module contains all SQL schema definitions for the Searchlight index.

/// SQL schema for the database
pub const SCHEMA_SQL: &str = r#"
-- Indexed pages, one row per URL
CREATE TABLE IF NOT EXISTS webpages (
    url TEXT PRIMARY KEY,
    title TEXT,
    content TEXT,
    indexed_at TEXT NOT NULL
);

-- Full-text index over title and content for the search front-end
CREATE VIRTUAL TABLE IF NOT EXISTS webpages_fts USING fts5(
    title,
    content,
    content='webpages',
    content_rowid='rowid'
);

CREATE TRIGGER IF NOT EXISTS webpages_ai AFTER INSERT ON webpages BEGIN
    INSERT INTO webpages_fts(rowid, title, content)
    VALUES (new.rowid, new.title, new.content);
END;

CREATE TRIGGER IF NOT EXISTS webpages_ad AFTER DELETE ON webpages BEGIN
    INSERT INTO webpages_fts(webpages_fts, rowid, title, content)
    VALUES ('delete', old.rowid, old.title, old.content);
END;

CREATE TRIGGER IF NOT EXISTS webpages_au AFTER UPDATE ON webpages BEGIN
    INSERT INTO webpages_fts(webpages_fts, rowid, title, content)
    VALUES ('delete', old.rowid, old.title, old.content);
    INSERT INTO webpages_fts(rowid, title, content)
    VALUES (new.rowid, new.title, new.content);
END;
"#;

/// Initializes the database schema
pub fn initialize_schema(conn: &rusqlite::Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Gets the current schema version
pub fn get_schema_version() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use rusqlite::Connection;

    #[test]
    fn test_schema_initializes() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(initialize_schema(&conn).is_ok());
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();
        assert!(initialize_schema(&conn).is_ok());
    }

    #[test]
    fn test_tables_exist_after_init() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        for table in ["webpages", "webpages_fts"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "Table {} should exist", table);
        }
    }

    #[test]
    fn test_fts_follows_updates() {
        let conn = Connection::open_in_memory().unwrap();
        initialize_schema(&conn).unwrap();

        conn.execute(
            "INSERT INTO webpages (url, title, content, indexed_at) VALUES ('u', 'Rust crawler', 'body', 'now')",
            [],
        )
        .unwrap();
        conn.execute("UPDATE webpages SET title = 'Go crawler' WHERE url = 'u'", [])
            .unwrap();

        let rust_hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM webpages_fts WHERE webpages_fts MATCH 'rust'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        let go_hits: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM webpages_fts WHERE webpages_fts MATCH 'go'",
                [],
                |row| row.get(0),
            )
            .unwrap();

        assert_eq!(rust_hits, 0);
        assert_eq!(go_hits, 1);
    }

    #[test]
    fn test_schema_version() {
        assert_eq!(get_schema_version(), 1);
    }
}
