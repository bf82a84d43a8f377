//! SQLite access for the definition store.
//!
//! Every request opens its own connection against [`DB_PATH`]; all query
//! helpers take `&Connection` so the same code runs against
//! `Connection::open_in_memory()` in tests.

use common::model::error::ValidationError;
use rusqlite::Connection;
use thiserror::Error;

pub const DB_PATH: &str = "gradway.sqlite";

/// Failure taxonomy for store operations. Service handlers translate these
/// into HTTP statuses: validation-class errors become 400, `NotFound` 404,
/// everything else 503.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(#[from] ValidationError),
    #[error("Table {0} not found")]
    NotFound(i64),
    #[error("Detail page {0} does not exist")]
    UnknownDetailPage(i64),
    #[error(transparent)]
    Database(#[from] rusqlite::Error),
    #[error("Corrupt table payload: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub fn open() -> Result<Connection, StoreError> {
    let conn = Connection::open(DB_PATH)?;
    conn.pragma_update(None, "foreign_keys", "ON")?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS detail_pages (
             id INTEGER PRIMARY KEY,
             title TEXT NOT NULL,
             slug TEXT NOT NULL UNIQUE
         );
         CREATE TABLE IF NOT EXISTS dynamic_tables (
             id INTEGER PRIMARY KEY,
             title TEXT NOT NULL,
             description TEXT,
             icon_url TEXT,
             detail_page_id INTEGER NOT NULL REFERENCES detail_pages(id),
             columns TEXT NOT NULL,
             rows TEXT NOT NULL,
             created_at TEXT NOT NULL,
             updated_at TEXT NOT NULL
         );",
    )?;
    Ok(())
}

/// First-run convenience: the builder needs at least one catalog page to
/// attach tables to.
pub fn seed_detail_pages(conn: &Connection) -> Result<(), StoreError> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM detail_pages", [], |row| row.get(0))?;
    if count == 0 {
        conn.execute_batch(
            "INSERT INTO detail_pages (title, slug) VALUES
                 ('Master programs in Germany', 'masters-germany'),
                 ('Undergraduate programs in Canada', 'undergrad-canada'),
                 ('Language schools in Japan', 'language-japan');",
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_init_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
    }

    #[test]
    fn seeding_runs_once() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        seed_detail_pages(&conn).unwrap();
        let first: i64 = conn
            .query_row("SELECT COUNT(*) FROM detail_pages", [], |row| row.get(0))
            .unwrap();
        assert!(first > 0);

        seed_detail_pages(&conn).unwrap();
        let second: i64 = conn
            .query_row("SELECT COUNT(*) FROM detail_pages", [], |row| row.get(0))
            .unwrap();
        assert_eq!(first, second);
    }
}
