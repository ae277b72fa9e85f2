//! SQLite schema creation.

use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// Create the content table if it doesn't exist.
///
/// Idempotent; safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

/// Open or create a content database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL;")?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Open an in-memory database with the schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    create_schema(&conn)?;
    Ok(conn)
}

const SCHEMA_SQL: &str = r#"
-- Aurora content listing. TitleId carries no uniqueness constraint:
-- re-running an import appends duplicate rows.
CREATE TABLE IF NOT EXISTS ContentItems (
    Id INTEGER PRIMARY KEY AUTOINCREMENT,
    TitleId TEXT NOT NULL,
    Title TEXT,
    Title_cn TEXT,
    Developer TEXT,
    Publisher TEXT,
    Platform TEXT,
    FolderTitle TEXT,
    Category TEXT,
    Year TEXT
);
"#;
