//! Row inserts for the content table.

use rusqlite::{Connection, params};
use thiserror::Error;
use xenon_catalog::types::GameEntry;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
}

/// One row that failed to insert during an import.
#[derive(Debug, Clone)]
pub struct RowFailure {
    pub title: String,
    pub reason: String,
}

/// Outcome of a catalog import: how many rows went in, and which
/// didn't, with the reason each failed.
#[derive(Debug, Default)]
pub struct ImportReport {
    pub inserted: u64,
    pub failures: Vec<RowFailure>,
}

impl ImportReport {
    pub fn attempted(&self) -> u64 {
        self.inserted + self.failures.len() as u64
    }
}

/// Insert a single game as a content row.
pub fn insert_game(conn: &Connection, game: &GameEntry) -> Result<(), OperationError> {
    conn.execute(
        "INSERT INTO ContentItems
             (TitleId, Title, Title_cn, Developer, Publisher, Platform, FolderTitle, Category, Year)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            game.title_id,
            game.title,
            game.title_cn,
            game.developer,
            game.publisher,
            game.platform,
            game.folder_title,
            game.category,
            game.year,
        ],
    )?;
    Ok(())
}

/// Import the whole catalog in one transaction.
///
/// A failed row is recorded in the report and the loop continues with
/// the next one; the transaction commits once at the end either way.
pub fn import_catalog(
    conn: &Connection,
    games: &[GameEntry],
) -> Result<ImportReport, OperationError> {
    let mut report = ImportReport::default();
    let tx = conn.unchecked_transaction()?;

    for game in games {
        match insert_game(&tx, game) {
            Ok(()) => report.inserted += 1,
            Err(e) => {
                log::warn!("Failed to insert '{}': {}", game.title, e);
                report.failures.push(RowFailure {
                    title: game.title.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    tx.commit()?;
    Ok(report)
}
