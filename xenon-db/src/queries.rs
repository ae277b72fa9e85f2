//! Read-back queries over the content table.

use rusqlite::Connection;

use crate::operations::OperationError;

/// Row counts used by the import and analyze summaries.
#[derive(Debug, Clone, Copy)]
pub struct ContentStats {
    pub total: i64,
    /// Rows whose Chinese title differs from the English one.
    pub translated: i64,
}

impl ContentStats {
    /// Translation coverage in percent, 0 when the table is empty.
    pub fn coverage(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.translated as f64 / self.total as f64 * 100.0
        }
    }
}

/// A row from the sample listing shown after an import.
#[derive(Debug, Clone)]
pub struct SampleRow {
    pub title: Option<String>,
    pub title_cn: Option<String>,
    pub platform: Option<String>,
}

/// Count rows and translated rows.
pub fn content_stats(conn: &Connection) -> Result<ContentStats, OperationError> {
    let total: i64 = conn.query_row("SELECT COUNT(*) FROM ContentItems", [], |row| row.get(0))?;
    let translated: i64 = conn.query_row(
        "SELECT COUNT(*) FROM ContentItems WHERE Title_cn IS NOT NULL AND Title_cn != Title",
        [],
        |row| row.get(0),
    )?;
    Ok(ContentStats { total, translated })
}

/// First rows of the table, in insertion order.
pub fn sample_rows(conn: &Connection, limit: i64) -> Result<Vec<SampleRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT Title, Title_cn, Platform FROM ContentItems ORDER BY Id LIMIT ?1",
    )?;
    let rows = stmt
        .query_map([limit], |row| {
            Ok(SampleRow {
                title: row.get(0)?,
                title_cn: row.get(1)?,
                platform: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(rows)
}
