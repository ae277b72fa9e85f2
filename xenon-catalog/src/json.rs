//! JSON loading and saving for the catalog and translation table.

use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::types::{GameEntry, TranslationTable};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error in {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

impl CatalogError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    fn json(path: &Path, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Load the game catalog from a JSON array file.
pub fn load_catalog(path: &Path) -> Result<Vec<GameEntry>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::json(path, e))
}

/// Load the title-translation table from a flat JSON object file.
pub fn load_translations(path: &Path) -> Result<TranslationTable, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
    serde_json::from_str(&contents).map_err(|e| CatalogError::json(path, e))
}

/// Write the catalog as pretty-printed JSON (4-space indent, non-ASCII
/// preserved literally).
///
/// Serialization happens fully in memory before the file is touched, so
/// a failure leaves any previous output file intact.
pub fn write_catalog(path: &Path, games: &[GameEntry]) -> Result<(), CatalogError> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    games
        .serialize(&mut ser)
        .map_err(|e| CatalogError::json(path, e))?;
    std::fs::write(path, buf).map_err(|e| CatalogError::io(path, e))
}
