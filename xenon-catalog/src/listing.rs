//! Tab-delimited game listing parser.
//!
//! Listings (`xbox360.txt`, `xbox360live.txt`) carry one game per
//! line: Title ID, title, developer, category, and an optional release
//! year, separated by tabs. The first line is a column header.

use std::path::Path;

use crate::json::CatalogError;
use crate::types::{ListingEntry, ListingIndex};

/// Parse one listing file into entries, in row order.
///
/// Duplicate IDs within the file are kept here; deduplication happens
/// in [`load_listings`] so the first-write-wins rule spans files.
pub fn parse_listing_file(path: &Path) -> Result<Vec<ListingEntry>, CatalogError> {
    let contents = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(parse_listing(&contents))
}

/// Parse listing content from a string.
///
/// The header row and blank lines are discarded. Fields are trimmed
/// and empty fields dropped, so consecutive tabs collapse. A row needs
/// at least 4 remaining fields (ID, title, developer, category); a 5th
/// is the release year. Shorter rows are skipped with a warning.
pub fn parse_listing(content: &str) -> Vec<ListingEntry> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .quoting(false)
        .from_reader(content.as_bytes());

    let mut entries = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed listing row: {e}");
                continue;
            }
        };

        let fields: Vec<&str> = record
            .iter()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();

        if fields.is_empty() {
            continue;
        }
        if fields.len() < 4 {
            log::warn!(
                "Skipping listing row with {} field(s), need at least 4: {:?}",
                fields.len(),
                fields[0],
            );
            continue;
        }

        entries.push(ListingEntry {
            title_id: fields[0].to_lowercase(),
            title: fields[1].to_string(),
            developer: fields[2].to_string(),
            category: fields[3].to_string(),
            year: fields.get(4).copied().unwrap_or_default().to_string(),
        });
    }

    entries
}

/// Load and merge several listing files into one index.
///
/// A missing or unreadable file is skipped with a warning rather than
/// failing the run. The first row seen for an ID wins across all files.
pub fn load_listings<P: AsRef<Path>>(paths: &[P]) -> ListingIndex {
    let mut index = ListingIndex::default();

    for path in paths {
        let path = path.as_ref();
        let entries = match parse_listing_file(path) {
            Ok(entries) => entries,
            Err(e) => {
                log::warn!("Skipping listing file: {e}");
                continue;
            }
        };

        log::debug!("Parsed {} row(s) from {}", entries.len(), path.display());

        for entry in entries {
            index.insert(entry);
        }
    }

    index
}
