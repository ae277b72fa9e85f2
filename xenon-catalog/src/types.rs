//! Data model types for the Xbox 360 game catalog.
//!
//! These types mirror the JSON shapes the Aurora tooling exchanges:
//! the game catalog array, the title-translation table, and the
//! tab-delimited listing rows used to backfill catalog fields.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Platform string assigned to entries created from listing rows.
pub const DEFAULT_PLATFORM: &str = "Xbox 360";

/// Sentinel developer value meaning "unknown"; treated as absent
/// during enrichment.
pub const UNKNOWN_DEVELOPER: &str = "???";

// ── Game Entry ──────────────────────────────────────────────────────────────

/// A single game record in the JSON catalog.
///
/// Older catalog exports use `"Title ID"` instead of `"TitleID"`; the
/// alias accepts both on input, and output always writes `"TitleID"`.
/// Optional fields absent from the input stay absent on output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameEntry {
    #[serde(rename = "Platform", default)]
    pub platform: String,

    #[serde(rename = "TitleID", alias = "Title ID", default)]
    pub title_id: String,

    #[serde(rename = "Title", default)]
    pub title: String,

    /// Chinese display title, filled by enrichment.
    #[serde(rename = "Title_cn", default, skip_serializing_if = "Option::is_none")]
    pub title_cn: Option<String>,

    #[serde(rename = "Developer", default, skip_serializing_if = "Option::is_none")]
    pub developer: Option<String>,

    #[serde(rename = "Publisher", default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// On-disc folder name used by the dashboard content scanner.
    #[serde(rename = "Folder Title", default, skip_serializing_if = "Option::is_none")]
    pub folder_title: Option<String>,

    #[serde(rename = "Category", default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(rename = "Year", default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
}

impl GameEntry {
    /// Title ID normalized for case-insensitive matching.
    pub fn normalized_id(&self) -> String {
        self.title_id.to_lowercase()
    }

    /// Whether the developer field should accept a backfilled value.
    pub fn needs_developer(&self) -> bool {
        self.developer
            .as_deref()
            .is_none_or(|d| d.is_empty() || d == UNKNOWN_DEVELOPER)
    }

    /// Whether the entry carries an actual translation (not the
    /// English-title fallback).
    pub fn has_translation(&self) -> bool {
        self.title_cn.as_deref().is_some_and(|cn| cn != self.title)
    }
}

// ── Translation Table ───────────────────────────────────────────────────────

/// Lookup table from English title to Chinese title.
///
/// Loaded once from a flat JSON object and never mutated.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TranslationTable(HashMap<String, String>);

impl TranslationTable {
    /// Exact lookup of a title's translation.
    pub fn get(&self, title: &str) -> Option<&str> {
        self.0.get(title).map(String::as_str)
    }

    /// Translation of `title`, falling back to `title` itself.
    pub fn translate<'a>(&'a self, title: &'a str) -> &'a str {
        self.get(title).unwrap_or(title)
    }

    /// All English titles the table knows about.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, String)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

// ── Listing Entry ───────────────────────────────────────────────────────────

/// A row parsed from a tab-delimited game listing.
///
/// Used only to backfill catalog fields or to create new catalog
/// entries when no match exists. `title_id` is always lowercase.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingEntry {
    pub title_id: String,
    pub title: String,
    pub developer: String,
    /// May be empty when the source row had no usable value.
    pub category: String,
    pub year: String,
}

/// Insertion-ordered index of listing entries keyed by normalized
/// title ID. The first row seen for an ID wins; later duplicates are
/// discarded, whether they come from the same file or a later one.
#[derive(Debug, Clone, Default)]
pub struct ListingIndex {
    entries: Vec<ListingEntry>,
    by_id: HashMap<String, usize>,
}

impl ListingIndex {
    /// Insert an entry unless its ID was already seen.
    ///
    /// Returns `false` when the entry was discarded as a duplicate.
    pub fn insert(&mut self, entry: ListingEntry) -> bool {
        if self.by_id.contains_key(&entry.title_id) {
            return false;
        }
        self.by_id.insert(entry.title_id.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Look up an entry by title ID (case-insensitive).
    pub fn get(&self, title_id: &str) -> Option<&ListingEntry> {
        self.by_id
            .get(&title_id.to_lowercase())
            .map(|&i| &self.entries[i])
    }

    pub fn contains(&self, title_id: &str) -> bool {
        self.by_id.contains_key(&title_id.to_lowercase())
    }

    /// Entries in first-encounter order.
    pub fn iter(&self) -> impl Iterator<Item = &ListingEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
