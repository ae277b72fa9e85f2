//! Catalog enrichment: translation assignment, listing backfill, and
//! appending of listing-only games.
//!
//! A single pass over the catalog. Values already present are never
//! overwritten, except the `"???"` developer placeholder, which counts
//! as missing.

use std::collections::HashSet;

use xenon_catalog::types::{
    DEFAULT_PLATFORM, GameEntry, ListingEntry, ListingIndex, TranslationTable,
};

/// Counters from one enrichment run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnrichStats {
    /// Entries in the output, including appended ones.
    pub total: u64,
    /// Entries whose title had a translation-table hit.
    pub translated: u64,
    /// Entries that fell back to the English title.
    pub fallback_titles: u64,
    /// Existing entries with at least one field backfilled.
    pub backfilled: u64,
    /// Listing entries appended as new games.
    pub appended: u64,
}

/// Enrich the catalog with translations and listing data.
///
/// Every entry gets a `title_cn` (table hit or the title itself).
/// Entries whose ID matches a listing row have developer, category,
/// and year backfilled where missing. Listing rows with no catalog
/// match are appended as new entries, in first-encounter order, after
/// the original sequence.
pub fn enrich_catalog(
    mut games: Vec<GameEntry>,
    translations: &TranslationTable,
    listings: &ListingIndex,
) -> (Vec<GameEntry>, EnrichStats) {
    let mut stats = EnrichStats::default();

    let known_ids: HashSet<String> = games
        .iter()
        .filter(|g| !g.title_id.is_empty())
        .map(|g| g.normalized_id())
        .collect();

    for game in &mut games {
        apply_translation(game, translations, &mut stats);

        if game.title_id.is_empty() {
            continue;
        }
        if let Some(entry) = listings.get(&game.title_id) {
            if backfill(game, entry) {
                stats.backfilled += 1;
            }
        }
    }

    for entry in listings.iter() {
        if known_ids.contains(&entry.title_id) {
            continue;
        }
        let mut game = new_entry(entry);
        apply_translation(&mut game, translations, &mut stats);
        games.push(game);
        stats.appended += 1;
    }

    stats.total = games.len() as u64;
    (games, stats)
}

fn apply_translation(game: &mut GameEntry, translations: &TranslationTable, stats: &mut EnrichStats) {
    match translations.get(&game.title) {
        Some(cn) => {
            game.title_cn = Some(cn.to_string());
            stats.translated += 1;
        }
        None => {
            game.title_cn = Some(game.title.clone());
            stats.fallback_titles += 1;
        }
    }
}

/// Fill missing fields from a listing entry. Returns whether anything
/// changed.
fn backfill(game: &mut GameEntry, entry: &ListingEntry) -> bool {
    let mut changed = false;

    if game.needs_developer() && !entry.developer.is_empty() {
        game.developer = Some(entry.developer.clone());
        changed = true;
    }
    if is_blank(&game.category) && !entry.category.is_empty() {
        game.category = Some(entry.category.clone());
        changed = true;
    }
    if is_blank(&game.year) && !entry.year.is_empty() {
        game.year = Some(entry.year.clone());
        changed = true;
    }

    changed
}

/// Build a catalog entry for a listing row with no catalog match.
///
/// The listings carry no publisher column, so the publisher is an
/// empty string, matching the exported JSON shape.
fn new_entry(entry: &ListingEntry) -> GameEntry {
    GameEntry {
        platform: DEFAULT_PLATFORM.to_string(),
        title_id: entry.title_id.clone(),
        title: entry.title.clone(),
        title_cn: None,
        developer: Some(entry.developer.clone()),
        publisher: Some(String::new()),
        folder_title: None,
        category: non_empty(&entry.category),
        year: non_empty(&entry.year),
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
