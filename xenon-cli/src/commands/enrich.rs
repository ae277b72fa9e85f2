use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use xenon_import::enrich_catalog;

use crate::CliError;

/// Merge translations and listing data into the catalog and write the
/// enriched JSON.
pub(crate) fn run_enrich(
    games: PathBuf,
    translations: PathBuf,
    listings: Vec<PathBuf>,
    output: PathBuf,
    backup: bool,
) -> Result<(), CliError> {
    let catalog = xenon_catalog::load_catalog(&games)?;
    let table = xenon_catalog::load_translations(&translations)?;
    log::info!(
        "Loaded {} game(s) and {} translation(s)",
        catalog.len(),
        table.len(),
    );

    let index = xenon_catalog::load_listings(&listings);
    if !index.is_empty() {
        log::info!(
            "Loaded {} listing entry(ies) from {} file(s)",
            index.len(),
            listings.len(),
        );
    }

    if backup {
        let backup_path = backup_path(&games);
        std::fs::copy(&games, &backup_path)?;
        log::info!("Backed up catalog to {}", backup_path.display());
    }

    let original = catalog.len();
    let (enriched, stats) = enrich_catalog(catalog, &table, &index);
    xenon_catalog::write_catalog(&output, &enriched)?;

    log::info!(
        "{}",
        "Enrichment complete".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Entries written:    {:>6}", stats.total);
    log::info!("  Original entries:   {:>6}", original);
    log::info!("  Appended entries:   {:>6}", stats.appended);
    log::info!("  Translated titles:  {:>6}", stats.translated);
    log::info!("  Fallback titles:    {:>6}", stats.fallback_titles);
    log::info!("  Fields backfilled:  {:>6}", stats.backfilled);
    log::info!("  Output: {}", output.display());

    Ok(())
}

/// Backup path next to the input:
/// `xbox360_games.json` → `xbox360_games_backup.json`.
fn backup_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("catalog");
    let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("json");
    path.with_file_name(format!("{stem}_backup.{ext}"))
}
