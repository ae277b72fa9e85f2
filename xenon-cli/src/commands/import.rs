use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Import the enriched catalog into the SQLite content table.
pub(crate) fn run_import(games: PathBuf, db: PathBuf, sample: usize) -> Result<(), CliError> {
    let catalog = xenon_catalog::load_catalog(&games)?;
    log::info!(
        "Importing {} game(s) into {}",
        catalog.len(),
        db.display(),
    );

    let conn = xenon_db::open_database(&db)?;
    let report = xenon_db::import_catalog(&conn, &catalog)?;

    log::info!(
        "  {} {} row(s) inserted",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        report.inserted,
    );
    if !report.failures.is_empty() {
        log::warn!(
            "  {} {} row(s) failed:",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            report.failures.len(),
        );
        for failure in &report.failures {
            log::warn!("    {}: {}", failure.title, failure.reason);
        }
    }

    let stats = xenon_db::content_stats(&conn)?;
    log::info!("");
    log::info!(
        "{}",
        "Database contents".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Total rows:      {:>6}", stats.total);
    log::info!("  Translated rows: {:>6}", stats.translated);
    log::info!("  Coverage:        {:>5.2}%", stats.coverage());

    if sample > 0 {
        let rows = xenon_db::sample_rows(&conn, sample as i64)?;
        if !rows.is_empty() {
            log::info!("");
            log::info!("{}", "Sample".if_supports_color(Stdout, |t| t.bold()));
            for row in &rows {
                log::info!(
                    "  {} | {} | {}",
                    row.title.as_deref().unwrap_or("-"),
                    row.title_cn.as_deref().unwrap_or("-"),
                    row.platform.as_deref().unwrap_or("-"),
                );
            }
        }
    }

    Ok(())
}
