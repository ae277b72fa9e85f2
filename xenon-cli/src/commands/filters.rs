use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

/// Generate the Lua filter files, genre summary, and statistics file.
pub(crate) fn run_filters(
    listings: Vec<PathBuf>,
    out_dir: PathBuf,
    genres: PathBuf,
) -> Result<(), CliError> {
    let index = xenon_catalog::load_listings(&listings);
    if index.is_empty() {
        log::warn!("No listing entries parsed; nothing to generate");
        return Ok(());
    }
    log::info!(
        "Loaded {} listing entry(ies) from {} file(s)",
        index.len(),
        listings.len(),
    );

    let categories = xenon_filters::write_genre_summary(&index, &genres)?;
    log::info!(
        "  {} {} category(ies) written to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        categories,
        genres.display(),
    );

    let stats = xenon_filters::generate_filters(&index, &out_dir)?;
    log::info!(
        "  {} {} filter file(s) covering {} game(s) in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        stats.files,
        stats.entries,
        out_dir.display(),
    );
    if stats.excluded > 0 {
        log::warn!(
            "  {} {} entry(ies) excluded (Title ID is not 8 hex characters)",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            stats.excluded,
        );
    }

    Ok(())
}
