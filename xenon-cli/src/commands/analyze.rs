use std::collections::HashMap;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use xenon_catalog::UNKNOWN_DEVELOPER;

use crate::CliError;

/// Report statistics over an enriched catalog.
pub(crate) fn run_analyze(games: PathBuf, translations: PathBuf) -> Result<(), CliError> {
    let catalog = xenon_catalog::load_catalog(&games)?;
    let table = xenon_catalog::load_translations(&translations)?;

    let total = catalog.len();
    let with_cn = catalog.iter().filter(|g| g.has_translation()).count();

    let mut platform_count: HashMap<&str, usize> = HashMap::new();
    let mut developer_count: HashMap<&str, usize> = HashMap::new();
    let mut id_count: HashMap<String, usize> = HashMap::new();

    for game in &catalog {
        let platform = if game.platform.is_empty() {
            "Unknown"
        } else {
            game.platform.as_str()
        };
        *platform_count.entry(platform).or_default() += 1;

        if let Some(dev) = game.developer.as_deref() {
            if !dev.is_empty() && dev != UNKNOWN_DEVELOPER {
                *developer_count.entry(dev).or_default() += 1;
            }
        }

        if !game.title_id.is_empty() {
            *id_count.entry(game.normalized_id()).or_default() += 1;
        }
    }

    log::info!(
        "{}",
        "Catalog report".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Total games:        {:>6}", total);
    log::info!("  With Chinese title: {:>6}", with_cn);
    log::info!("  Without:            {:>6}", total - with_cn);
    if total > 0 {
        log::info!(
            "  Coverage:           {:>5.2}%",
            with_cn as f64 / total as f64 * 100.0,
        );
    }

    log::info!("");
    log::info!("{}", "Platforms".if_supports_color(Stdout, |t| t.bold()));
    for (platform, count) in sorted_by_count(&platform_count) {
        log::info!("  {platform}: {count}");
    }

    log::info!("");
    log::info!(
        "{}",
        "Top developers".if_supports_color(Stdout, |t| t.bold()),
    );
    for (developer, count) in sorted_by_count(&developer_count).into_iter().take(20) {
        log::info!("  {developer}: {count}");
    }

    let duplicates: HashMap<&str, usize> = id_count
        .iter()
        .filter(|&(_, &count)| count > 1)
        .map(|(id, &count)| (id.as_str(), count))
        .collect();
    log::info!("");
    log::info!(
        "{}",
        "Duplicate Title IDs".if_supports_color(Stdout, |t| t.bold()),
    );
    if duplicates.is_empty() {
        log::info!("  none found");
    } else {
        for (id, count) in sorted_by_count(&duplicates) {
            log::info!("  {id}: {count} occurrence(s)");
        }
    }

    let titles: std::collections::HashSet<&str> =
        catalog.iter().map(|g| g.title.as_str()).collect();
    let unused: Vec<&str> = table.titles().filter(|t| !titles.contains(t)).collect();
    log::info!("");
    log::info!(
        "{}",
        "Translation table usage".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Total translations: {:>6}", table.len());
    log::info!("  Used:               {:>6}", table.len() - unused.len());
    log::info!("  Unused:             {:>6}", unused.len());
    for title in unused.iter().take(10) {
        log::info!("    - {title}");
    }

    Ok(())
}

/// Sort a count map by descending count, then name for stable output.
fn sorted_by_count<'a>(counts: &HashMap<&'a str, usize>) -> Vec<(&'a str, usize)> {
    let mut entries: Vec<(&str, usize)> = counts.iter().map(|(&k, &v)| (k, v)).collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    entries
}
