//! Aurora Lua filter generation.
//!
//! One file per category, containing a `GameListFilterCategories.User`
//! predicate that matches any of the category's Title IDs.

use std::collections::HashMap;
use std::path::Path;

use xenon_catalog::types::ListingIndex;

use crate::error::FilterError;
use crate::title_id::title_id_hex;

/// Listing entries grouped by category, in first-encounter order.
///
/// A category keeps its slot even when none of its IDs validate, so
/// the statistics file can report it as zero.
#[derive(Debug, Default)]
pub struct CategoryGroups {
    pub groups: Vec<(String, Vec<String>)>,
    /// Entries dropped because their ID failed hex validation.
    pub excluded: usize,
}

/// Counters from one filter-generation run.
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterStats {
    pub files: usize,
    pub entries: usize,
    pub excluded: usize,
}

/// Group entries by category string (opaque, unvalidated), collecting
/// the hex literal of every valid Title ID.
pub fn group_by_category(listings: &ListingIndex) -> CategoryGroups {
    let mut result = CategoryGroups::default();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for entry in listings.iter() {
        let slot = *slots.entry(entry.category.clone()).or_insert_with(|| {
            result.groups.push((entry.category.clone(), Vec::new()));
            result.groups.len() - 1
        });

        match title_id_hex(&entry.title_id) {
            Some(hex) => result.groups[slot].1.push(hex),
            None => result.excluded += 1,
        }
    }

    result
}

/// Render one category filter in Aurora's Lua syntax.
pub fn render_filter(category: &str, hex_ids: &[String]) -> String {
    let mut lua = format!("GameListFilterCategories.User[\"{category}\"] = function(Content)\nreturn (");

    for (i, hex) in hex_ids.iter().enumerate() {
        if i == 0 {
            lua.push_str(&format!("Content.TitleId == {hex}"));
        } else {
            lua.push_str(&format!("\nor Content.TitleId == {hex}"));
        }
    }

    lua.push_str("\n)\nend\n");
    lua
}

/// Write one `<category>.lua` per category with at least one valid ID,
/// plus the `statistics.txt` summary, into `out_dir`.
pub fn generate_filters(listings: &ListingIndex, out_dir: &Path) -> Result<FilterStats, FilterError> {
    std::fs::create_dir_all(out_dir).map_err(|e| FilterError::io(out_dir, e))?;

    let grouped = group_by_category(listings);
    let mut stats = FilterStats {
        excluded: grouped.excluded,
        ..Default::default()
    };

    for (category, hex_ids) in &grouped.groups {
        if hex_ids.is_empty() {
            continue;
        }
        // The category string is the file name, unsanitized.
        let path = out_dir.join(format!("{category}.lua"));
        std::fs::write(&path, render_filter(category, hex_ids))
            .map_err(|e| FilterError::io(&path, e))?;
        log::debug!("Wrote {} ({} games)", path.display(), hex_ids.len());
        stats.files += 1;
        stats.entries += hex_ids.len();
    }

    crate::report::write_statistics(&grouped.groups, out_dir)?;

    Ok(stats)
}
