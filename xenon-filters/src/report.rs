//! Genre summary and per-category statistics files.

use std::collections::BTreeSet;
use std::path::Path;

use xenon_catalog::types::ListingIndex;

use crate::error::FilterError;

/// Hand-maintained Chinese names for the known category strings.
const CATEGORY_TRANSLATIONS: &[(&str, &str)] = &[
    ("Action", "动作"),
    ("Shooter", "射击"),
    ("Fighting", "格斗"),
    ("Sports", "体育"),
    ("Racing", "赛车"),
    ("Role Playing", "角色扮演"),
    ("Strategy", "策略"),
    ("Music", "音乐"),
    ("Family", "家庭"),
    ("Platformer", "平台"),
    ("Puzzle", "益智"),
    ("Flight", "飞行"),
    ("Kinect", "体感"),
    ("Arcade", "街机"),
    ("Other", "其他"),
    ("Unknown", "未知"),
];

/// Marker written for categories with no maintained translation.
pub const UNTRANSLATED: &str = "未翻译";

fn category_translation(category: &str) -> &'static str {
    CATEGORY_TRANSLATIONS
        .iter()
        .find(|(en, _)| *en == category)
        .map(|(_, cn)| *cn)
        .unwrap_or(UNTRANSLATED)
}

/// Write the genre summary: every distinct category, sorted, with its
/// translation or the untranslated marker. Returns the category count.
pub fn write_genre_summary(listings: &ListingIndex, path: &Path) -> Result<usize, FilterError> {
    let categories: BTreeSet<&str> = listings
        .iter()
        .map(|e| e.category.as_str())
        .filter(|c| !c.is_empty())
        .collect();

    let mut out = String::from("Xbox 360游戏分类列表\n");
    out.push_str(&"=".repeat(30));
    out.push('\n');
    for category in &categories {
        out.push_str(&format!("{} | {}\n", category, category_translation(category)));
    }

    std::fs::write(path, out).map_err(|e| FilterError::io(path, e))?;
    Ok(categories.len())
}

/// Write `statistics.txt`: filter-eligible game counts per category
/// plus a total, sorted by category name.
pub(crate) fn write_statistics(
    groups: &[(String, Vec<String>)],
    out_dir: &Path,
) -> Result<(), FilterError> {
    let mut sorted: Vec<&(String, Vec<String>)> = groups.iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));

    let mut out = String::from("Xbox 360游戏分类统计\n");
    out.push_str(&"=".repeat(40));
    out.push_str("\n\n");

    let mut total = 0;
    for (category, hex_ids) in sorted {
        out.push_str(&format!("{}: {} 个游戏\n", category, hex_ids.len()));
        total += hex_ids.len();
    }
    out.push_str(&format!("\n总计: {total} 个游戏\n"));

    let path = out_dir.join("statistics.txt");
    std::fs::write(&path, out).map_err(|e| FilterError::io(&path, e))
}
