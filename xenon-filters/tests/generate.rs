use xenon_catalog::types::{ListingEntry, ListingIndex};
use xenon_filters::{UNTRANSLATED, generate_filters, group_by_category, write_genre_summary};

fn listing(title_id: &str, title: &str, category: &str) -> ListingEntry {
    ListingEntry {
        title_id: title_id.to_string(),
        title: title.to_string(),
        developer: "Dev".to_string(),
        category: category.to_string(),
        year: "2008".to_string(),
    }
}

fn index(entries: Vec<ListingEntry>) -> ListingIndex {
    let mut index = ListingIndex::default();
    for entry in entries {
        index.insert(entry);
    }
    index
}

#[test]
fn groups_keep_encounter_order_and_exclude_bad_ids() {
    let listings = index(vec![
        listing("4d5307e6", "Halo 3", "Shooter"),
        listing("58410a8b", "Braid", "Puzzle"),
        listing("not-hexes", "Broken", "Shooter"),
        listing("415607d2", "The Orange Box", "Shooter"),
    ]);

    let grouped = group_by_category(&listings);
    assert_eq!(grouped.excluded, 1);
    assert_eq!(grouped.groups.len(), 2);
    assert_eq!(grouped.groups[0].0, "Shooter");
    assert_eq!(
        grouped.groups[0].1,
        vec!["0x4D5307E6".to_string(), "0x415607D2".to_string()]
    );
    assert_eq!(grouped.groups[1].0, "Puzzle");
}

#[test]
fn writes_one_file_per_category_with_valid_ids() {
    let dir = tempfile::tempdir().unwrap();
    let listings = index(vec![
        listing("4d5307e6", "Halo 3", "Shooter"),
        listing("58410a8b", "Braid", "Puzzle"),
        listing("bad-id", "Broken", "Simulation"),
    ]);

    let stats = generate_filters(&listings, dir.path()).unwrap();
    assert_eq!(stats.files, 2);
    assert_eq!(stats.entries, 2);
    assert_eq!(stats.excluded, 1);

    let shooter = std::fs::read_to_string(dir.path().join("Shooter.lua")).unwrap();
    assert_eq!(
        shooter,
        "GameListFilterCategories.User[\"Shooter\"] = function(Content)\n\
         return (Content.TitleId == 0x4D5307E6\n\
         )\n\
         end\n"
    );

    // All of Simulation's ids were invalid, so no file appears for it.
    assert!(!dir.path().join("Simulation.lua").exists());
}

#[test]
fn statistics_file_counts_eligible_games_per_category() {
    let dir = tempfile::tempdir().unwrap();
    let listings = index(vec![
        listing("4d5307e6", "Halo 3", "Shooter"),
        listing("415607d2", "The Orange Box", "Shooter"),
        listing("58410a8b", "Braid", "Puzzle"),
        listing("bad-id", "Broken", "Simulation"),
    ]);

    generate_filters(&listings, dir.path()).unwrap();

    let stats = std::fs::read_to_string(dir.path().join("statistics.txt")).unwrap();
    assert!(stats.starts_with("Xbox 360游戏分类统计\n"));
    assert!(stats.contains("Puzzle: 1 个游戏\n"));
    assert!(stats.contains("Shooter: 2 个游戏\n"));
    assert!(stats.contains("Simulation: 0 个游戏\n"));
    assert!(stats.contains("\n总计: 3 个游戏\n"));
}

#[test]
fn genre_summary_is_sorted_with_translations() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("genres.txt");
    let listings = index(vec![
        listing("4d5307e6", "Halo 3", "Shooter"),
        listing("58410a8b", "Braid", "Puzzle"),
        listing("00000001", "Oddity", "Weird Genre"),
    ]);

    let count = write_genre_summary(&listings, &path).unwrap();
    assert_eq!(count, 3);

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Xbox 360游戏分类列表\n"));
    assert!(text.contains("Puzzle | 益智\n"));
    assert!(text.contains("Shooter | 射击\n"));
    assert!(text.contains(&format!("Weird Genre | {UNTRANSLATED}\n")));

    // Sorted output: Puzzle before Shooter before Weird Genre.
    let puzzle = text.find("Puzzle").unwrap();
    let shooter = text.find("Shooter").unwrap();
    let weird = text.find("Weird Genre").unwrap();
    assert!(puzzle < shooter && shooter < weird);
}
