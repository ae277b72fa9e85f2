use xenon_catalog::types::GameEntry;
use xenon_db::{content_stats, insert_game, open_memory, sample_rows};

fn game(title_id: &str, title: &str, title_cn: &str) -> GameEntry {
    GameEntry {
        platform: "Xbox 360".to_string(),
        title_id: title_id.to_string(),
        title: title.to_string(),
        title_cn: Some(title_cn.to_string()),
        developer: None,
        publisher: None,
        folder_title: None,
        category: None,
        year: None,
    }
}

#[test]
fn stats_count_translated_rows() {
    let conn = open_memory().unwrap();
    insert_game(&conn, &game("4D5307E6", "Halo 3", "光环3")).unwrap();
    insert_game(&conn, &game("415607D2", "The Orange Box", "The Orange Box")).unwrap();

    let stats = content_stats(&conn).unwrap();
    assert_eq!(stats.total, 2);
    assert_eq!(stats.translated, 1);
    assert!((stats.coverage() - 50.0).abs() < f64::EPSILON);
}

#[test]
fn stats_on_empty_table() {
    let conn = open_memory().unwrap();
    let stats = content_stats(&conn).unwrap();
    assert_eq!(stats.total, 0);
    assert_eq!(stats.coverage(), 0.0);
}

#[test]
fn sample_rows_follow_insertion_order() {
    let conn = open_memory().unwrap();
    insert_game(&conn, &game("4D5307E6", "Halo 3", "光环3")).unwrap();
    insert_game(&conn, &game("415607D2", "The Orange Box", "The Orange Box")).unwrap();
    insert_game(&conn, &game("58410A8B", "Braid", "时空幻境")).unwrap();

    let rows = sample_rows(&conn, 2).unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].title.as_deref(), Some("Halo 3"));
    assert_eq!(rows[1].title.as_deref(), Some("The Orange Box"));
}
