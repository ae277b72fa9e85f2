use xenon_catalog::types::GameEntry;
use xenon_catalog::{CatalogError, load_catalog, load_translations, write_catalog};

fn sample_entry() -> GameEntry {
    GameEntry {
        platform: "Xbox 360".to_string(),
        title_id: "4D5307E6".to_string(),
        title: "Halo 3".to_string(),
        title_cn: Some("光环3".to_string()),
        developer: Some("Bungie".to_string()),
        publisher: Some("Microsoft".to_string()),
        folder_title: None,
        category: Some("Shooter".to_string()),
        year: Some("2007".to_string()),
    }
}

#[test]
fn accepts_both_title_id_spellings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.json");
    std::fs::write(
        &path,
        r#"[
            {"Title ID": "4D5307E6", "Title": "Halo 3"},
            {"TitleID": "415607D2", "Title": "The Orange Box"}
        ]"#,
    )
    .unwrap();

    let games = load_catalog(&path).unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].title_id, "4D5307E6");
    assert_eq!(games[1].title_id, "415607D2");
}

#[test]
fn missing_optional_fields_stay_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("games.json");
    std::fs::write(&path, r#"[{"TitleID": "ABCD1234", "Title": "Foo"}]"#).unwrap();

    let games = load_catalog(&path).unwrap();
    assert_eq!(games[0].developer, None);
    assert_eq!(games[0].category, None);

    let out = dir.path().join("out.json");
    write_catalog(&out, &games).unwrap();
    let text = std::fs::read_to_string(&out).unwrap();
    assert!(!text.contains("Developer"));
    assert!(!text.contains("Category"));
}

#[test]
fn round_trip_preserves_content_and_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");

    let mut second = sample_entry();
    second.title_id = "415607D2".to_string();
    second.title = "The Orange Box".to_string();
    second.title_cn = Some("The Orange Box".to_string());
    let games = vec![sample_entry(), second];

    write_catalog(&path, &games).unwrap();
    let reloaded = load_catalog(&path).unwrap();
    assert_eq!(reloaded, games);
}

#[test]
fn output_is_pretty_with_literal_non_ascii() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.json");
    write_catalog(&path, &[sample_entry()]).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains("    \"TitleID\": \"4D5307E6\""));
    assert!(text.contains("光环3"));
    assert!(!text.contains("\\u"));
}

#[test]
fn translations_load_and_fall_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("translations.json");
    std::fs::write(&path, r#"{"Halo 3": "光环3"}"#).unwrap();

    let table = load_translations(&path).unwrap();
    assert_eq!(table.get("Halo 3"), Some("光环3"));
    assert_eq!(table.translate("Halo 3"), "光环3");
    assert_eq!(table.translate("Unknown Game"), "Unknown Game");
}

#[test]
fn missing_catalog_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
}

#[test]
fn malformed_catalog_is_a_json_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    std::fs::write(&path, "not json").unwrap();
    let err = load_catalog(&path).unwrap_err();
    assert!(matches!(err, CatalogError::Json { .. }));
}
